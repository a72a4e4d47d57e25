//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};

use crate::error::{ReflektError, Result};
use chrono::NaiveDate;

/// Parse a DD-MM-YYYY date argument
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%d-%m-%Y")
        .map_err(|_| ReflektError::Validation(format!("Invalid date format: '{}'", input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_day_month_year() {
        let date = parse_date("17-01-2025").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 17).unwrap());
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date("2025-01-17").is_err());
        assert!(parse_date("2025/01/17").is_err());
        assert!(parse_date("tomorrow").is_err());
    }
}
