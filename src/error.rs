//! Error types for reflekt

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the reflekt application
#[derive(Debug, Error)]
pub enum ReflektError {
    #[error("Not a reflekt journal: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReflektError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ReflektError::NotJournalDirectory(_) => 2,
            ReflektError::NotFound(_) => 3,
            ReflektError::Validation(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ReflektError::NotJournalDirectory(path) => {
                format!(
                    "Not a reflekt journal: {}\n\n\
                    Suggestions:\n\
                    • Run 'reflekt init' in this directory to create a new journal\n\
                    • Navigate to an existing reflekt directory\n\
                    • Set REFLEKT_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            ReflektError::NotFound(id) => {
                format!(
                    "Entry not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'reflekt list' to see your entries and their ids\n\
                    • Check that the id was copied completely",
                    id
                )
            }
            ReflektError::Validation(msg) => {
                if msg.contains("mood") {
                    format!(
                        "{}\n\n\
                        Mood is a number from 1 (terrible) to 5 (amazing)\n\
                        Example: reflekt new --mood 4",
                        msg
                    )
                } else if msg.contains("date format") {
                    format!(
                        "{}\n\n\
                        Expected format: DD-MM-YYYY\n\
                        Example: reflekt search --from 17-01-2025 --to 31-01-2025",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            ReflektError::Config(msg) => {
                if msg.contains("Invalid theme") {
                    format!(
                        "{}\n\n\
                        Valid themes: light, dark\n\
                        Example: reflekt config theme dark",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ReflektError
pub type Result<T> = std::result::Result<T, ReflektError>;
