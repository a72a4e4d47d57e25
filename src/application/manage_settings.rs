//! Settings management use case

use crate::domain::settings::{Settings, Theme};
use crate::error::{ReflektError, Result};
use crate::infrastructure::EntryRepository;
use std::str::FromStr;

/// Service for viewing and changing journal settings
pub struct SettingsService {
    repository: EntryRepository,
}

impl SettingsService {
    pub fn new(repository: EntryRepository) -> Self {
        SettingsService { repository }
    }

    /// Get a single settings value
    pub fn get(&self, key: &str) -> Result<String> {
        let settings = self.repository.settings();

        match key {
            "theme" => Ok(settings.theme.to_string()),
            "font-size" => Ok(settings.font_size),
            _ => Err(ReflektError::Config(format!(
                "Unknown settings key: '{}'. Valid keys are: theme, font-size",
                key
            ))),
        }
    }

    /// Set a settings value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut settings = self.repository.settings();

        match key {
            "theme" => {
                settings.theme = Theme::from_str(value).map_err(ReflektError::Config)?;
            }
            "font-size" => {
                settings.font_size = value.to_string();
            }
            _ => {
                return Err(ReflektError::Config(format!(
                    "Unknown settings key: '{}'. Valid keys are: theme, font-size",
                    key
                )));
            }
        }

        self.repository.save_settings(&settings)?;
        Ok(())
    }

    /// All settings values
    pub fn list(&self) -> Settings {
        self.repository.settings()
    }
}
