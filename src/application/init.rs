//! Initialize journal use case

use crate::domain::settings::Settings;
use crate::error::Result;
use crate::infrastructure::{EntryRepository, JsonStore};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = JsonStore::new(path.to_path_buf());
    store.initialize()?;

    // Seed the settings record with defaults
    let repo = EntryRepository::new(store);
    repo.save_settings(&Settings::default())?;

    println!("Initialized reflekt journal at {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::Theme;
    use tempfile::TempDir;

    #[test]
    fn init_creates_marker_and_default_settings() {
        let temp = TempDir::new().unwrap();

        init(temp.path()).unwrap();

        assert!(temp.path().join(".reflekt").is_dir());
        let repo = EntryRepository::new(JsonStore::new(temp.path().to_path_buf()));
        assert_eq!(repo.settings().theme, Theme::Dark);
    }

    #[test]
    fn init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("journals").join("mine");

        init(&nested).unwrap();
        assert!(nested.join(".reflekt").is_dir());
    }

    #[test]
    fn init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
