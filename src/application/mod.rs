//! Application layer - Use cases and orchestration

pub mod backup;
pub mod init;
pub mod manage_settings;

pub use backup::{BackupService, ImportSummary};
pub use manage_settings::SettingsService;
