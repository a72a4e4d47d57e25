//! Export and import use case
//!
//! Backups are a single JSON document with the entry collection, settings
//! and streak alongside some provenance. Imports merge: entries with known
//! ids are skipped, settings are merged key-by-key, and the streak is never
//! imported.

use crate::domain::entry::JournalEntry;
use crate::domain::settings::{Settings, SettingsPatch};
use crate::domain::streak::StreakRecord;
use crate::error::{ReflektError, Result};
use crate::infrastructure::EntryRepository;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use uuid::Uuid;

/// Backup format version
pub const BACKUP_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BackupPayload<'a> {
    entries: &'a [JournalEntry],
    settings: &'a Settings,
    streak: &'a StreakRecord,
    exported_at: DateTime<Utc>,
    version: &'a str,
}

/// Outcome of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Entries added to the collection
    pub imported: usize,
    /// Entries skipped because their id already existed locally
    pub skipped: usize,
}

/// Service for exporting and importing journal backups
pub struct BackupService {
    repository: EntryRepository,
}

impl BackupService {
    pub fn new(repository: EntryRepository) -> Self {
        BackupService { repository }
    }

    /// Serialize the whole journal as a backup document.
    pub fn export(&self) -> Result<String> {
        let entries = self.repository.get_all();
        let settings = self.repository.settings();
        let streak = self.repository.streak();

        let payload = BackupPayload {
            entries: &entries,
            settings: &settings,
            streak: &streak,
            exported_at: Utc::now(),
            version: BACKUP_VERSION,
        };

        serde_json::to_string_pretty(&payload)
            .map_err(|e| ReflektError::Storage(format!("failed to serialize backup: {}", e)))
    }

    /// Merge a backup document into the journal.
    ///
    /// The payload is validated in full before anything is written, so a
    /// malformed document never leaves a partial import behind.
    pub fn import(&self, json: &str) -> Result<ImportSummary> {
        let payload: Value = serde_json::from_str(json)
            .map_err(|e| ReflektError::Validation(format!("backup is not valid JSON: {}", e)))?;

        let entries_value = payload.get("entries").cloned().ok_or_else(|| {
            ReflektError::Validation("backup has no 'entries' field".to_string())
        })?;
        if !entries_value.is_array() {
            return Err(ReflektError::Validation(
                "backup 'entries' field is not an array".to_string(),
            ));
        }

        let incoming: Vec<JournalEntry> = serde_json::from_value(entries_value)
            .map_err(|e| ReflektError::Validation(format!("backup entries are malformed: {}", e)))?;

        let settings_patch: Option<SettingsPatch> = match payload.get("settings") {
            Some(value) => Some(serde_json::from_value(value.clone()).map_err(|e| {
                ReflektError::Validation(format!("backup settings are malformed: {}", e))
            })?),
            None => None,
        };

        let existing = self.repository.get_all();
        let existing_ids: HashSet<Uuid> = existing.iter().map(|e| e.id).collect();

        let (new_entries, skipped): (Vec<JournalEntry>, Vec<JournalEntry>) = incoming
            .into_iter()
            .partition(|e| !existing_ids.contains(&e.id));

        let imported = new_entries.len();
        let mut merged = new_entries;
        merged.extend(existing);
        self.repository.replace_entries(&merged)?;

        if let Some(patch) = settings_patch {
            let mut settings = self.repository.settings();
            settings.merge(patch);
            self.repository.save_settings(&settings)?;
        }

        Ok(ImportSummary {
            imported,
            skipped: skipped.len(),
        })
    }
}
