//! Entry repository over the JSON store
//!
//! All reads load the relevant record as a whole and all mutations write it
//! back as a whole. Entries are kept newest-first; that is the canonical
//! storage order every query preserves.

use crate::domain::entry::{EntryDraft, EntryPatch, JournalEntry};
use crate::domain::mood;
use crate::domain::search::{self, SearchFilters};
use crate::domain::settings::Settings;
use crate::domain::stats::JournalStats;
use crate::domain::streak::StreakRecord;
use crate::domain::text;
use crate::error::{ReflektError, Result};
use crate::infrastructure::store::{JsonStore, ALL_KEYS, ENTRIES_KEY, SETTINGS_KEY, STREAK_KEY};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

/// A tag with its occurrence count across all entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Repository for journal entries, settings and the streak record
#[derive(Debug, Clone)]
pub struct EntryRepository {
    store: JsonStore,
}

impl EntryRepository {
    pub fn new(store: JsonStore) -> Self {
        EntryRepository { store }
    }

    fn load_entries(&self) -> Vec<JournalEntry> {
        self.store.get(ENTRIES_KEY).unwrap_or_default()
    }

    fn save_entries(&self, entries: &[JournalEntry]) -> Result<()> {
        self.store.set(ENTRIES_KEY, &entries)
    }

    /// Create an entry and register today's writing activity.
    ///
    /// The entry and streak records are written independently; if the
    /// process dies between the two writes the streak simply misses one
    /// day of credit.
    pub fn create(&self, draft: EntryDraft) -> Result<JournalEntry> {
        let entry = JournalEntry::new(draft, Utc::now())?;

        let mut entries = self.load_entries();
        entries.insert(0, entry.clone());
        self.save_entries(&entries)?;

        let mut streak = self.streak();
        streak.record_activity(Utc::now().date_naive());
        self.save_streak(&streak)?;

        Ok(entry)
    }

    /// Apply a patch to an existing entry. Fails with `NotFound` and no
    /// side effect when the id is unknown.
    pub fn update(&self, id: Uuid, patch: EntryPatch) -> Result<JournalEntry> {
        let mut entries = self.load_entries();
        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            return Err(ReflektError::NotFound(id.to_string()));
        };

        entry.apply_patch(patch, Utc::now())?;
        let updated = entry.clone();
        self.save_entries(&entries)?;
        Ok(updated)
    }

    /// Hard-delete an entry. Fails with `NotFound` and no side effect when
    /// the id is unknown.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut entries = self.load_entries();
        let before = entries.len();
        entries.retain(|e| e.id != id);

        if entries.len() == before {
            return Err(ReflektError::NotFound(id.to_string()));
        }

        self.save_entries(&entries)
    }

    /// All entries in storage order (newest first)
    pub fn get_all(&self) -> Vec<JournalEntry> {
        self.load_entries()
    }

    /// Replace the whole entry collection. Used by import, which builds
    /// the merged collection itself.
    pub fn replace_entries(&self, entries: &[JournalEntry]) -> Result<()> {
        self.save_entries(entries)
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<JournalEntry> {
        self.load_entries().into_iter().find(|e| e.id == id)
    }

    /// Entries created on the given calendar day
    pub fn get_by_date(&self, date: NaiveDate) -> Vec<JournalEntry> {
        self.load_entries()
            .into_iter()
            .filter(|e| e.created_at.date_naive() == date)
            .collect()
    }

    /// Entries matching the query and every set filter, in storage order
    pub fn search(&self, query: &str, filters: &SearchFilters) -> Vec<JournalEntry> {
        self.load_entries()
            .into_iter()
            .filter(|e| search::matches(e, query, filters))
            .collect()
    }

    /// Tag counts over all entries, sorted by count descending.
    /// Ties keep the tag first encountered in storage order.
    pub fn all_tags(&self) -> Vec<TagCount> {
        let mut counts: Vec<TagCount> = Vec::new();

        for entry in self.load_entries() {
            for tag in &entry.tags {
                match counts.iter_mut().find(|c| &c.tag == tag) {
                    Some(existing) => existing.count += 1,
                    None => counts.push(TagCount {
                        tag: tag.clone(),
                        count: 1,
                    }),
                }
            }
        }

        // Stable sort keeps first-seen order within equal counts
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    /// Aggregate statistics. Runs the streak expiry check and persists an
    /// expiry when it fires.
    pub fn stats(&self) -> Result<JournalStats> {
        let entries = self.load_entries();
        let streak = self.check_streak()?;

        let total_words = entries.iter().map(|e| text::count_words(&e.content)).sum();

        Ok(JournalStats {
            total_entries: entries.len(),
            total_words,
            current_streak: streak.current,
            longest_streak: streak.longest,
            avg_mood: mood::average(&entries),
        })
    }

    // --- Settings and streak records ---

    /// Current settings, defaults when the record is absent or corrupt
    pub fn settings(&self) -> Settings {
        self.store.get(SETTINGS_KEY).unwrap_or_default()
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.store.set(SETTINGS_KEY, settings)
    }

    /// Current streak record, defaults when absent or corrupt
    pub fn streak(&self) -> StreakRecord {
        self.store.get(STREAK_KEY).unwrap_or_default()
    }

    pub fn save_streak(&self, streak: &StreakRecord) -> Result<()> {
        self.store.set(STREAK_KEY, streak)
    }

    /// Expire the streak if it lapsed, persisting only when it changed
    pub fn check_streak(&self) -> Result<StreakRecord> {
        let mut streak = self.streak();
        if streak.check(Utc::now().date_naive()) {
            self.save_streak(&streak)?;
        }
        Ok(streak)
    }

    /// Remove every persisted record
    pub fn clear(&self) -> Result<()> {
        for key in ALL_KEYS {
            self.store.remove(key)?;
        }
        Ok(())
    }
}
