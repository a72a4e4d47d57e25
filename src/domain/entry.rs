//! Journal entry model

use crate::error::{ReflektError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of tags an entry may carry
pub const MAX_TAGS: usize = 10;

/// A single journal entry.
///
/// Stored on disk as JSON with camelCase field names. `id` and `created_at`
/// are immutable once the entry is created; `updated_at` moves on every
/// mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: Uuid,
    pub title: String,
    /// Rich-text content as opaque serialized markup
    pub content: String,
    /// Self-reported mood, 1 (terrible) to 5 (amazing)
    pub mood: Option<u8>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Create a new entry from a draft, filling defaults for missing fields.
    pub fn new(draft: EntryDraft, now: DateTime<Utc>) -> Result<Self> {
        validate_mood(draft.mood)?;
        Ok(JournalEntry {
            id: Uuid::new_v4(),
            title: draft.title.unwrap_or_default(),
            content: draft.content.unwrap_or_default(),
            mood: draft.mood,
            tags: normalize_tags(draft.tags),
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a patch field-by-field. `id` and `created_at` cannot be patched
    /// by construction; `updated_at` always moves to `now`.
    pub fn apply_patch(&mut self, patch: EntryPatch, now: DateTime<Utc>) -> Result<()> {
        if let Some(mood) = patch.mood {
            validate_mood(mood)?;
            self.mood = mood;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(tags) = patch.tags {
            self.tags = normalize_tags(tags);
        }
        self.updated_at = now;
        Ok(())
    }
}

/// Input for creating an entry; every field is optional and defaulted.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<u8>,
    pub tags: Vec<String>,
}

/// Explicit patch for updating an entry.
///
/// `None` leaves a field untouched. For `mood`, `Some(None)` clears the
/// recorded mood while `Some(Some(m))` sets it.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<Option<u8>>,
    pub tags: Option<Vec<String>>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.mood.is_none() && self.tags.is_none()
    }
}

/// Deduplicate tags preserving insertion order, capped at `MAX_TAGS`.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_string();
        if tag.is_empty() || seen.contains(&tag) {
            continue;
        }
        seen.push(tag);
        if seen.len() == MAX_TAGS {
            break;
        }
    }
    seen
}

fn validate_mood(mood: Option<u8>) -> Result<()> {
    match mood {
        Some(m) if !(1..=5).contains(&m) => Err(ReflektError::Validation(format!(
            "Invalid mood: {} (must be between 1 and 5)",
            m
        ))),
        _ => Ok(()),
    }
}
