//! Entry search and filtering

use crate::domain::entry::JournalEntry;
use crate::domain::text::strip_markup;
use chrono::{DateTime, Utc};

/// Filter criteria combined conjunctively with the text query.
/// Unset fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// Exact mood match
    pub mood: Option<u8>,
    /// Lower bound on `created_at`, inclusive
    pub start_date: Option<DateTime<Utc>>,
    /// Upper bound on `created_at`, inclusive
    pub end_date: Option<DateTime<Utc>>,
    /// Exact tag membership
    pub tag: Option<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.mood.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.tag.is_none()
    }
}

/// Whether an entry satisfies the query and every set filter.
///
/// A non-empty query matches case-insensitively as a substring of the
/// title, the markup-stripped content, or any tag.
pub fn matches(entry: &JournalEntry, query: &str, filters: &SearchFilters) -> bool {
    if !query.is_empty() {
        let query = query.to_lowercase();
        let title_match = entry.title.to_lowercase().contains(&query);
        let content_match = strip_markup(&entry.content).to_lowercase().contains(&query);
        let tag_match = entry.tags.iter().any(|t| t.to_lowercase().contains(&query));
        if !(title_match || content_match || tag_match) {
            return false;
        }
    }

    if let Some(mood) = filters.mood {
        if entry.mood != Some(mood) {
            return false;
        }
    }
    if let Some(start) = filters.start_date {
        if entry.created_at < start {
            return false;
        }
    }
    if let Some(end) = filters.end_date {
        if entry.created_at > end {
            return false;
        }
    }
    if let Some(tag) = &filters.tag {
        if !entry.tags.contains(tag) {
            return false;
        }
    }

    true
}
