//! Domain layer - Entry model, analytics and business rules

pub mod entry;
pub mod insights;
pub mod mood;
pub mod search;
pub mod settings;
pub mod stats;
pub mod streak;
pub mod text;

pub use entry::{EntryDraft, EntryPatch, JournalEntry};
pub use search::SearchFilters;
pub use settings::{Settings, Theme};
pub use stats::JournalStats;
pub use streak::StreakRecord;
