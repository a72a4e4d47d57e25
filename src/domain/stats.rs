//! Aggregate journal statistics

/// Summary numbers over the whole journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JournalStats {
    pub total_entries: usize,
    /// Markup-stripped word count summed across all entries
    pub total_words: usize,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Rounded average mood over mood-bearing entries
    pub avg_mood: Option<u8>,
}
