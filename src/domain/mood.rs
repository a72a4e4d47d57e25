//! Mood levels and aggregation
//!
//! Pure functions over entry lists; no storage access.

use crate::domain::entry::JournalEntry;
use chrono::{Duration, NaiveDate};

/// A mood level with its presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodLevel {
    pub value: u8,
    pub emoji: &'static str,
    pub label: &'static str,
}

/// Mood levels, best first.
pub const LEVELS: [MoodLevel; 5] = [
    MoodLevel {
        value: 5,
        emoji: "😄",
        label: "Amazing",
    },
    MoodLevel {
        value: 4,
        emoji: "🙂",
        label: "Good",
    },
    MoodLevel {
        value: 3,
        emoji: "😐",
        label: "Okay",
    },
    MoodLevel {
        value: 2,
        emoji: "😔",
        label: "Bad",
    },
    MoodLevel {
        value: 1,
        emoji: "😢",
        label: "Terrible",
    },
];

/// Look up the level for a mood value.
pub fn level(value: u8) -> Option<&'static MoodLevel> {
    LEVELS.iter().find(|l| l.value == value)
}

/// Average mood over entries that carry one, rounded to the nearest level.
///
/// Rounds half away from zero, so `[3, 4]` averages to 4. Returns `None`
/// when no entry has a mood set.
pub fn average(entries: &[JournalEntry]) -> Option<u8> {
    let moods: Vec<u8> = entries.iter().filter_map(|e| e.mood).collect();
    if moods.is_empty() {
        return None;
    }
    let mean = moods.iter().map(|&m| m as f64).sum::<f64>() / moods.len() as f64;
    Some(mean.round() as u8)
}

/// Count of entries per mood value. Index 0 holds mood 1.
pub fn distribution(entries: &[JournalEntry]) -> [usize; 5] {
    let mut counts = [0usize; 5];
    for entry in entries {
        if let Some(mood) = entry.mood {
            if (1..=5).contains(&mood) {
                counts[(mood - 1) as usize] += 1;
            }
        }
    }
    counts
}

/// The most frequent mood, ties broken in favor of the better level.
/// `None` when no entry carries a mood.
pub fn most_common(entries: &[JournalEntry]) -> Option<&'static MoodLevel> {
    let counts = distribution(entries);
    // max_by_key keeps the last of equal maxima; ascending order makes
    // that the better level
    LEVELS
        .iter()
        .rev()
        .map(|l| (l, counts[(l.value - 1) as usize]))
        .filter(|(_, count)| *count > 0)
        .max_by_key(|(_, count)| *count)
        .map(|(l, _)| l)
}

/// One day in a mood trend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendDay {
    pub date: NaiveDate,
    /// Rounded average mood of the day's entries; `None` if none carry one
    pub mood: Option<u8>,
    pub entry_count: usize,
}

/// Per-day mood averages over the last `days` calendar days ending at
/// `today`, oldest first.
pub fn trend(entries: &[JournalEntry], days: usize, today: NaiveDate) -> Vec<TrendDay> {
    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset as i64);
            let day_entries: Vec<&JournalEntry> = entries
                .iter()
                .filter(|e| e.created_at.date_naive() == date)
                .collect();

            let moods: Vec<u8> = day_entries.iter().filter_map(|e| e.mood).collect();
            let mood = if moods.is_empty() {
                None
            } else {
                let mean = moods.iter().map(|&m| m as f64).sum::<f64>() / moods.len() as f64;
                Some(mean.round() as u8)
            };

            TrendDay {
                date,
                mood,
                entry_count: day_entries.len(),
            }
        })
        .collect()
}
