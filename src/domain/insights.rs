//! Heuristic insight messages
//!
//! An ordered table of `{predicate, message}` rules evaluated in a fixed
//! sequence over precomputed facts. The caller truncates the result to
//! however many messages it wants to show.

use crate::domain::entry::JournalEntry;
use crate::domain::mood::{self, MoodLevel};
use crate::domain::stats::JournalStats;

/// Direction of the recent mood trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrendDirection {
    Improving,
    Declining,
    Flat,
}

/// Facts the insight rules are evaluated against
struct InsightFacts {
    stats: JournalStats,
    mood_entry_count: usize,
    average: Option<&'static MoodLevel>,
    most_common: Option<&'static MoodLevel>,
    trend: TrendDirection,
}

type Rule = (
    fn(&InsightFacts) -> bool,
    fn(&InsightFacts) -> String,
);

/// Rules in presentation order: streak, entry count, word count, average
/// mood, most common mood, trend direction. Milestone groups are mutually
/// exclusive so at most one message per group fires.
const RULES: [Rule; 11] = [
    (
        |f| f.stats.current_streak >= 7,
        |f| {
            format!(
                "🔥 Amazing! You're on a {}-day streak!",
                f.stats.current_streak
            )
        },
    ),
    (
        |f| (3..7).contains(&f.stats.current_streak),
        |f| format!("🔥 Great job! {} days in a row!", f.stats.current_streak),
    ),
    (
        |f| f.stats.total_entries >= 100,
        |f| format!("📚 Wow! You've written {} entries!", f.stats.total_entries),
    ),
    (
        |f| (50..100).contains(&f.stats.total_entries),
        |f| {
            format!(
                "📚 Great progress! {} entries and counting!",
                f.stats.total_entries
            )
        },
    ),
    (
        |f| (10..50).contains(&f.stats.total_entries),
        |f| {
            format!(
                "📝 You've written {} entries. Keep it up!",
                f.stats.total_entries
            )
        },
    ),
    (
        |f| f.stats.total_words >= 10_000,
        |f| {
            format!(
                "✍️ You've written over {}k words!",
                f.stats.total_words / 1000
            )
        },
    ),
    (
        |f| f.mood_entry_count == 0,
        |_| "Start tracking your mood to see insights!".to_string(),
    ),
    (
        |f| f.average.is_some(),
        |f| match f.average {
            Some(avg) => format!("Your average mood is {} {}", avg.emoji, avg.label),
            None => String::new(),
        },
    ),
    (
        |f| f.most_common.is_some(),
        |f| match f.most_common {
            Some(common) => format!("{} {} is your most common mood", common.emoji, common.label),
            None => String::new(),
        },
    ),
    (
        |f| f.trend == TrendDirection::Improving,
        |_| "📈 Your mood has been improving recently!".to_string(),
    ),
    (
        |f| f.trend == TrendDirection::Declining,
        |_| "📉 Your mood has dipped recently. Be kind to yourself.".to_string(),
    ),
];

/// Generate insight messages for the journal.
///
/// `entries` must be in storage order (newest first) so the trend rule
/// compares the right windows.
pub fn insights(stats: &JournalStats, entries: &[JournalEntry]) -> Vec<String> {
    if entries.is_empty() {
        return vec!["Start journaling to see personalized insights!".to_string()];
    }

    let facts = gather_facts(stats, entries);
    RULES
        .iter()
        .filter(|(applies, _)| applies(&facts))
        .map(|(_, render)| render(&facts))
        .collect()
}

fn gather_facts(stats: &JournalStats, entries: &[JournalEntry]) -> InsightFacts {
    let mood_entries: Vec<&JournalEntry> = entries.iter().filter(|e| e.mood.is_some()).collect();

    InsightFacts {
        stats: *stats,
        mood_entry_count: mood_entries.len(),
        average: stats.avg_mood.and_then(mood::level),
        most_common: mood::most_common(entries),
        trend: trend_direction(&mood_entries),
    }
}

/// Compare the mean mood of the 7 most recent mood-bearing entries against
/// the 7 before them. Both windows need at least 3 entries to say anything.
fn trend_direction(mood_entries: &[&JournalEntry]) -> TrendDirection {
    let recent: Vec<u8> = mood_entries.iter().take(7).filter_map(|e| e.mood).collect();
    let older: Vec<u8> = mood_entries
        .iter()
        .skip(7)
        .take(7)
        .filter_map(|e| e.mood)
        .collect();

    if recent.len() < 3 || older.len() < 3 {
        return TrendDirection::Flat;
    }

    let mean = |moods: &[u8]| moods.iter().map(|&m| m as f64).sum::<f64>() / moods.len() as f64;
    let recent_avg = mean(&recent);
    let older_avg = mean(&older);

    if recent_avg > older_avg + 0.5 {
        TrendDirection::Improving
    } else if recent_avg < older_avg - 0.5 {
        TrendDirection::Declining
    } else {
        TrendDirection::Flat
    }
}
