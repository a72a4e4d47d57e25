//! Output formatting utilities

use crate::domain::entry::JournalEntry;
use crate::domain::mood::{self, TrendDay};
use crate::domain::stats::JournalStats;
use crate::domain::text;
use crate::infrastructure::TagCount;

const PREVIEW_LENGTH: usize = 150;

fn mood_marker(mood: Option<u8>) -> &'static str {
    mood.and_then(mood::level).map(|l| l.emoji).unwrap_or("—")
}

/// Format a list of entries for display
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let title = if entry.title.is_empty() {
            "Untitled Entry"
        } else {
            &entry.title
        };
        output.push_str(&format!(
            "{}  {}  {}\n",
            entry.created_at.format("%d-%m-%Y %H:%M"),
            mood_marker(entry.mood),
            title
        ));
        output.push_str(&format!("    id: {}\n", entry.id));

        let preview = text::truncate(&text::strip_markup(&entry.content), PREVIEW_LENGTH);
        if !preview.is_empty() {
            output.push_str(&format!("    {}\n", preview));
        }
        if !entry.tags.is_empty() {
            let tags: Vec<String> = entry.tags.iter().map(|t| format!("#{}", t)).collect();
            output.push_str(&format!("    {}\n", tags.join(" ")));
        }
    }
    output
}

/// Format a single entry in full
pub fn format_entry(entry: &JournalEntry) -> String {
    let mut output = String::new();
    let title = if entry.title.is_empty() {
        "Untitled Entry"
    } else {
        &entry.title
    };
    output.push_str(&format!("{}\n", title));
    output.push_str(&format!("id:      {}\n", entry.id));
    output.push_str(&format!(
        "created: {}\n",
        entry.created_at.format("%d-%m-%Y %H:%M")
    ));
    output.push_str(&format!(
        "updated: {}\n",
        entry.updated_at.format("%d-%m-%Y %H:%M")
    ));

    if let Some(level) = entry.mood.and_then(mood::level) {
        output.push_str(&format!("mood:    {} {}\n", level.emoji, level.label));
    }
    if !entry.tags.is_empty() {
        let tags: Vec<String> = entry.tags.iter().map(|t| format!("#{}", t)).collect();
        output.push_str(&format!("tags:    {}\n", tags.join(" ")));
    }

    let body = text::strip_markup(&entry.content);
    if !body.is_empty() {
        output.push('\n');
        output.push_str(&body);
        output.push('\n');
    }
    output
}

/// Format tag counts for display
pub fn format_tag_list(tags: &[TagCount]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("#{}  {}\n", tag.tag, tag.count));
    }
    output
}

/// Format journal statistics
pub fn format_stats(stats: &JournalStats) -> String {
    let mood = match stats.avg_mood.and_then(mood::level) {
        Some(level) => format!("{} {}", level.emoji, level.label),
        None => "—".to_string(),
    };

    format!(
        "Entries:        {}\n\
         Words:          {}\n\
         Current streak: {} days\n\
         Longest streak: {} days\n\
         Average mood:   {}\n",
        stats.total_entries, stats.total_words, stats.current_streak, stats.longest_streak, mood
    )
}

/// Format a mood trend, oldest day first
pub fn format_trend(days: &[TrendDay]) -> String {
    let mut output = String::new();
    for day in days {
        let entries = match day.entry_count {
            1 => "1 entry".to_string(),
            n => format!("{} entries", n),
        };
        output.push_str(&format!(
            "{}  {}  ({})\n",
            day.date.format("%d-%m-%Y"),
            mood_marker(day.mood),
            entries
        ));
    }
    output
}

/// Format insight messages as a bulleted list
pub fn format_insights(messages: &[String]) -> String {
    let mut output = String::new();
    for message in messages {
        output.push_str(&format!("• {}\n", message));
    }
    output
}
