//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reflekt")]
#[command(about = "Terminal journaling application", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create a new entry
    New {
        /// Entry title
        #[arg(short, long)]
        title: Option<String>,

        /// Entry content (markup is stored as-is)
        #[arg(short, long)]
        content: Option<String>,

        /// Mood, 1 (terrible) to 5 (amazing)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        mood: Option<u8>,

        /// Comma-separated tags (at most 10 are kept)
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Edit an existing entry
    Edit {
        /// Entry id
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,

        /// New mood, 1 to 5
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        mood: Option<u8>,

        /// Remove the recorded mood
        #[arg(long, conflicts_with = "mood")]
        clear_mood: bool,

        /// Replace tags (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,
    },

    /// Show a single entry
    Show {
        /// Entry id
        id: String,
    },

    /// List entries, newest first
    List {
        /// Only entries from this day (DD-MM-YYYY)
        #[arg(long)]
        date: Option<String>,

        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Search entries by text and filters
    Search {
        /// Text to match against title, content and tags
        query: Option<String>,

        /// Only entries with this exact mood
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        mood: Option<u8>,

        /// Only entries carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Only entries created on or after this day (DD-MM-YYYY)
        #[arg(long)]
        from: Option<String>,

        /// Only entries created on or before this day (DD-MM-YYYY)
        #[arg(long)]
        to: Option<String>,
    },

    /// List all tags with usage counts
    Tags,

    /// Show journal statistics
    Stats,

    /// Show the mood trend over recent days
    Trend {
        /// Number of days to cover
        #[arg(long, default_value_t = 7)]
        days: usize,
    },

    /// Show personalized writing insights
    Insights,

    /// View or modify settings
    Config {
        /// Settings key to get or set (theme, font-size)
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all settings
        #[arg(short, long)]
        list: bool,
    },

    /// Export the journal as a JSON backup
    Export {
        /// Output file (default: reflekt-backup-<date>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import entries from a JSON backup
    Import {
        /// Backup file to import
        file: PathBuf,
    },

    /// Delete all journal data
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}
