use chrono::{Duration, NaiveTime, Utc};
use clap::Parser;
use reflekt::application::{init, BackupService, SettingsService};
use reflekt::cli::{self, output, Cli, Commands};
use reflekt::domain::entry::{EntryDraft, EntryPatch};
use reflekt::domain::{insights, mood, SearchFilters};
use reflekt::error::ReflektError;
use reflekt::infrastructure::{EntryRepository, JsonStore};
use std::fs;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// At most this many insight messages are shown
const MAX_INSIGHTS: usize = 5;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn parse_id(id: &str) -> Result<Uuid, ReflektError> {
    Uuid::parse_str(id).map_err(|_| ReflektError::NotFound(id.to_string()))
}

fn open_repository() -> Result<EntryRepository, ReflektError> {
    Ok(EntryRepository::new(JsonStore::discover()?))
}

fn run(cli: Cli) -> Result<(), ReflektError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),

        Commands::New {
            title,
            content,
            mood,
            tags,
        } => {
            let repo = open_repository()?;
            let entry = repo.create(EntryDraft {
                title,
                content,
                mood,
                tags,
            })?;
            println!("Created entry {}", entry.id);
            Ok(())
        }

        Commands::Edit {
            id,
            title,
            content,
            mood,
            clear_mood,
            tags,
        } => {
            let patch = EntryPatch {
                title,
                content,
                mood: if clear_mood {
                    Some(None)
                } else {
                    mood.map(Some)
                },
                tags,
            };
            if patch.is_empty() {
                return Err(ReflektError::Validation(
                    "Nothing to update: pass --title, --content, --mood, --clear-mood or --tags"
                        .to_string(),
                ));
            }

            let repo = open_repository()?;
            let entry = repo.update(parse_id(&id)?, patch)?;
            println!("Updated entry {}", entry.id);
            Ok(())
        }

        Commands::Delete { id } => {
            let repo = open_repository()?;
            repo.delete(parse_id(&id)?)?;
            println!("Deleted entry {}", id);
            Ok(())
        }

        Commands::Show { id } => {
            let repo = open_repository()?;
            let entry = repo
                .get_by_id(parse_id(&id)?)
                .ok_or_else(|| ReflektError::NotFound(id.clone()))?;
            print!("{}", output::format_entry(&entry));
            Ok(())
        }

        Commands::List { date, limit } => {
            let repo = open_repository()?;
            let mut entries = match date {
                Some(date) => repo.get_by_date(cli::parse_date(&date)?),
                None => repo.get_all(),
            };
            if let Some(limit) = limit {
                entries.truncate(limit);
            }
            println!("{}", output::format_entry_list(&entries).trim_end());
            Ok(())
        }

        Commands::Search {
            query,
            mood,
            tag,
            from,
            to,
        } => {
            let filters = SearchFilters {
                mood,
                tag,
                start_date: match from {
                    Some(from) => Some(cli::parse_date(&from)?.and_time(NaiveTime::MIN).and_utc()),
                    None => None,
                },
                // Inclusive upper bound: the last second of the given day
                end_date: match to {
                    Some(to) => Some(
                        (cli::parse_date(&to)? + Duration::days(1))
                            .and_time(NaiveTime::MIN)
                            .and_utc()
                            - Duration::seconds(1),
                    ),
                    None => None,
                },
            };

            let repo = open_repository()?;
            let results = repo.search(query.as_deref().unwrap_or(""), &filters);
            println!("{}", output::format_entry_list(&results).trim_end());
            Ok(())
        }

        Commands::Tags => {
            let repo = open_repository()?;
            println!("{}", output::format_tag_list(&repo.all_tags()).trim_end());
            Ok(())
        }

        Commands::Stats => {
            let repo = open_repository()?;
            let stats = repo.stats()?;
            print!("{}", output::format_stats(&stats));
            Ok(())
        }

        Commands::Trend { days } => {
            let repo = open_repository()?;
            let trend = mood::trend(&repo.get_all(), days, Utc::now().date_naive());
            print!("{}", output::format_trend(&trend));
            Ok(())
        }

        Commands::Insights => {
            let repo = open_repository()?;
            let stats = repo.stats()?;
            let entries = repo.get_all();
            let mut messages = insights::insights(&stats, &entries);
            messages.truncate(MAX_INSIGHTS);
            print!("{}", output::format_insights(&messages));
            Ok(())
        }

        Commands::Config { key, value, list } => {
            let service = SettingsService::new(open_repository()?);

            if list {
                let settings = service.list();
                println!("theme = {}", settings.theme);
                println!("font-size = {}", settings.font_size);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: reflekt config [--list | <key> [<value>]]");
                println!("Valid keys: theme, font-size");
                Ok(())
            }
        }

        Commands::Export { output: target } => {
            let service = BackupService::new(open_repository()?);
            let json = service.export()?;

            let path = target.unwrap_or_else(|| {
                format!("reflekt-backup-{}.json", Utc::now().format("%Y-%m-%d")).into()
            });
            fs::write(&path, json)?;
            println!("Exported journal to {}", path.display());
            Ok(())
        }

        Commands::Import { file } => {
            let contents = fs::read_to_string(&file)?;
            let service = BackupService::new(open_repository()?);
            let summary = service.import(&contents)?;
            println!(
                "Imported {} entries ({} already present)",
                summary.imported, summary.skipped
            );
            Ok(())
        }

        Commands::Clear { yes } => {
            if !yes {
                println!("This deletes all journal data. Pass --yes to confirm.");
                return Ok(());
            }
            let repo = open_repository()?;
            repo.clear()?;
            println!("All journal data removed");
            Ok(())
        }
    }
}
