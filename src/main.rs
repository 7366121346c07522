//! Command-line front end for the habit stores.
//!
//! Every subcommand maps onto one of the store operations; the binary
//! itself holds no habit logic. This is where the real clock is read:
//! dates default to the local calendar day and are passed down explicitly.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use habitual::domain::habit::weekday_from_sunday_index;
use habitual::{
    FileStorage, Frequency, HabitId, HabitPatch, HabitStore, NewHabit, ThemeStore,
};

/// Resolve the default data directory, preferring the platform data dir,
/// then the home directory, then the working directory.
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|p| p.join("habitual"))
        .or_else(|| dirs::home_dir().map(|p| p.join(".habitual")))
        .unwrap_or_else(|| PathBuf::from(".habitual"))
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FrequencyArg {
    Daily,
    Weekly,
    Custom,
}

impl From<FrequencyArg> for Frequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::Daily => Frequency::Daily,
            FrequencyArg::Weekly => Frequency::Weekly,
            FrequencyArg::Custom => Frequency::Custom,
        }
    }
}

/// Command line arguments for the habitual CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the persisted collections
    /// If not provided, uses a default location in the user's data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new habit
    Add {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "general")]
        category: String,
        #[arg(long, value_enum, default_value_t = FrequencyArg::Daily)]
        frequency: FrequencyArg,
        /// Weekday indices for custom frequency (0 = Sunday .. 6 = Saturday)
        #[arg(long, value_delimiter = ',')]
        days: Vec<u8>,
        #[arg(long, default_value = "#4f46e5")]
        color: String,
        /// Completions needed per day
        #[arg(long, default_value_t = 1)]
        goal: u32,
        #[arg(long, default_value_t = 0)]
        points: u32,
    },
    /// List all habits
    List {
        /// Group the listing by category
        #[arg(long)]
        by_category: bool,
    },
    /// Show habits applicable today
    Today,
    /// Show one habit with its current stats
    Show { id: String },
    /// Update fields of an existing habit
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        goal: Option<u32>,
        #[arg(long)]
        points: Option<u32>,
    },
    /// Delete a habit and its completion records
    Delete { id: String },
    /// Toggle a habit's completion cycle for a day
    Toggle {
        id: String,
        /// Day to toggle (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Streak and completion rate for a habit
    Stats {
        id: String,
        /// Completion-rate window in days
        #[arg(long, default_value_t = 30)]
        window: u32,
    },
    /// Show or toggle the dark-mode preference
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habitual={log_level}"))
        .with_writer(std::io::stderr)
        .init();

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    info!("using data directory: {}", data_dir.display());

    run(cli.command, data_dir)
}

fn run(command: Command, data_dir: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let today = Local::now().date_naive();

    if let Command::Theme { toggle } = command {
        let storage = FileStorage::new(data_dir)?;
        // No portable system dark-mode signal from a terminal; seed light.
        let mut theme = ThemeStore::open(storage, None)?;
        if toggle {
            theme.toggle_dark_mode()?;
        }
        println!("dark mode: {}", if theme.dark_mode() { "on" } else { "off" });
        return Ok(());
    }

    let storage = FileStorage::new(data_dir)?;
    let mut store = HabitStore::open(storage)?;

    match command {
        Command::Add {
            name,
            description,
            category,
            frequency,
            days,
            color,
            goal,
            points,
        } => {
            let frequency_days = if days.is_empty() {
                None
            } else {
                let mut parsed = Vec::with_capacity(days.len());
                for index in days {
                    parsed.push(
                        weekday_from_sunday_index(index)
                            .ok_or_else(|| format!("invalid weekday index {index}, expected 0-6"))?,
                    );
                }
                Some(parsed)
            };

            let habit = store.add_habit(NewHabit {
                name,
                description,
                category,
                frequency: frequency.into(),
                frequency_days,
                color,
                daily_goal: goal,
                points,
            })?;
            println!("added {} ({})", habit.name, habit.id);
        }
        Command::List { by_category } => {
            if by_category {
                for (category, habits) in store.habits_by_category() {
                    println!("{category}:");
                    for habit in habits {
                        println!("  {} ({})", habit.name, habit.id);
                    }
                }
            } else {
                for habit in store.habits() {
                    println!("{} ({})", habit.name, habit.id);
                }
            }
        }
        Command::Today => {
            for habit in store.todays_habits(today) {
                let status = if store.completion_status(&habit.id, today) {
                    format!("in progress {}/{}", store.completion_count(&habit.id, today), habit.daily_goal)
                } else {
                    "not started".to_string()
                };
                println!("{} ({}) - {}", habit.name, habit.id, status);
            }
        }
        Command::Show { id } => {
            let id = HabitId::parse(&id)?;
            match store.habit_by_id(&id) {
                Some(habit) => {
                    println!("{} ({})", habit.name, habit.id);
                    if !habit.description.is_empty() {
                        println!("  {}", habit.description);
                    }
                    println!("  category: {}", habit.category);
                    println!("  goal: {}/day, points: {}", habit.daily_goal, habit.points);
                    println!("  streak: {} days", store.streak_count(&id, today));
                    println!("  30-day rate: {:.1}%", store.completion_rate(&id, 30, today));
                }
                None => println!("habit not found"),
            }
        }
        Command::Update {
            id,
            name,
            description,
            category,
            color,
            goal,
            points,
        } => {
            let id = HabitId::parse(&id)?;
            let patch = HabitPatch {
                name,
                description,
                category,
                color,
                daily_goal: goal,
                points,
                ..Default::default()
            };
            match store.update_habit(&id, patch)? {
                Some(habit) => println!("updated {}", habit.name),
                None => println!("habit not found"),
            }
        }
        Command::Delete { id } => {
            let id = HabitId::parse(&id)?;
            store.delete_habit(&id)?;
            println!("deleted");
        }
        Command::Toggle { id, date } => {
            let id = HabitId::parse(&id)?;
            if store.habit_by_id(&id).is_none() {
                println!("habit not found");
                return Ok(());
            }
            let date = date.unwrap_or(today);
            store.toggle_completion(&id, date)?;
            println!(
                "{}: completed={}, count={}",
                date,
                store.completion_status(&id, date),
                store.completion_count(&id, date)
            );
        }
        Command::Stats { id, window } => {
            let id = HabitId::parse(&id)?;
            match store.habit_by_id(&id) {
                Some(habit) => {
                    println!("{}", habit.name);
                    println!("  streak: {} days", store.streak_count(&id, today));
                    println!(
                        "  {window}-day rate: {:.1}%",
                        store.completion_rate(&id, window, today)
                    );
                }
                None => println!("habit not found"),
            }
        }
        Command::Theme { .. } => unreachable!("handled above"),
    }

    Ok(())
}
