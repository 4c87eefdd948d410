mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use timetable_core::config::{Language, TimetableConfig};
use timetable_core::date_filter::DateFilter;
use timetable_core::ics;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "timetable")]
#[command(about = "Print a readable schedule from an iCalendar (.ics) timetable export")]
struct Cli {
    /// Calendar file to read (overrides `calendar_file` in config.toml)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Language for day and month names ("fr" or "en")
    #[arg(long, global = true)]
    lang: Option<Language>,

    /// Log parsing details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every event in file order (the default)
    List {
        /// Only show events starting on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only show events starting on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Print events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the agenda for a single day
    Day {
        /// YYYY-MM-DD or "today"
        date: Option<String>,
    },
    /// Show events grouped by day
    Week {
        /// Only show events starting on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only show events starting on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Show configuration paths and values
    Config {
        /// Write a commented default config.toml if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;
    let language = config.language;

    match cli.command {
        None => commands::list::run(read_events(&config)?, &DateFilter::default(), language, false),
        Some(Commands::List { from, to, json }) => {
            let filter = DateFilter::from_args(from.as_deref(), to.as_deref())?;
            commands::list::run(read_events(&config)?, &filter, language, json)
        }
        Some(Commands::Day { date }) => {
            let date = commands::day::resolve_date(date.as_deref())?;
            commands::day::run(read_events(&config)?, date, language)
        }
        Some(Commands::Week { from, to }) => {
            let filter = DateFilter::from_args(from.as_deref(), to.as_deref())?;
            commands::week::run(read_events(&config)?, &filter, language)
        }
        Some(Commands::Config { init }) => commands::config::run(&config, init),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Config file and environment, with command-line flags on top.
fn resolve_config(cli: &Cli) -> Result<TimetableConfig> {
    let mut config = TimetableConfig::load().context("Failed to load configuration")?;

    if let Some(file) = &cli.file {
        config.calendar_file = file.clone();
    }
    if let Some(lang) = cli.lang {
        config.language = lang;
    }

    Ok(config)
}

fn read_events(config: &TimetableConfig) -> Result<Vec<timetable_core::Event>> {
    let path = config.calendar_path();
    let events = ics::read_events(&path)?;
    tracing::debug!(count = events.len(), path = %path.display(), "Loaded events");
    Ok(events)
}
