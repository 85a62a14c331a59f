use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use habitquest::config::Config;
use habitquest::session::Session;

mod cli;

#[derive(Parser)]
#[command(name = "habitquest")]
#[command(about = "Gamified habit tracking - streaks, XP and levels")]
#[command(version)]
struct Cli {
    /// Working directory used for config lookup (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to .habitquest/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Pin the session date (YYYY-MM-DD) instead of using the local clock
    #[arg(long, global = true)]
    today: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (reads commands from stdin)
    Session,

    /// Show the dashboard for the seeded profile
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the level and progress for an amount of XP
    Level {
        /// Total experience points
        xp: u32,
    },

    /// Show the XP history
    Ledger {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show marketplace listings and the reward shop
    Market,

    /// Initialize a new .habitquest/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn parse_today(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s)),
        None => Ok(Local::now().date_naive()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    if let Some(Commands::Init { force }) = cli.command {
        return cli::init::init_command(&work_dir, cli.config.as_deref(), force);
    }

    let config = Config::resolve(&work_dir, cli.config.as_deref())?;
    let today = parse_today(cli.today.as_deref())?;
    let mut session = Session::from_config(&config, today);
    let mut out = std::io::stdout().lock();

    match cli.command {
        Some(Commands::Status { json }) => cli::status::status_command(&session, json, &mut out)?,
        Some(Commands::Level { xp }) => cli::level::level_command(xp, &mut out)?,
        Some(Commands::Ledger { json }) => cli::ledger::ledger_command(&session, json, &mut out)?,
        Some(Commands::Market) => cli::market::market_command(&session, &mut out)?,
        Some(Commands::Session) | None => {
            let stdin = std::io::stdin().lock();
            cli::session::session_command(&mut session, stdin, &mut out)?;
        }
        Some(Commands::Init { .. }) => {}
    }

    Ok(())
}
