//! Interactive session command
//!
//! Reads one command per line and re-renders after every change. State
//! lives only as long as the loop does.

use anyhow::{bail, Result};
use std::io::{BufRead, Write};
use tracing::warn;

use habitquest::domain::{HabitCategory, HabitId};
use habitquest::progression::ProgressionEvent;
use habitquest::session::Session;

use super::{ledger, level, market, status};

const HELP: &str = "\
Commands:
  add <category> <name>   Add a habit (RUN, STUDY, GYM, CODE, MEDITATE)
  checkin <habit-id>      Check in a habit for today
  status                  Show the dashboard
  next-day                Move the clock to tomorrow
  level                   Show level progress
  ledger                  Show XP history
  market                  Show the marketplace
  help                    Show this help
  quit                    End the session";

/// A parsed line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Add { category: HabitCategory, name: String },
    CheckIn(HabitId),
    Status,
    NextDay,
    Level,
    Ledger,
    Market,
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "add" => {
                let Some((category, name)) = rest.split_once(char::is_whitespace) else {
                    bail!("Usage: add <category> <name>");
                };
                let Some(category) = HabitCategory::from_str(category) else {
                    bail!("Unknown category: {}", category);
                };
                Self::Add {
                    category,
                    name: name.trim().to_string(),
                }
            }
            "checkin" | "check" | "c" => {
                if rest.is_empty() {
                    bail!("Usage: checkin <habit-id>");
                }
                Self::CheckIn(HabitId::new(rest))
            }
            "status" | "s" => Self::Status,
            "next-day" | "next" => Self::NextDay,
            "level" => Self::Level,
            "ledger" => Self::Ledger,
            "market" => Self::Market,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => bail!("Unknown command: {} (try 'help')", other),
        };
        Ok(Some(command))
    }
}

/// Run the read-eval-print loop until `quit` or end of input
pub fn session_command(
    session: &mut Session,
    input: impl BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out, "habitquest session for {}. Type 'help' for commands.\n", session.today())?;
    status::print_dashboard(&session.dashboard(), out)?;

    for line in input.lines() {
        let line = line?;
        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match command {
            SessionCommand::Add { category, name } => match session.add_habit(&name, category) {
                Ok(events) => report_events(&events, out)?,
                Err(e) => {
                    warn!("Rejected habit: {}", e);
                    writeln!(out, "{}", e)?;
                }
            },
            SessionCommand::CheckIn(id) => match session.check_in(&id) {
                Ok(events) if events.is_empty() => {
                    writeln!(out, "Already checked in today.")?;
                }
                Ok(events) => report_events(&events, out)?,
                Err(e) => {
                    warn!("Check-in failed: {}", e);
                    writeln!(out, "{}", e)?;
                }
            },
            SessionCommand::Status => status::print_dashboard(&session.dashboard(), out)?,
            SessionCommand::NextDay => {
                let today = session.advance_day();
                writeln!(out, "It is now {}.", today)?;
            }
            SessionCommand::Level => {
                level::level_command(session.state().profile.experience(), out)?
            }
            SessionCommand::Ledger => ledger::ledger_command(session, false, out)?,
            SessionCommand::Market => market::market_command(session, out)?,
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::Quit => break,
        }
    }

    writeln!(out, "Session ended. Progress is not saved.")?;
    Ok(())
}

fn report_events(events: &[ProgressionEvent], out: &mut dyn Write) -> Result<()> {
    for event in events {
        match event {
            ProgressionEvent::HabitAdded { habit_id } => {
                writeln!(out, "Added habit {}", habit_id)?
            }
            ProgressionEvent::StreakExtended { habit_id, count } => {
                writeln!(out, "🔥 {} streak: {} days", habit_id, count)?
            }
            ProgressionEvent::XpAwarded {
                amount,
                streak_bonus,
            } => {
                if *streak_bonus > 0 {
                    writeln!(out, "+{} XP (incl. +{} streak bonus)", amount, streak_bonus)?
                } else {
                    writeln!(out, "+{} XP", amount)?
                }
            }
            ProgressionEvent::CoinsAwarded { amount } => writeln!(out, "+{} coins", amount)?,
            ProgressionEvent::LevelUp(level_up) => writeln!(
                out,
                "Level up! {} -> {}",
                level_up.old_level, level_up.new_level
            )?,
        }
    }
    Ok(())
}
