//! Status command implementation

use anyhow::{Context, Result};
use std::io::Write;

use habitquest::dashboard::DashboardSummary;
use habitquest::session::Session;

/// Print the dashboard for the current session
pub fn status_command(session: &Session, json: bool, out: &mut dyn Write) -> Result<()> {
    let summary = session.dashboard();
    if json {
        let text = serde_json::to_string_pretty(&summary)
            .with_context(|| "Failed to serialize dashboard")?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }
    print_dashboard(&summary, out)
}

pub fn print_dashboard(summary: &DashboardSummary, out: &mut dyn Write) -> Result<()> {
    let progress = &summary.progress;
    writeln!(out, "{}", summary.display_name)?;
    writeln!(
        out,
        "  LVL {}  {} XP ({}/{} to next, {:.0}%)  {} coins",
        summary.level,
        summary.experience,
        progress.total_xp - progress.current_level_xp,
        progress.next_level_xp - progress.current_level_xp,
        progress.progress_to_next() * 100.0,
        summary.coins
    )?;
    if !summary.badges.is_empty() {
        writeln!(out, "  Badges: {}", summary.badges.join(", "))?;
    }
    writeln!(
        out,
        "  Today: {}/{} done  Best streak: {} (all-time {})",
        summary.done_today, summary.active_habits, summary.best_current_streak, summary.best_ever_streak
    )?;
    writeln!(out)?;

    if summary.streaks.is_empty() {
        writeln!(out, "No habits yet. Add one with: add <category> <name>")?;
        return Ok(());
    }

    writeln!(out, "Habits ({}):\n", summary.streaks.len())?;
    for bar in &summary.streaks {
        writeln!(
            out,
            "  [{}] {} {:<13} {:>3} days (best {})  {}  id: {}",
            if bar.done_today { "x" } else { " " },
            bar.category.icon(),
            bar.label,
            bar.current_streak,
            bar.max_streak,
            bar.category,
            bar.habit_id
        )?;
    }

    if !summary.proof_token_eligible.is_empty() {
        writeln!(out)?;
        for id in &summary.proof_token_eligible {
            writeln!(out, "  Habit {} can be listed as a proof token", id)?;
        }
    }

    Ok(())
}
