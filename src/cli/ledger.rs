//! Ledger command implementation

use anyhow::{Context, Result};
use std::io::Write;

use habitquest::session::Session;

/// Widest bar in the text chart
const BAR_WIDTH: u32 = 40;

pub fn ledger_command(session: &Session, json: bool, out: &mut dyn Write) -> Result<()> {
    let ledger = &session.content().xp_log;
    if json {
        let text = serde_json::to_string_pretty(ledger.entries())
            .with_context(|| "Failed to serialize XP ledger")?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }

    if ledger.is_empty() {
        writeln!(out, "No XP history.")?;
        return Ok(());
    }

    let max = ledger.entries().iter().map(|e| e.amount).max().unwrap_or(1).max(1);
    writeln!(out, "Daily XP ({} days, {} total):\n", ledger.entries().len(), ledger.total())?;
    for (label, amount) in ledger.daily_series() {
        let width = (amount * BAR_WIDTH / max) as usize;
        writeln!(out, "  {} {:>3} {}", label, amount, "#".repeat(width))?;
    }

    writeln!(out, "\nSources:")?;
    for share in ledger.by_source() {
        writeln!(
            out,
            "  {:<10} {:>5} XP  {:>3.0}%",
            share.source.label(),
            share.amount,
            share.share * 100.0
        )?;
    }
    Ok(())
}
