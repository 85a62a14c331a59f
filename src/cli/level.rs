//! Level command implementation

use anyhow::Result;
use std::io::Write;

use habitquest::progression::LevelProgress;

pub fn level_command(xp: u32, out: &mut dyn Write) -> Result<()> {
    let progress = LevelProgress::new(xp);
    writeln!(out, "{} XP = level {}", xp, progress.level)?;
    writeln!(
        out,
        "  Level {} starts at {} XP, level {} at {} XP ({} to go, {:.0}% there)",
        progress.level,
        progress.current_level_xp,
        progress.level + 1,
        progress.next_level_xp,
        progress.xp_to_next(),
        progress.progress_to_next() * 100.0
    )?;
    Ok(())
}
