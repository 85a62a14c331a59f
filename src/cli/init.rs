//! Init command implementation

use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

use habitquest::config::Config;

/// Default configuration content for habitquest init
pub const DEFAULT_CONFIG: &str = r#"# habitquest configuration
# ========================
#
# Progression state is never saved; these settings only shape how a
# session is seeded and scored.

[settings]
# Replaces the seeded profile name
# display_name = "ShadowSlayer99"

# Streak XP bonus once a streak passes 7 days:
#   "flat"   - +5 XP per check-in (default)
#   "scaled" - +5 XP per full week of streak
streak_bonus = "flat"

# Days of XP history shown by `habitquest ledger`
ledger_days = 30
"#;

/// Write a default config file to `config_path` or `<dir>/.habitquest/config.toml`
pub fn init_command(work_dir: &Path, config_path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| Config::local_config_path(work_dir));

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::write_file(&config_path, DEFAULT_CONFIG)?;
    info!("Wrote default config");
    println!("Created: {}", config_path.display());

    Ok(())
}
