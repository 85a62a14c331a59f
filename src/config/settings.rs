//! Settings configuration types

use serde::{Deserialize, Serialize};

use crate::progression::StreakBonusPolicy;
use crate::seed::DEFAULT_LEDGER_DAYS;

/// General settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Replaces the seeded profile's display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Streak XP bonus rule: "flat" (default) or "scaled"
    #[serde(default)]
    pub streak_bonus: StreakBonusPolicy,

    /// Days of seeded XP history shown on the dashboard
    #[serde(default = "default_ledger_days")]
    pub ledger_days: u32,
}

fn default_ledger_days() -> u32 {
    DEFAULT_LEDGER_DAYS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_name: None,
            streak_bonus: StreakBonusPolicy::default(),
            ledger_days: default_ledger_days(),
        }
    }
}
