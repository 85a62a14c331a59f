//! XP and coin rewards for check-ins

use serde::{Deserialize, Serialize};

/// How the streak XP bonus scales with streak length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakBonusPolicy {
    /// Flat +5 once the streak passes seven days
    #[default]
    Flat,
    /// +5 per full week once the streak passes seven days
    Scaled,
}

impl StreakBonusPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Scaled => "scaled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Some(Self::Flat),
            "scaled" => Some(Self::Scaled),
            _ => None,
        }
    }
}

/// Reward constants and formulas
pub struct XpRewards;

impl XpRewards {
    /// XP for any first check-in of the day
    pub const CHECK_IN: u32 = 10;

    /// Streak bonus unit
    pub const STREAK_BONUS: u32 = 5;

    /// Streak must be strictly longer than this to earn a bonus
    pub const STREAK_BONUS_AFTER_DAYS: u32 = 7;

    /// Coins for reaching a streak milestone
    pub const COIN_BONUS: u32 = 20;

    /// Streak milestones fall on multiples of this
    pub const COIN_BONUS_INTERVAL: u32 = 5;

    /// Bonus XP for a check-in that brings the streak to `streak`
    pub fn streak_bonus(streak: u32, policy: StreakBonusPolicy) -> u32 {
        if streak <= Self::STREAK_BONUS_AFTER_DAYS {
            return 0;
        }
        match policy {
            StreakBonusPolicy::Flat => Self::STREAK_BONUS,
            StreakBonusPolicy::Scaled => {
                Self::STREAK_BONUS * (streak / Self::STREAK_BONUS_AFTER_DAYS)
            }
        }
    }

    /// Coins for a check-in that brings the streak to `streak`
    pub fn coin_bonus(streak: u32) -> u32 {
        if streak > 0 && streak % Self::COIN_BONUS_INTERVAL == 0 {
            Self::COIN_BONUS
        } else {
            0
        }
    }
}
