//! Level curve
//!
//! `level = floor(sqrt(xp / 10)) + 1`, so level `n` starts at `10 * (n - 1)^2` XP.

use serde::Serialize;

/// Derive the level for a total amount of experience
pub fn derive_level(experience: u32) -> u32 {
    // floor(sqrt(x / 10)) == isqrt(floor(x / 10)) for non-negative x
    (experience / 10).isqrt() + 1
}

/// Total XP at which `level` is reached
pub fn xp_for_level(level: u32) -> u32 {
    let steps = level.saturating_sub(1);
    steps.saturating_mul(steps).saturating_mul(10)
}

/// Where a profile sits on the level curve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelProgress {
    pub total_xp: u32,
    pub level: u32,
    /// XP at which the current level started
    pub current_level_xp: u32,
    /// XP needed to reach the next level
    pub next_level_xp: u32,
}

impl LevelProgress {
    pub fn new(total_xp: u32) -> Self {
        let level = derive_level(total_xp);
        Self {
            total_xp,
            level,
            current_level_xp: xp_for_level(level),
            next_level_xp: xp_for_level(level + 1),
        }
    }

    /// Progress to the next level (0.0 - 1.0)
    pub fn progress_to_next(&self) -> f32 {
        let xp_in_level = self.total_xp - self.current_level_xp;
        let xp_for_level = self.next_level_xp.saturating_sub(self.current_level_xp);
        if xp_for_level == 0 {
            1.0
        } else {
            (xp_in_level as f32) / (xp_for_level as f32)
        }
    }

    pub fn xp_to_next(&self) -> u32 {
        self.next_level_xp.saturating_sub(self.total_xp)
    }
}

/// Emitted when a transition moves the profile to a higher level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}
