//! Dashboard view models
//!
//! Read-only summaries computed from the current progression state.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{HabitCategory, HabitId};
use crate::progression::{LevelProgress, ProgressionState};

/// One bar of the streak comparison chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakBar {
    pub habit_id: HabitId,
    pub label: String,
    pub category: HabitCategory,
    pub current_streak: u32,
    pub max_streak: u32,
    pub done_today: bool,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub display_name: String,
    pub experience: u32,
    pub level: u32,
    pub coins: u32,
    pub progress: LevelProgress,
    pub badges: Vec<String>,
    pub active_habits: usize,
    pub done_today: usize,
    pub best_current_streak: u32,
    pub best_ever_streak: u32,
    pub streaks: Vec<StreakBar>,
    /// Habits whose streak qualifies for a proof token
    pub proof_token_eligible: Vec<HabitId>,
}

impl DashboardSummary {
    pub fn build(state: &ProgressionState, today: NaiveDate) -> Self {
        let profile = &state.profile;
        let streaks: Vec<StreakBar> = state
            .habits
            .iter()
            .map(|h| StreakBar {
                habit_id: h.id.clone(),
                label: h.short_name(),
                category: h.category,
                current_streak: h.current_streak,
                max_streak: h.max_streak,
                done_today: h.is_done_on(today),
                color: h.color.hex(),
            })
            .collect();

        Self {
            display_name: profile.display_name.clone(),
            experience: profile.experience(),
            level: profile.level(),
            coins: profile.currency(),
            progress: LevelProgress::new(profile.experience()),
            badges: profile.badges.iter().cloned().collect(),
            active_habits: state.habits.len(),
            done_today: streaks.iter().filter(|s| s.done_today).count(),
            best_current_streak: streaks.iter().map(|s| s.current_streak).max().unwrap_or(0),
            best_ever_streak: streaks.iter().map(|s| s.max_streak).max().unwrap_or(0),
            proof_token_eligible: state
                .habits
                .iter()
                .filter(|h| h.is_proof_token_eligible())
                .map(|h| h.id.clone())
                .collect(),
            streaks,
        }
    }

    /// Completion rate for today (0.0 - 1.0)
    pub fn completion_rate(&self) -> f64 {
        if self.active_habits == 0 {
            0.0
        } else {
            self.done_today as f64 / self.active_habits as f64
        }
    }
}
