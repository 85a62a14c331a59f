//! Progression engine - state transitions for habits and the profile
//!
//! Every operation takes the current [`ProgressionState`] by reference and
//! returns a [`Transition`] holding the next state plus the events that
//! happened. The input state is never mutated, and the engine never reads
//! the clock: callers pass `today`.

use chrono::NaiveDate;
use serde::Serialize;

use super::error::ProgressionError;
use super::levels::LevelUp;
use super::rewards::{StreakBonusPolicy, XpRewards};
use crate::domain::{Habit, HabitCategory, HabitId, Profile};

/// Profile plus the habits it owns, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressionState {
    pub profile: Profile,
    pub habits: Vec<Habit>,
}

impl ProgressionState {
    pub fn new(profile: Profile, habits: Vec<Habit>) -> Self {
        Self { profile, habits }
    }

    pub fn habit(&self, id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| &h.id == id)
    }

    fn contains(&self, id: &HabitId) -> bool {
        self.habit(id).is_some()
    }
}

/// Something that happened during a transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProgressionEvent {
    HabitAdded { habit_id: HabitId },
    StreakExtended { habit_id: HabitId, count: u32 },
    XpAwarded { amount: u32, streak_bonus: u32 },
    CoinsAwarded { amount: u32 },
    LevelUp(LevelUp),
}

/// Result of applying an operation to a state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub state: ProgressionState,
    pub events: Vec<ProgressionEvent>,
}

impl Transition {
    fn unchanged(state: &ProgressionState) -> Self {
        Self {
            state: state.clone(),
            events: Vec::new(),
        }
    }

    /// The updated habit, if it is part of the new state
    pub fn habit(&self, id: &HabitId) -> Option<&Habit> {
        self.state.habit(id)
    }

    pub fn profile(&self) -> &Profile {
        &self.state.profile
    }

    /// True when the operation had no effect
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }
}

/// Applies progression rules
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressionEngine {
    policy: StreakBonusPolicy,
}

impl ProgressionEngine {
    pub fn new(policy: StreakBonusPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> StreakBonusPolicy {
        self.policy
    }

    /// Create a habit and put it at the front of the collection
    pub fn add_habit(
        &self,
        state: &ProgressionState,
        name: &str,
        category: HabitCategory,
    ) -> Result<Transition, ProgressionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProgressionError::EmptyHabitName);
        }

        let mut id = HabitId::generate();
        while state.contains(&id) {
            id = HabitId::generate();
        }

        let habit = Habit::new(id.clone(), name, category);
        let mut next = state.clone();
        next.habits.insert(0, habit);

        Ok(Transition {
            state: next,
            events: vec![ProgressionEvent::HabitAdded { habit_id: id }],
        })
    }

    /// Record today's check-in for a habit
    ///
    /// A second check-in on the same day returns the state unchanged with
    /// no events.
    pub fn check_in(
        &self,
        state: &ProgressionState,
        habit_id: &HabitId,
        today: NaiveDate,
    ) -> Result<Transition, ProgressionError> {
        let index = state
            .habits
            .iter()
            .position(|h| &h.id == habit_id)
            .ok_or_else(|| ProgressionError::HabitNotFound(habit_id.clone()))?;

        if state.habits[index].is_done_on(today) {
            return Ok(Transition::unchanged(state));
        }

        let mut next = state.clone();
        let mut events = Vec::new();

        let habit = &mut next.habits[index];
        let new_streak = habit.current_streak.saturating_add(1);
        habit.current_streak = new_streak;
        habit.max_streak = habit.max_streak.max(new_streak);
        habit.last_checked_in = Some(today);
        events.push(ProgressionEvent::StreakExtended {
            habit_id: habit_id.clone(),
            count: new_streak,
        });

        let streak_bonus = XpRewards::streak_bonus(new_streak, self.policy);
        let xp = XpRewards::CHECK_IN + streak_bonus;
        let coins = XpRewards::coin_bonus(new_streak);

        let old_level = next.profile.level();
        next.profile.award(xp, coins);

        events.push(ProgressionEvent::XpAwarded {
            amount: xp,
            streak_bonus,
        });
        if coins > 0 {
            events.push(ProgressionEvent::CoinsAwarded { amount: coins });
        }
        let new_level = next.profile.level();
        if new_level > old_level {
            events.push(ProgressionEvent::LevelUp(LevelUp {
                old_level,
                new_level,
            }));
        }

        Ok(Transition {
            state: next,
            events,
        })
    }
}
