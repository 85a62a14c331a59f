//! Session state container
//!
//! Owns the current [`ProgressionState`] for one run of the app, forwards
//! user intents to the [`ProgressionEngine`], and swaps in the resulting
//! state. Nothing is persisted when the session ends.

use chrono::{Days, NaiveDate};
use tracing::{debug, info};

use crate::config::Config;
use crate::dashboard::DashboardSummary;
use crate::domain::{HabitCategory, HabitId};
use crate::progression::{
    ProgressionEngine, ProgressionError, ProgressionEvent, ProgressionState, Transition,
};
use crate::seed::SeedContent;

pub struct Session {
    engine: ProgressionEngine,
    state: ProgressionState,
    content: SeedContent,
    today: NaiveDate,
}

impl Session {
    pub fn new(content: SeedContent, engine: ProgressionEngine, today: NaiveDate) -> Self {
        let state = content.initial_state();
        Self {
            engine,
            state,
            content,
            today,
        }
    }

    /// Seed a session from mock content and apply config overrides
    pub fn from_config(config: &Config, today: NaiveDate) -> Self {
        let settings = &config.settings;
        let mut content = SeedContent::mock_with_ledger_days(today, settings.ledger_days);
        if let Some(name) = settings.display_name.as_deref().map(str::trim) {
            if !name.is_empty() {
                content.profile.display_name = name.to_string();
            }
        }
        debug!(
            "Session seeded for {} (streak bonus: {})",
            today,
            settings.streak_bonus.as_str()
        );
        Self::new(content, ProgressionEngine::new(settings.streak_bonus), today)
    }

    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    pub fn content(&self) -> &SeedContent {
        &self.content
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn engine(&self) -> &ProgressionEngine {
        &self.engine
    }

    /// Move the session clock to the next calendar day
    pub fn advance_day(&mut self) -> NaiveDate {
        if let Some(next) = self.today.checked_add_days(Days::new(1)) {
            self.today = next;
        }
        info!("Day advanced to {}", self.today);
        self.today
    }

    pub fn add_habit(
        &mut self,
        name: &str,
        category: HabitCategory,
    ) -> Result<Vec<ProgressionEvent>, ProgressionError> {
        let transition = self.engine.add_habit(&self.state, name, category)?;
        info!("Added {} habit '{}'", category, name.trim());
        Ok(self.apply(transition))
    }

    pub fn check_in(&mut self, habit_id: &HabitId) -> Result<Vec<ProgressionEvent>, ProgressionError> {
        let transition = self.engine.check_in(&self.state, habit_id, self.today)?;
        if transition.is_noop() {
            debug!("Habit {} already checked in on {}", habit_id, self.today);
        } else {
            info!("Checked in habit {} on {}", habit_id, self.today);
        }
        Ok(self.apply(transition))
    }

    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::build(&self.state, self.today)
    }

    fn apply(&mut self, transition: Transition) -> Vec<ProgressionEvent> {
        for event in &transition.events {
            debug!(?event, "progression event");
        }
        self.state = transition.state;
        transition.events
    }
}
