//! Shared fixtures for progression tests

use chrono::{Days, NaiveDate};
use habitquest::progression::ProgressionState;
use habitquest::{Habit, HabitCategory, HabitId, Profile};

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).expect("date in range")
}

/// A state with one habit `h1` at `streak`, last checked in the day before `today`
pub fn state_with_streak(streak: u32, experience: u32, today: NaiveDate) -> ProgressionState {
    let mut habit = Habit::new(HabitId::new("h1"), "Morning 2km Run", HabitCategory::Run);
    habit.current_streak = streak;
    habit.max_streak = streak;
    habit.last_checked_in = if streak > 0 {
        today.checked_sub_days(Days::new(1))
    } else {
        None
    };
    ProgressionState::new(Profile::new("u1", "Tester", experience, 0), vec![habit])
}
