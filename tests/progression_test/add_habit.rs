//! Habit creation tests

use std::collections::HashSet;

use habitquest::progression::{ProgressionEngine, ProgressionError};
use habitquest::{ColorTag, HabitCategory};

use crate::common::{day, state_with_streak};

#[test]
fn test_add_read_20_pages() {
    let state = state_with_streak(3, 0, day("2026-10-17"));
    let before = state.habits.len();

    let t = ProgressionEngine::default()
        .add_habit(&state, "Read 20 pages", HabitCategory::Study)
        .unwrap();

    assert_eq!(t.state.habits.len(), before + 1);
    let habit = &t.state.habits[0];
    assert_eq!(habit.name, "Read 20 pages");
    assert_eq!(habit.category, HabitCategory::Study);
    assert_eq!(habit.current_streak, 0);
    assert_eq!(habit.max_streak, 0);
    assert_eq!(habit.last_checked_in, None);
    assert_eq!(habit.color, ColorTag::Blue);
    assert_eq!(t.state.habits[1].id.as_str(), "h1");
}

#[test]
fn test_ids_stay_unique() {
    let engine = ProgressionEngine::default();
    let mut state = state_with_streak(0, 0, day("2026-10-17"));
    for category in HabitCategory::all().iter().cycle().take(50) {
        state = engine.add_habit(&state, "Habit", *category).unwrap().state;
    }

    let ids: HashSet<_> = state.habits.iter().map(|h| h.id.clone()).collect();
    assert_eq!(ids.len(), 51);
}

#[test]
fn test_add_does_not_touch_profile() {
    let state = state_with_streak(3, 120, day("2026-10-17"));
    let t = ProgressionEngine::default()
        .add_habit(&state, "Meditate 10 min", HabitCategory::Meditate)
        .unwrap();
    assert_eq!(t.state.profile, state.profile);
    assert_eq!(t.state.habits[0].color, ColorTag::Indigo);
}

#[test]
fn test_blank_names_are_rejected() {
    let engine = ProgressionEngine::default();
    let state = state_with_streak(3, 0, day("2026-10-17"));
    for name in ["", "   ", "\t\n"] {
        assert_eq!(
            engine.add_habit(&state, name, HabitCategory::Code),
            Err(ProgressionError::EmptyHabitName)
        );
    }
}
