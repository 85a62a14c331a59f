//! Check-in transition tests

use habitquest::progression::{
    ProgressionEngine, ProgressionError, ProgressionEvent, StreakBonusPolicy,
};
use habitquest::{CheckInState, HabitId};

use crate::common::{day, next_day, state_with_streak};

fn h1() -> HabitId {
    HabitId::new("h1")
}

#[test]
fn test_streak_6_to_7_gives_base_xp_only() {
    let today = day("2026-10-17");
    let state = state_with_streak(6, 100, today);
    let t = ProgressionEngine::default().check_in(&state, &h1(), today).unwrap();

    assert_eq!(t.habit(&h1()).unwrap().current_streak, 7);
    assert_eq!(t.profile().experience(), 110);
    assert_eq!(t.profile().currency(), 0);
}

#[test]
fn test_streak_7_to_8_gives_bonus() {
    let today = day("2026-10-17");
    let state = state_with_streak(7, 100, today);
    let t = ProgressionEngine::default().check_in(&state, &h1(), today).unwrap();

    assert_eq!(t.habit(&h1()).unwrap().current_streak, 8);
    assert_eq!(t.profile().experience(), 115);
    assert!(t.events.contains(&ProgressionEvent::XpAwarded {
        amount: 15,
        streak_bonus: 5
    }));
}

#[test]
fn test_streak_4_to_5_gives_coins() {
    let today = day("2026-10-17");
    let state = state_with_streak(4, 100, today);
    let t = ProgressionEngine::default().check_in(&state, &h1(), today).unwrap();

    assert_eq!(t.habit(&h1()).unwrap().current_streak, 5);
    assert_eq!(t.profile().currency(), 20);
    assert!(t.events.contains(&ProgressionEvent::CoinsAwarded { amount: 20 }));
}

#[test]
fn test_first_ever_check_in() {
    let today = day("2026-10-17");
    let state = state_with_streak(0, 0, today);
    assert_eq!(state.habits[0].check_in_state(today), CheckInState::NeverCheckedIn);

    let t = ProgressionEngine::default().check_in(&state, &h1(), today).unwrap();
    let habit = t.habit(&h1()).unwrap();
    assert_eq!(habit.current_streak, 1);
    assert_eq!(habit.max_streak, 1);
    assert_eq!(habit.check_in_state(today), CheckInState::CheckedInToday);
}

#[test]
fn test_same_day_twice_equals_once() {
    let today = day("2026-10-17");
    let engine = ProgressionEngine::default();
    let state = state_with_streak(4, 100, today);

    let once = engine.check_in(&state, &h1(), today).unwrap();
    let twice = engine.check_in(&once.state, &h1(), today).unwrap();
    assert_eq!(once.state, twice.state);
    assert!(twice.is_noop());
}

#[test]
fn test_each_new_day_adds_exactly_one() {
    let engine = ProgressionEngine::default();
    let mut today = day("2026-10-17");
    let mut state = state_with_streak(0, 0, today);

    for expected in 1..=40u32 {
        state = engine.check_in(&state, &h1(), today).unwrap().state;
        let habit = &state.habits[0];
        assert_eq!(habit.current_streak, expected);
        assert!(habit.max_streak >= habit.current_streak);
        assert_eq!(state.profile.level(), habitquest::progression::derive_level(state.profile.experience()));
        today = next_day(today);
    }

    // 40 * 10 base + 33 bonus days (streaks 8..=40) * 5, coins on 5, 10, ..., 40
    assert_eq!(state.profile.experience(), 400 + 33 * 5);
    assert_eq!(state.profile.currency(), 8 * 20);
}

#[test]
fn test_missed_days_do_not_reset_streak() {
    let engine = ProgressionEngine::default();
    let state = state_with_streak(3, 0, day("2026-10-17"));

    let t = engine.check_in(&state, &h1(), day("2026-11-30")).unwrap();
    assert_eq!(t.habit(&h1()).unwrap().current_streak, 4);
}

#[test]
fn test_earlier_date_is_ignored() {
    let engine = ProgressionEngine::default();
    let today = day("2026-10-17");
    let state = state_with_streak(3, 0, today);
    let checked = engine.check_in(&state, &h1(), today).unwrap().state;

    let back = engine.check_in(&checked, &h1(), day("2026-10-01")).unwrap();
    assert!(back.is_noop());
    assert_eq!(back.state.habits[0].last_checked_in, Some(today));
}

#[test]
fn test_unknown_habit_is_not_found() {
    let today = day("2026-10-17");
    let state = state_with_streak(3, 0, today);
    let result = ProgressionEngine::default().check_in(&state, &HabitId::new("zzz"), today);
    assert_eq!(result, Err(ProgressionError::HabitNotFound(HabitId::new("zzz"))));
}

#[test]
fn test_level_up_event() {
    let today = day("2026-10-17");
    // 1430 XP is level 12; +10 reaches 1440, the start of level 13
    let state = state_with_streak(2, 1430, today);
    let t = ProgressionEngine::default().check_in(&state, &h1(), today).unwrap();
    assert_eq!(t.profile().level(), 13);
    assert!(t.events.iter().any(|e| matches!(
        e,
        ProgressionEvent::LevelUp(l) if l.old_level == 12 && l.new_level == 13
    )));
}

#[test]
fn test_scaled_policy_is_opt_in() {
    let today = day("2026-10-17");
    let state = state_with_streak(20, 0, today);

    let flat = ProgressionEngine::default().check_in(&state, &h1(), today).unwrap();
    let scaled = ProgressionEngine::new(StreakBonusPolicy::Scaled)
        .check_in(&state, &h1(), today)
        .unwrap();
    // streak 21: flat +5, scaled +5 * 3
    assert_eq!(flat.profile().experience(), 15);
    assert_eq!(scaled.profile().experience(), 25);
}
