//! Session container tests against the seeded content

use habitquest::config::Config;
use habitquest::session::Session;
use habitquest::{HabitCategory, HabitId};

use crate::common::day;

#[test]
fn test_seeded_habits_checked_in_today_are_noops() {
    let mut session = Session::from_config(&Config::default(), day("2026-10-17"));
    let before = session.state().clone();

    assert!(session.check_in(&HabitId::new("h1")).unwrap().is_empty());
    assert!(session.check_in(&HabitId::new("h3")).unwrap().is_empty());
    assert_eq!(session.state(), &before);
}

#[test]
fn test_new_habit_flow() {
    let mut session = Session::from_config(&Config::default(), day("2026-10-17"));
    session.add_habit("Read 20 pages", HabitCategory::Study).unwrap();

    let id = session.state().habits[0].id.clone();
    assert_eq!(session.state().habits.len(), 4);

    for _ in 0..5 {
        session.check_in(&id).unwrap();
        session.advance_day();
    }

    let habit = session.state().habit(&id).unwrap();
    assert_eq!(habit.current_streak, 5);
    assert_eq!(session.state().profile.experience(), 1450 + 50);
    assert_eq!(session.state().profile.currency(), 450 + 20);

    let summary = session.dashboard();
    assert_eq!(summary.level, 13);
    assert_eq!(summary.active_habits, 4);
}

#[test]
fn test_seed_content_is_not_mutated() {
    let mut session = Session::from_config(&Config::default(), day("2026-10-17"));
    session.check_in(&HabitId::new("h2")).unwrap();

    assert_eq!(session.content().habits[1].current_streak, 8);
    assert_eq!(session.content().profile.experience(), 1450);
    assert_eq!(session.content().xp_log.entries().len(), 30);
}
