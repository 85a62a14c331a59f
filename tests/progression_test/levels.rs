//! Level curve tests

use habitquest::progression::{derive_level, LevelProgress};
use habitquest::Profile;

#[test]
fn test_profile_1450_xp_is_level_13() {
    assert_eq!(derive_level(1450), 13);
    assert_eq!(Profile::new("u1", "ShadowSlayer99", 1450, 0).level(), 13);
}

#[test]
fn test_level_is_at_least_one() {
    assert_eq!(derive_level(0), 1);
    assert_eq!(LevelProgress::new(0).level, 1);
}

#[test]
fn test_level_boundaries() {
    // Level n starts at 10 * (n - 1)^2
    let cases = [(9, 1), (10, 2), (39, 2), (40, 3), (89, 3), (90, 4), (1000, 11)];
    for (xp, level) in cases {
        assert_eq!(derive_level(xp), level, "xp = {}", xp);
    }
}

#[test]
fn test_level_progress_fraction_in_range() {
    for xp in (0..5_000).step_by(37) {
        let progress = LevelProgress::new(xp);
        let fraction = progress.progress_to_next();
        assert!((0.0..1.0).contains(&fraction), "xp = {}: {}", xp, fraction);
        assert!(progress.current_level_xp <= xp && xp < progress.next_level_xp);
    }
}
