//! Progression rules: XP, levels, coins and streaks
//!
//! The engine is a set of pure transitions over [`ProgressionState`]. It owns
//! no state itself; the [`crate::session::Session`] container holds the
//! current state and swaps in each transition's result.

mod engine;
mod error;
mod levels;
mod rewards;

pub use engine::{ProgressionEngine, ProgressionEvent, ProgressionState, Transition};
pub use error::ProgressionError;
pub use levels::{derive_level, xp_for_level, LevelProgress, LevelUp};
pub use rewards::{StreakBonusPolicy, XpRewards};
