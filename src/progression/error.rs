use crate::domain::HabitId;

/// Errors raised by progression transitions
///
/// A failed transition never produces a new state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("Habit not found: {0}")]
    HabitNotFound(HabitId),

    #[error("Habit name must not be empty")]
    EmptyHabitName,
}
