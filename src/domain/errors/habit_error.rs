//! Habit command error types.

use thiserror::Error;

use crate::domain::entities::HabitId;

/// Errors produced by habit list commands.
///
/// Everything here is non-fatal: the UI surfaces validation failures as a
/// transient message and logs the rest.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HabitError {
    /// The submitted name was empty after trimming.
    #[error("habit name must not be empty")]
    EmptyName,

    /// The referenced habit no longer exists (deleted while an operation
    /// on it was still in flight).
    #[error("no habit with id {id}")]
    UnknownHabit {
        /// Id that failed to resolve.
        id: HabitId,
    },
}

impl HabitError {
    /// Creates an unknown-habit error.
    #[must_use]
    pub const fn unknown(id: HabitId) -> Self {
        Self::UnknownHabit { id }
    }

    /// Returns whether the error is a user-input validation failure,
    /// as opposed to a stale reference the UI silently absorbs.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyName)
    }
}
