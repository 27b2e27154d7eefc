//! Aggregate completion progress derived from the habit list.

use std::fmt;

use crate::domain::entities::Habit;

/// Completed/total counts over a habit list snapshot.
///
/// Derived, never stored: recompute from the list whenever it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    completed: usize,
    total: usize,
}

impl Progress {
    /// Computes progress over the given habits.
    #[must_use]
    pub fn of(habits: &[Habit]) -> Self {
        Self {
            completed: habits.iter().filter(|h| h.is_completed()).count(),
            total: habits.len(),
        }
    }

    /// Returns the completed count.
    #[must_use]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Returns the total count.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the completion percentage rounded to the nearest integer.
    ///
    /// An empty list is 0%, not a division by zero.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }

        ((self.completed as f64 / self.total as f64) * 100.0).round() as u8
    }

    /// Returns the ratio in `0.0..=1.0` for gauge widgets.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        self.completed as f64 / self.total as f64
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% ({}/{})", self.percentage(), self.completed, self.total)
    }
}
