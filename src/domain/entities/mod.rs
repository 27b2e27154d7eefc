//! Domain entity definitions.

mod habit;

pub use habit::{Habit, HabitId};
