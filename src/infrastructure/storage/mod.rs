//! Habit storage adapters.

mod json_habit_store;

pub use json_habit_store::JsonHabitStore;
