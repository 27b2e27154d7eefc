//! UI screens.

mod app;
mod habit_screen;

pub use app::App;
pub use habit_screen::{HabitKeyResult, HabitScreen, HabitView};
