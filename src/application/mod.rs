//! Application layer with session state and command handling.

/// Service implementations.
pub mod services;

pub use services::{ConfirmationGate, HabitTracker, NotificationManager, SubmitOutcome};
