//! Domain layer with core entities, derived values, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Transient notification model.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Completion progress.
pub mod progress;

pub use entities::{Habit, HabitId};
pub use errors::{HabitError, StorageError};
pub use notification::{Notification, NotificationLevel};
pub use ports::HabitStoragePort;
pub use progress::Progress;
