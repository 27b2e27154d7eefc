//! Port definitions.

mod habit_storage_port;

pub use habit_storage_port::HabitStoragePort;

#[cfg(test)]
pub use habit_storage_port::mock;
