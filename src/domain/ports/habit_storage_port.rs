//! Habit storage port definition.

use async_trait::async_trait;

use crate::domain::entities::Habit;
use crate::domain::errors::StorageError;

/// Port for habit list persistence.
///
/// Implementations hold one full snapshot of the list; `save` overwrites it
/// wholesale and `load` returns it (or an empty list when nothing usable is
/// stored). There are no partial writes and no versioning.
#[async_trait]
pub trait HabitStoragePort: Send + Sync {
    /// Loads the persisted habit list.
    ///
    /// Absent or unparseable data yields `Ok(vec![])`, never an error.
    async fn load(&self) -> Result<Vec<Habit>, StorageError>;

    /// Persists the full habit list, replacing the previous snapshot.
    async fn save(&self, habits: &[Habit]) -> Result<(), StorageError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    /// In-memory habit storage for testing.
    pub struct MockHabitStorage {
        habits: Arc<RwLock<Vec<Habit>>>,
        saves: AtomicUsize,
        fail_saves: bool,
    }

    impl MockHabitStorage {
        /// Creates empty mock storage.
        pub fn new() -> Self {
            Self {
                habits: Arc::new(RwLock::new(Vec::new())),
                saves: AtomicUsize::new(0),
                fail_saves: false,
            }
        }

        /// Creates mock storage seeded with habits.
        pub fn with_habits(habits: Vec<Habit>) -> Self {
            Self {
                habits: Arc::new(RwLock::new(habits)),
                saves: AtomicUsize::new(0),
                fail_saves: false,
            }
        }

        /// Makes every `save` fail with an io error.
        pub fn failing() -> Self {
            Self {
                fail_saves: true,
                ..Self::new()
            }
        }

        /// Returns how many times `save` was called.
        pub fn save_count(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    impl Default for MockHabitStorage {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HabitStoragePort for MockHabitStorage {
        async fn load(&self) -> Result<Vec<Habit>, StorageError> {
            Ok(self.habits.read().await.clone())
        }

        async fn save(&self, habits: &[Habit]) -> Result<(), StorageError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            if self.fail_saves {
                return Err(StorageError::Io(std::io::Error::other("mock save failure")));
            }
            *self.habits.write().await = habits.to_vec();
            Ok(())
        }
    }
}
