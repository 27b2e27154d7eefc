//! JSON file adapter for the habit storage port.

use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use directories::ProjectDirs;
use tokio::fs;
use tracing::warn;

use crate::domain::entities::Habit;
use crate::domain::errors::StorageError;
use crate::domain::ports::HabitStoragePort;

const HABITS_FILE_NAME: &str = "habits.json";

/// Habit list persistence as a JSON array of `{name, completed}` objects.
///
/// The whole list is written on every save (temp file + atomic rename); a
/// missing or unreadable-as-a-habit-list file loads as an empty list so a
/// corrupt file never blocks startup.
#[derive(Debug, Clone)]
pub struct JsonHabitStore {
    data_path: Option<PathBuf>,
}

impl Default for JsonHabitStore {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonHabitStore {
    /// Creates a store over the platform data directory.
    ///
    /// If project directories cannot be determined, persistence is disabled
    /// and a warning is logged.
    #[must_use]
    pub fn new() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("com", "habitui", "habitui") {
            let data_path = proj_dirs.data_dir().join(HABITS_FILE_NAME);
            Self {
                data_path: Some(data_path),
            }
        } else {
            warn!("Failed to determine project directories. Habit persistence disabled.");
            Self { data_path: None }
        }
    }

    /// Creates a store over an explicit file path.
    #[must_use]
    pub const fn with_path(path: PathBuf) -> Self {
        Self {
            data_path: Some(path),
        }
    }
}

#[async_trait]
impl HabitStoragePort for JsonHabitStore {
    async fn load(&self) -> Result<Vec<Habit>, StorageError> {
        let Some(path) = &self.data_path else {
            return Ok(Vec::new());
        };

        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).await?;

        match serde_json::from_str::<Vec<Habit>>(&content) {
            Ok(habits) => {
                if habits.iter().any(|h| h.name().trim().is_empty()) {
                    warn!(path = %path.display(), "Habit file contains blank names. Starting empty.");
                    return Ok(Vec::new());
                }
                Ok(habits)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to parse habit file. Starting empty.");
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, habits: &[Habit]) -> Result<(), StorageError> {
        let Some(path) = &self.data_path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(habits)?;

        // Temp file + rename so a crash mid-write cannot truncate the list.
        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn habits(names: &[&str]) -> Vec<Habit> {
        names.iter().map(|n| Habit::new(n).unwrap()).collect()
    }

    #[tokio::test]
    async fn test_round_trip_preserves_content_and_order() {
        let dir = tempdir().unwrap();
        let store = JsonHabitStore::with_path(dir.path().join(HABITS_FILE_NAME));

        let mut saved = habits(&["Run", "Swim", "Read"]);
        saved[1].toggle();
        store.save(&saved).await.unwrap();

        let loaded = store.load().await.unwrap();

        assert_eq!(loaded.len(), 3);
        for (saved, loaded) in saved.iter().zip(&loaded) {
            assert_eq!(saved.name(), loaded.name());
            assert_eq!(saved.is_completed(), loaded.is_completed());
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_yields_empty_list() {
        let dir = tempdir().unwrap();
        let store = JsonHabitStore::with_path(dir.path().join(HABITS_FILE_NAME));

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_malformed_file_yields_empty_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(HABITS_FILE_NAME);
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonHabitStore::with_path(path.clone());

        assert!(store.load().await.unwrap().is_empty());
        // The file is left untouched for inspection.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json at all");
    }

    #[tokio::test]
    async fn test_load_wrong_shape_yields_empty_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(HABITS_FILE_NAME);
        std::fs::write(&path, r#"[{"title":"Run","done":false}]"#).unwrap();

        let store = JsonHabitStore::with_path(path);

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_blank_name_yields_empty_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(HABITS_FILE_NAME);
        std::fs::write(
            &path,
            r#"[{"name":"Run","completed":false},{"name":"   ","completed":true}]"#,
        )
        .unwrap();

        let store = JsonHabitStore::with_path(path);

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let dir = tempdir().unwrap();
        let store = JsonHabitStore::with_path(dir.path().join(HABITS_FILE_NAME));

        store.save(&habits(&["Run", "Swim"])).await.unwrap();
        store.save(&habits(&["Read"])).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name(), "Read");
    }

    #[tokio::test]
    async fn test_repeated_save_writes_identical_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(HABITS_FILE_NAME);
        let store = JsonHabitStore::with_path(path.clone());
        let list = habits(&["Run", "Swim"]);

        store.save(&list).await.unwrap();
        let first = std::fs::read(&path).unwrap();

        store.save(&list).await.unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_persisted_layout_is_two_field_objects() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(HABITS_FILE_NAME);
        let store = JsonHabitStore::with_path(path.clone());

        store.save(&habits(&["Run"])).await.unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let record = &value.as_array().unwrap()[0];

        assert_eq!(record.as_object().unwrap().len(), 2);
        assert_eq!(record["name"], "Run");
        assert_eq!(record["completed"], false);
    }

    #[tokio::test]
    async fn test_save_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dirs").join(HABITS_FILE_NAME);
        let store = JsonHabitStore::with_path(path.clone());

        store.save(&habits(&["Run"])).await.unwrap();

        assert!(path.exists());
    }
}
