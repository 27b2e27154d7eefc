//! Habit entity and its stable identifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a habit for the lifetime of a session.
///
/// Ids are generated at creation (and at load) and are never persisted:
/// the on-disk layout identifies habits only by position, while everything
/// in-process addresses them by id so that a pending operation survives
/// reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HabitId(Uuid);

impl HabitId {
    /// Generates a fresh id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single tracked habit: a name plus a completion flag.
///
/// Invariant: `name` is non-empty after trimming. Construction and renaming
/// enforce it; callers get `None`/`false` back instead of a habit with a
/// blank name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    #[serde(skip, default = "HabitId::generate")]
    id: HabitId,
    name: String,
    completed: bool,
}

impl Habit {
    /// Creates a new incomplete habit from user input.
    ///
    /// Trims the name; returns `None` when nothing remains.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            id: HabitId::generate(),
            name: name.to_string(),
            completed: false,
        })
    }

    /// Returns the stable id.
    #[must_use]
    pub const fn id(&self) -> HabitId {
        self.id
    }

    /// Returns the habit name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the habit is currently marked complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Replaces the name, leaving the completion flag untouched.
    ///
    /// Trims the input; returns `false` (and changes nothing) when nothing
    /// remains after trimming.
    pub fn rename(&mut self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return false;
        }

        self.name = name.to_string();
        true
    }

    /// Flips the completion flag and returns the new value.
    pub const fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
