//! Habit list state and command handling.

use tracing::debug;

use crate::domain::entities::{Habit, HabitId};
use crate::domain::errors::HabitError;
use crate::domain::progress::Progress;

/// What `add_or_update` did, so the caller can phrase its status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new habit was appended.
    Added,
    /// The habit under edit was renamed.
    Updated,
}

/// The in-memory habit list plus the editing marker.
///
/// Single source of truth during a session: loaded once at startup, mutated
/// only through the commands below, and persisted by the caller after each
/// successful mutation. Commands address habits by id, never by position;
/// positions exist only in the rendered view.
#[derive(Debug, Default)]
pub struct HabitTracker {
    habits: Vec<Habit>,
    editing: Option<HabitId>,
}

impl HabitTracker {
    /// Creates a tracker over a loaded snapshot.
    #[must_use]
    pub fn new(habits: Vec<Habit>) -> Self {
        Self {
            habits,
            editing: None,
        }
    }

    /// Returns the current list in order.
    #[must_use]
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Returns whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Returns the habit count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.habits.len()
    }

    /// Returns completion progress over the current list.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::of(&self.habits)
    }

    /// Returns the id under edit, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<HabitId> {
        self.editing
    }

    /// Returns whether an edit is in progress.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Looks up a habit by id.
    #[must_use]
    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id() == id)
    }

    /// Submits the input field: appends a new habit, or renames the one
    /// under edit.
    ///
    /// The name is trimmed; an empty result is rejected without mutating.
    /// Renaming leaves the completion flag untouched and clears the editing
    /// marker. A marker whose habit vanished mid-edit degrades to a plain
    /// append.
    ///
    /// # Errors
    /// Returns [`HabitError::EmptyName`] when nothing remains after
    /// trimming.
    pub fn add_or_update(&mut self, raw_name: &str) -> Result<SubmitOutcome, HabitError> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(HabitError::EmptyName);
        }

        if let Some(id) = self.editing.take() {
            if let Some(habit) = self.habits.iter_mut().find(|h| h.id() == id) {
                habit.rename(name);
                debug!(%id, name, "Habit renamed");
                return Ok(SubmitOutcome::Updated);
            }
            debug!(%id, "Edited habit vanished, appending instead");
        }

        // Habit::new only fails on a blank name, checked above.
        if let Some(habit) = Habit::new(name) {
            debug!(id = %habit.id(), name, "Habit added");
            self.habits.push(habit);
        }
        Ok(SubmitOutcome::Added)
    }

    /// Marks a habit for editing and returns it so the caller can pre-fill
    /// the input. Calling again before submitting simply moves the marker.
    ///
    /// # Errors
    /// Returns [`HabitError::UnknownHabit`] when the id does not resolve.
    pub fn begin_edit(&mut self, id: HabitId) -> Result<&Habit, HabitError> {
        let habit = self
            .habits
            .iter()
            .find(|h| h.id() == id)
            .ok_or(HabitError::unknown(id))?;

        self.editing = Some(id);
        debug!(%id, name = habit.name(), "Editing habit");
        Ok(habit)
    }

    /// Abandons the pending edit, if any.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.editing.take() {
            debug!(%id, "Edit cancelled");
        }
    }

    /// Flips a habit's completion flag and returns the new value.
    ///
    /// # Errors
    /// Returns [`HabitError::UnknownHabit`] when the id does not resolve.
    pub fn toggle_complete(&mut self, id: HabitId) -> Result<bool, HabitError> {
        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id() == id)
            .ok_or(HabitError::unknown(id))?;

        let completed = habit.toggle();
        debug!(%id, completed, "Habit toggled");
        Ok(completed)
    }

    /// Removes a habit and returns it.
    ///
    /// Clears the editing marker when it pointed at the removed habit. The
    /// caller is expected to have obtained confirmation first; an id that
    /// vanished while the confirmation was pending surfaces here as
    /// [`HabitError::UnknownHabit`].
    ///
    /// # Errors
    /// Returns [`HabitError::UnknownHabit`] when the id does not resolve.
    pub fn remove(&mut self, id: HabitId) -> Result<Habit, HabitError> {
        let index = self
            .habits
            .iter()
            .position(|h| h.id() == id)
            .ok_or(HabitError::unknown(id))?;

        if self.editing == Some(id) {
            self.editing = None;
        }

        let habit = self.habits.remove(index);
        debug!(%id, name = habit.name(), "Habit removed");
        Ok(habit)
    }
}
