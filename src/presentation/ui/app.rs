//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use futures_util::future::Either;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::oneshot;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use crate::application::{ConfirmationGate, HabitTracker, NotificationManager, SubmitOutcome};
use crate::domain::entities::HabitId;
use crate::domain::errors::HabitError;
use crate::domain::ports::HabitStoragePort;
use crate::presentation::events;
use crate::presentation::theme::Theme;
use crate::presentation::ui::habit_screen::{HabitKeyResult, HabitScreen, HabitView};

const TICK_RATE: Duration = Duration::from_millis(250);

/// A deletion suspended on its confirmation.
struct PendingDelete {
    id: HabitId,
    answer_rx: oneshot::Receiver<bool>,
}

/// Owns the session state and runs the event loop.
///
/// All mutation flows through here: the screen translates keys into
/// commands, the tracker applies them, and every successful mutation is
/// followed by a full-snapshot save through the storage port.
pub struct App {
    tracker: HabitTracker,
    notifications: NotificationManager,
    gate: ConfirmationGate,
    store: Arc<dyn HabitStoragePort>,
    screen: HabitScreen,
    pending_delete: Option<PendingDelete>,
    running: bool,
}

impl App {
    #[must_use]
    pub fn new(
        store: Arc<dyn HabitStoragePort>,
        theme: Theme,
        notification_duration: Duration,
    ) -> Self {
        Self {
            tracker: HabitTracker::default(),
            notifications: NotificationManager::new(notification_duration),
            gate: ConfirmationGate::new(),
            store,
            screen: HabitScreen::new(theme),
            pending_delete: None,
            running: true,
        }
    }

    /// Loads the persisted habits and runs the event loop until quit.
    ///
    /// # Errors
    /// Returns an error if the habit file cannot be read or the terminal
    /// fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let habits = self.store.load().await?;
        info!(count = habits.len(), "Loaded habit snapshot");
        self.tracker = HabitTracker::new(habits);
        self.screen.clamp_selection(self.tracker.len());

        let mut terminal_events = EventStream::new();
        let mut tick = interval(TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            // The confirmation receiver only exists while a delete is
            // suspended; otherwise this arm never resolves.
            let answer_future = match &mut self.pending_delete {
                Some(pending) => Either::Left(&mut pending.answer_rx),
                None => Either::Right(std::future::pending()),
            };

            tokio::select! {
                biased;

                answer = answer_future => {
                    self.finish_delete(answer.unwrap_or(false)).await;
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if let Event::Key(key) = event
                        && events::is_press(&key)
                    {
                        self.handle_key(key).await;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = tick.tick() => {
                    self.notifications.tick();
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame<'_>) {
        let view = HabitView {
            habits: self.tracker.habits(),
            progress: self.tracker.progress(),
            notification: self.notifications.current(),
            confirmation: self.gate.message(),
        };
        self.screen.render(frame, &view);
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        let result = self
            .screen
            .handle_key(key, self.tracker.habits(), self.gate.is_pending());

        match result {
            HabitKeyResult::Consumed => {}
            HabitKeyResult::Quit => {
                self.running = false;
            }
            HabitKeyResult::Submit { name } => self.submit(&name).await,
            HabitKeyResult::BeginEdit(id) => self.begin_edit(id),
            HabitKeyResult::CancelEdit => self.tracker.cancel_edit(),
            HabitKeyResult::ToggleComplete(id) => self.toggle_complete(id).await,
            HabitKeyResult::RequestDelete(id) => self.request_delete(id),
            HabitKeyResult::Confirm(answer) => self.gate.resolve(answer),
        }
    }

    async fn submit(&mut self, name: &str) {
        match self.tracker.add_or_update(name) {
            Ok(outcome) => {
                self.screen.reset_input();
                self.screen.clamp_selection(self.tracker.len());
                match outcome {
                    SubmitOutcome::Added => self.notifications.info("Habit added!"),
                    SubmitOutcome::Updated => self.notifications.info("Habit updated!"),
                }
                self.persist().await;
            }
            Err(HabitError::EmptyName) => {
                self.notifications.error("Please enter a habit name!");
            }
            Err(e) => {
                warn!(error = %e, "Submit failed");
            }
        }
    }

    fn begin_edit(&mut self, id: HabitId) {
        match self.tracker.begin_edit(id) {
            Ok(habit) => {
                let name = habit.name().to_string();
                self.screen.start_edit(&name);
                self.notifications
                    .info("Edit the habit, then press Enter to save.");
            }
            Err(e) => {
                warn!(error = %e, "Cannot edit habit");
            }
        }
    }

    async fn toggle_complete(&mut self, id: HabitId) {
        match self.tracker.toggle_complete(id) {
            Ok(completed) => {
                if completed {
                    self.notifications.info("Habit completed!");
                } else {
                    self.notifications.info("Habit marked as not completed.");
                }
                self.persist().await;
            }
            Err(e) => {
                warn!(error = %e, "Cannot toggle habit");
            }
        }
    }

    fn request_delete(&mut self, id: HabitId) {
        let Some(habit) = self.tracker.get(id) else {
            warn!(%id, "Cannot delete unknown habit");
            return;
        };

        let message = format!("Delete \"{}\"?", habit.name());
        let answer_rx = self.gate.request(message);
        self.pending_delete = Some(PendingDelete { id, answer_rx });
    }

    async fn finish_delete(&mut self, confirmed: bool) {
        let Some(pending) = self.pending_delete.take() else {
            return;
        };

        if !confirmed {
            debug!("Deletion cancelled");
            return;
        }

        match self.tracker.remove(pending.id) {
            Ok(habit) => {
                debug!(name = habit.name(), "Habit deleted");
                self.notifications.info("Habit deleted!");
                self.screen.clamp_selection(self.tracker.len());
                self.persist().await;
            }
            Err(e) => {
                warn!(error = %e, "Habit vanished before deletion");
            }
        }
    }

    async fn persist(&mut self) {
        if let Err(e) = self.store.save(self.tracker.habits()).await {
            error!(error = %e, "Failed to save habits");
            self.notifications.error("Failed to save habits!");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NotificationLevel;
    use crate::domain::entities::Habit;
    use crate::domain::ports::mock::MockHabitStorage;

    fn app_with(store: Arc<MockHabitStorage>) -> App {
        App::new(store, Theme::default(), Duration::from_secs(3))
    }

    async fn app_with_habits(names: &[&str]) -> (App, Arc<MockHabitStorage>) {
        let habits: Vec<Habit> = names.iter().map(|n| Habit::new(n).unwrap()).collect();
        let store = Arc::new(MockHabitStorage::with_habits(habits));
        let mut app = app_with(store.clone());
        app.tracker = HabitTracker::new(store.load().await.unwrap());
        (app, store)
    }

    #[tokio::test]
    async fn test_submit_adds_and_persists() {
        let store = Arc::new(MockHabitStorage::new());
        let mut app = app_with(store.clone());

        app.submit("Run").await;

        assert_eq!(app.tracker.len(), 1);
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().await.unwrap()[0].name(), "Run");
        assert_eq!(
            app.notifications.current().unwrap().level,
            NotificationLevel::Info
        );
    }

    #[tokio::test]
    async fn test_blank_submit_reports_error_without_saving() {
        let store = Arc::new(MockHabitStorage::new());
        let mut app = app_with(store.clone());

        app.submit("   ").await;

        assert!(app.tracker.is_empty());
        assert_eq!(store.save_count(), 0);
        assert_eq!(
            app.notifications.current().unwrap().level,
            NotificationLevel::Error
        );
    }

    #[tokio::test]
    async fn test_edit_flow_preserves_completion() {
        let (mut app, store) = app_with_habits(&["Run"]).await;
        let id = app.tracker.habits()[0].id();
        app.toggle_complete(id).await;

        app.begin_edit(id);
        app.submit("Swim").await;

        let habits = store.load().await.unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name(), "Swim");
        assert!(habits[0].is_completed());
        assert!(!app.tracker.is_editing());
    }

    #[tokio::test]
    async fn test_toggle_persists_and_notifies() {
        let (mut app, store) = app_with_habits(&["Run"]).await;
        let id = app.tracker.habits()[0].id();

        app.toggle_complete(id).await;
        assert_eq!(
            app.notifications.current().unwrap().message,
            "Habit completed!"
        );

        app.toggle_complete(id).await;
        assert_eq!(
            app.notifications.current().unwrap().message,
            "Habit marked as not completed."
        );
        assert_eq!(store.save_count(), 2);
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_habit() {
        let (mut app, store) = app_with_habits(&["Run", "Swim"]).await;
        let id = app.tracker.habits()[0].id();

        app.request_delete(id);
        assert!(app.gate.is_pending());
        assert_eq!(app.gate.message(), Some("Delete \"Run\"?"));

        app.gate.resolve(true);
        let answer = (&mut app.pending_delete.as_mut().unwrap().answer_rx)
            .await
            .unwrap();
        app.finish_delete(answer).await;

        assert_eq!(app.tracker.len(), 1);
        assert_eq!(app.tracker.habits()[0].name(), "Swim");
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_delete_changes_nothing() {
        let (mut app, store) = app_with_habits(&["Run", "Swim"]).await;
        let id = app.tracker.habits()[0].id();

        app.request_delete(id);
        app.gate.resolve(false);
        let answer = (&mut app.pending_delete.as_mut().unwrap().answer_rx)
            .await
            .unwrap();
        app.finish_delete(answer).await;

        assert_eq!(app.tracker.len(), 2);
        assert_eq!(store.save_count(), 0);
        // Cancellation reports nothing.
        assert!(app.notifications.current().is_none());
    }

    #[tokio::test]
    async fn test_delete_of_vanished_habit_is_absorbed() {
        let (mut app, store) = app_with_habits(&["Run"]).await;
        let id = app.tracker.habits()[0].id();

        app.request_delete(id);
        // Another command removes the habit while the confirmation is
        // still pending.
        app.tracker.remove(id).unwrap();

        app.gate.resolve(true);
        let answer = (&mut app.pending_delete.as_mut().unwrap().answer_rx)
            .await
            .unwrap();
        app.finish_delete(answer).await;

        assert!(app.tracker.is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_save_surfaces_error_notification() {
        let store = Arc::new(MockHabitStorage::failing());
        let mut app = app_with(store.clone());

        app.submit("Run").await;

        // The mutation stands even though persistence failed.
        assert_eq!(app.tracker.len(), 1);
        assert_eq!(
            app.notifications.current().unwrap().level,
            NotificationLevel::Error
        );
    }
}
