//! Main habit screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    widgets::ListState,
};

use crate::domain::entities::{Habit, HabitId};
use crate::domain::notification::Notification;
use crate::domain::progress::Progress;
use crate::presentation::events;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    ConfirmDialog, FocusContext, FooterBar, HabitList, NotificationPopup, ProgressBar, TextInput,
};

const ADD_LABEL: &str = " Add Habit ";
const EDIT_LABEL: &str = " Save Edit ";

/// Command produced by a key event, applied by the `App`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitKeyResult {
    /// Nothing to do.
    Consumed,
    /// Exit the application.
    Quit,
    /// The input field was submitted with this raw text.
    Submit { name: String },
    /// Start editing the habit.
    BeginEdit(HabitId),
    /// Abandon the pending edit.
    CancelEdit,
    /// Flip the habit's completion flag.
    ToggleComplete(HabitId),
    /// Ask for confirmation, then delete the habit.
    RequestDelete(HabitId),
    /// Answer the outstanding confirmation.
    Confirm(bool),
}

/// Everything the screen needs to draw one frame.
pub struct HabitView<'a> {
    pub habits: &'a [Habit],
    pub progress: Progress,
    pub notification: Option<&'a Notification>,
    pub confirmation: Option<&'a str>,
}

/// UI-only state: the input field, the list cursor, and which of the two
/// panes has focus. Habit data stays in the application layer; the screen
/// receives a read-only view each frame.
pub struct HabitScreen {
    input: TextInput,
    list_state: ListState,
    focus: FocusContext,
    theme: Theme,
}

impl HabitScreen {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let mut input = TextInput::new(ADD_LABEL).placeholder("What habit do you want to build?");
        input.set_focused(true);

        Self {
            input,
            list_state: ListState::default(),
            focus: FocusContext::Input,
            theme,
        }
    }

    /// Returns the id of the habit under the list cursor.
    #[must_use]
    pub fn selected_id(&self, habits: &[Habit]) -> Option<HabitId> {
        self.list_state
            .selected()
            .and_then(|i| habits.get(i))
            .map(Habit::id)
    }

    /// Keeps the list cursor in bounds after the list changed.
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }

        match self.list_state.selected() {
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            Some(_) => {}
            None => self.list_state.select(Some(0)),
        }
    }

    /// Pre-fills the input for an edit and moves focus to it.
    pub fn start_edit(&mut self, name: &str) {
        self.input.set_value(name);
        self.input.set_label(EDIT_LABEL);
        self.focus_input();
    }

    /// Clears the input and restores add mode.
    pub fn reset_input(&mut self) {
        self.input.clear();
        self.input.set_label(ADD_LABEL);
    }

    fn focus_input(&mut self) {
        self.focus = FocusContext::Input;
        self.input.set_focused(true);
    }

    fn focus_list(&mut self) {
        self.focus = FocusContext::List;
        self.input.set_focused(false);
    }

    /// Handles a key event against the given list snapshot.
    ///
    /// `confirming` routes every key to the confirmation dialog while the
    /// gate is armed; the rest of the screen keeps its state but receives
    /// nothing.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        habits: &[Habit],
        confirming: bool,
    ) -> HabitKeyResult {
        if events::is_interrupt(&key) {
            return HabitKeyResult::Quit;
        }

        if confirming {
            return Self::handle_confirm_key(key);
        }

        match self.focus {
            FocusContext::Input => self.handle_input_key(key),
            FocusContext::List | FocusContext::Confirm => self.handle_list_key(key, habits),
        }
    }

    fn handle_confirm_key(key: KeyEvent) -> HabitKeyResult {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => HabitKeyResult::Confirm(true),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => HabitKeyResult::Confirm(false),
            _ => HabitKeyResult::Consumed,
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> HabitKeyResult {
        if events::is_submit(&key) {
            return HabitKeyResult::Submit {
                name: self.input.value().to_string(),
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.reset_input();
                self.focus_list();
                HabitKeyResult::CancelEdit
            }
            KeyCode::Tab => {
                self.focus_list();
                HabitKeyResult::Consumed
            }
            KeyCode::Char(c) => {
                self.input.input_char(c);
                HabitKeyResult::Consumed
            }
            KeyCode::Backspace => {
                self.input.backspace();
                HabitKeyResult::Consumed
            }
            KeyCode::Delete => {
                self.input.delete();
                HabitKeyResult::Consumed
            }
            KeyCode::Left => {
                self.input.move_left();
                HabitKeyResult::Consumed
            }
            KeyCode::Right => {
                self.input.move_right();
                HabitKeyResult::Consumed
            }
            KeyCode::Home => {
                self.input.move_start();
                HabitKeyResult::Consumed
            }
            KeyCode::End => {
                self.input.move_end();
                HabitKeyResult::Consumed
            }
            _ => HabitKeyResult::Consumed,
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent, habits: &[Habit]) -> HabitKeyResult {
        match key.code {
            KeyCode::Char('q') => HabitKeyResult::Quit,
            KeyCode::Tab | KeyCode::Char('i') => {
                self.focus_input();
                HabitKeyResult::Consumed
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous(habits.len());
                HabitKeyResult::Consumed
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next(habits.len());
                HabitKeyResult::Consumed
            }
            KeyCode::Char(' ') => self
                .selected_id(habits)
                .map_or(HabitKeyResult::Consumed, HabitKeyResult::ToggleComplete),
            KeyCode::Char('e') => self
                .selected_id(habits)
                .map_or(HabitKeyResult::Consumed, HabitKeyResult::BeginEdit),
            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_id(habits)
                .map_or(HabitKeyResult::Consumed, HabitKeyResult::RequestDelete),
            _ => HabitKeyResult::Consumed,
        }
    }

    fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(next));
    }

    fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Draws the full frame: input, list or empty state, progress gauge,
    /// footer, and any overlays.
    pub fn render(&mut self, frame: &mut Frame<'_>, view: &HabitView<'_>) {
        let area = frame.area();

        let vertical = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ]);
        let [input_area, list_area, progress_area, footer_area] = vertical.areas(area);

        frame.render_widget(&self.input, input_area);

        let list_focused = self.focus == FocusContext::List && view.confirmation.is_none();
        frame.render_stateful_widget(
            HabitList::new(view.habits, &self.theme, list_focused),
            list_area,
            &mut self.list_state,
        );

        frame.render_widget(ProgressBar::new(view.progress, &self.theme), progress_area);

        let footer_focus = if view.confirmation.is_some() {
            FocusContext::Confirm
        } else {
            self.focus
        };
        frame.render_widget(FooterBar::new(footer_focus, &self.theme), footer_area);

        if let Some(notification) = view.notification {
            frame.render_widget(NotificationPopup::new(notification, &self.theme), area);
        }

        if let Some(message) = view.confirmation {
            frame.render_widget(ConfirmDialog::new(message), area);
        }
    }
}
