mod confirm_dialog;
mod footer_bar;
mod habit_list;
mod notification_popup;
mod progress_bar;
mod text_input;

pub use confirm_dialog::ConfirmDialog;
pub use footer_bar::{FocusContext, FooterBar};
pub use habit_list::HabitList;
pub use notification_popup::NotificationPopup;
pub use progress_bar::ProgressBar;
pub use text_input::TextInput;
