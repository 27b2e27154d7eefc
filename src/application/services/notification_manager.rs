use std::time::Duration;

use crate::domain::{Notification, NotificationLevel};

/// Single-slot transient message state.
///
/// A new message replaces the current one immediately and restarts the
/// dismissal clock; there is no queue. Because the slot owns the one
/// deadline, a replaced message's timer dies with it and can never dismiss
/// its successor.
#[derive(Debug)]
pub struct NotificationManager {
    current: Option<Notification>,
    duration: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Notification::DEFAULT_DURATION)
    }
}

impl NotificationManager {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        let mut notification = Notification::new(level, message).with_duration(self.duration);
        notification.mark_displayed();
        self.current = Some(notification);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, message);
    }

    /// Drops the current message once its time is up. Called from the event
    /// loop's tick interval.
    pub fn tick(&mut self) {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
