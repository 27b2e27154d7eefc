//! One-slot confirmation gate for destructive commands.

use tokio::sync::oneshot;
use tracing::debug;

/// A pending confirmation: the dialog message plus the channel that resumes
/// the suspended caller.
#[derive(Debug)]
struct PendingConfirmation {
    message: String,
    resolve_tx: oneshot::Sender<bool>,
}

/// Suspend/resume gate guarding destructive commands.
///
/// At most one confirmation is outstanding at a time. `request` arms the
/// gate and hands back a receiver the caller awaits; `resolve` completes it
/// from the dialog's confirm/cancel keys. A second `request` while one is
/// outstanding replaces it, resolving the displaced request as cancelled so
/// its caller never hangs.
#[derive(Debug, Default)]
pub struct ConfirmationGate {
    pending: Option<PendingConfirmation>,
}

impl ConfirmationGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the gate with a dialog message and returns the deferred answer.
    pub fn request(&mut self, message: impl Into<String>) -> oneshot::Receiver<bool> {
        let (resolve_tx, resolve_rx) = oneshot::channel();
        let displaced = self.pending.replace(PendingConfirmation {
            message: message.into(),
            resolve_tx,
        });

        if let Some(displaced) = displaced {
            debug!("Replacing outstanding confirmation, cancelling the old one");
            let _ = displaced.resolve_tx.send(false);
        }

        resolve_rx
    }

    /// Completes the outstanding request and disarms the gate. No-op when
    /// nothing is outstanding.
    pub fn resolve(&mut self, result: bool) {
        if let Some(pending) = self.pending.take() {
            debug!(result, "Confirmation resolved");
            let _ = pending.resolve_tx.send(result);
        }
    }

    /// Returns whether a confirmation is outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the message of the outstanding request, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.message.as_str())
    }
}
