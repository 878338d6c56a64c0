use std::time::Duration;

use common::models::Severity;
use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// How long a toast stays up before it hides itself.
pub const AUTO_HIDE_DURATION: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationState {
    pub visible: bool,
    pub message: String,
    pub severity: Severity,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self {
            visible: false,
            message: String::new(),
            severity: Severity::Success,
        }
    }
}

#[derive(Debug, Default)]
struct Slot {
    state: NotificationState,
    shown_at: Option<Instant>,
}

/// Single-slot toast store. A new message replaces the current one.
///
/// Expiry is evaluated on read, so no timer task is needed to hide a toast.
#[derive(Debug)]
pub struct Notifier {
    slot: Mutex<Slot>,
    auto_hide: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_auto_hide(AUTO_HIDE_DURATION)
    }

    pub fn with_auto_hide(auto_hide: Duration) -> Self {
        Self {
            slot: Mutex::new(Slot::default()),
            auto_hide,
        }
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        debug!(%severity, %message, "notification");
        let mut slot = self.slot.lock();
        slot.state = NotificationState {
            visible: true,
            message,
            severity,
        };
        slot.shown_at = Some(Instant::now());
    }

    /// Hides the toast but keeps its last message and severity.
    pub fn close(&self) {
        let mut slot = self.slot.lock();
        slot.state.visible = false;
        slot.shown_at = None;
    }

    pub fn state(&self) -> NotificationState {
        let mut slot = self.slot.lock();
        let expired = slot
            .shown_at
            .is_some_and(|shown_at| shown_at.elapsed() >= self.auto_hide);
        if expired {
            slot.state.visible = false;
            slot.shown_at = None;
        }
        slot.state.clone()
    }

    /// The visible toast, if any.
    pub fn current(&self) -> Option<(String, Severity)> {
        let state = self.state();
        state.visible.then_some((state.message, state.severity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let notifier = Notifier::new();
        assert!(!notifier.state().visible);
        assert!(notifier.current().is_none());
    }

    #[test]
    fn newer_message_replaces_older() {
        let notifier = Notifier::new();
        notifier.show("first", Severity::Info);
        notifier.show("second", Severity::Error);
        assert_eq!(
            notifier.current(),
            Some(("second".to_string(), Severity::Error))
        );
    }

    #[test]
    fn close_keeps_message_but_hides() {
        let notifier = Notifier::new();
        notifier.show("saved", Severity::Success);
        notifier.close();

        let state = notifier.state();
        assert!(!state.visible);
        assert_eq!(state.message, "saved");
        assert_eq!(state.severity, Severity::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn hides_itself_after_six_seconds() {
        let notifier = Notifier::new();
        notifier.show("saved", Severity::Success);

        tokio::time::advance(Duration::from_millis(5_999)).await;
        assert!(notifier.state().visible);

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!notifier.state().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn reshowing_restarts_the_countdown() {
        let notifier = Notifier::new();
        notifier.show("first", Severity::Info);
        tokio::time::advance(Duration::from_secs(4)).await;
        notifier.show("second", Severity::Info);
        tokio::time::advance(Duration::from_secs(4)).await;

        assert_eq!(
            notifier.current(),
            Some(("second".to_string(), Severity::Info))
        );
    }
}
