// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its lifecycle `State`
//! and the `NotificationHandle` callers keep to follow a notification
//! after handing it to the manager.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::Duration;
use tokio::sync::watch;

/// Unique identifier for a notification.
///
/// Identifiers increase with creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of a notification: `Queued -> Showing -> Dismissed`.
///
/// A queued notification discarded by "dismiss all" goes straight from
/// `Queued` to `Dismissed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Queued,
    Showing,
    Dismissed,
}

/// Severity only drives the accent color of the snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// A message waiting for, or occupying, the snackbar.
#[derive(Debug)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    /// Overrides the manager's default auto-dismiss timeout.
    custom_timeout: Option<Duration>,
    state: watch::Sender<State>,
}

impl Notification {
    /// Creates a queued notification with the given message text.
    pub fn new(message: impl Into<String>) -> Self {
        let (state, _) = watch::channel(State::Queued);
        Self {
            id: NotificationId::new(),
            severity: Severity::default(),
            message: message.into(),
            custom_timeout: None,
            state,
        }
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_severity(Severity::Error)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).with_severity(Severity::Warning)
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_severity(Severity::Success)
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets a custom auto-dismiss timeout, overriding the manager default.
    #[must_use]
    pub fn auto_dismiss(mut self, timeout: Duration) -> Self {
        self.custom_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn custom_timeout(&self) -> Option<Duration> {
        self.custom_timeout
    }

    #[must_use]
    pub fn state(&self) -> State {
        *self.state.borrow()
    }

    /// Returns a handle observing this notification's state.
    #[must_use]
    pub fn handle(&self) -> NotificationHandle {
        NotificationHandle {
            id: self.id,
            state: self.state.subscribe(),
        }
    }

    pub(super) fn set_state(&self, state: State) {
        // Works with or without live handles.
        self.state.send_replace(state);
    }
}

/// Caller-side view of a notification owned by the manager.
#[derive(Debug, Clone)]
pub struct NotificationHandle {
    id: NotificationId,
    state: watch::Receiver<State>,
}

impl NotificationHandle {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> State {
        *self.state.borrow()
    }

    /// Resolves once the notification has left the queue, with the state
    /// observed at that point (`Showing`, or `Dismissed` if it was discarded
    /// or already gone by the time this is polled).
    pub async fn shown(&mut self) -> State {
        self.wait_until(|state| state != State::Queued).await
    }

    /// Resolves once the notification is dismissed.
    pub async fn dismissed(&mut self) {
        self.wait_until(|state| state == State::Dismissed).await;
    }

    async fn wait_until(&mut self, done: impl Fn(State) -> bool) -> State {
        let result = self.state.wait_for(|state| done(*state)).await.map(|state| *state);
        match result {
            Ok(state) => state,
            // The manager is gone; nothing will change anymore.
            Err(_) => *self.state.borrow(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique_and_ordered() {
        let n1 = Notification::new("first");
        let n2 = Notification::new("second");
        assert_ne!(n1.id(), n2.id());
        assert!(n1.id() < n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn new_notification_is_queued() {
        let notification = Notification::new("Message 1");
        assert_eq!(notification.state(), State::Queued);
        assert_eq!(notification.message(), "Message 1");
        assert_eq!(notification.custom_timeout(), None);
    }

    #[test]
    fn handle_follows_state_changes() {
        let notification = Notification::error("boom").auto_dismiss(Duration::from_secs(1));
        let handle = notification.handle();

        notification.set_state(State::Showing);
        assert_eq!(handle.state(), State::Showing);
        assert_eq!(handle.id(), notification.id());
        assert_eq!(notification.severity(), Severity::Error);
    }

    #[tokio::test]
    async fn dismissed_resolves_after_manager_side_drop() {
        let notification = Notification::new("gone");
        let mut handle = notification.handle();
        notification.set_state(State::Dismissed);
        drop(notification);

        handle.dismissed().await;
        assert_eq!(handle.state(), State::Dismissed);
    }
}
