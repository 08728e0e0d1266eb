// SPDX-License-Identifier: MPL-2.0
//! Snackbar lifecycle management.
//!
//! The `Manager` owns the FIFO of pending notifications and the single
//! notification currently on screen. A notification stays visible until its
//! auto-dismiss deadline passes or it is dismissed, then plays the hide
//! transition. The next queued notification is only shown once that
//! transition has finished, so at most one snackbar is ever on screen.
//!
//! Time never advances on its own: callers feed `tick` (or `tick_at`) from a
//! periodic subscription. Every lifecycle change is buffered as an [`Event`]
//! and handed out by [`Manager::drain_events`], which keeps the manager in a
//! consistent state even when an event handler immediately calls back into
//! `push` or `dismiss`.

use super::notification::{Notification, NotificationHandle, NotificationId, State};
use crate::domain::ui::{HideTransition, SnackbarTimeout};
use log::debug;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

/// Messages for snackbar state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification, if it is still on screen or queued.
    Dismiss(NotificationId),
    /// Dismiss the visible notification and discard the queue.
    DismissAll,
}

/// Lifecycle notifications observed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The notification became the visible snackbar.
    Showing(NotificationId),
    /// The notification finished hiding.
    Dismissed(NotificationId),
}

/// Timing applied to notifications that do not override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timing {
    pub timeout: SnackbarTimeout,
    pub hide_transition: HideTransition,
}

/// Completion signal returned by [`Manager::dismiss`].
///
/// Completes when the dismissed notification has finished hiding, or
/// immediately when there was nothing to dismiss.
#[derive(Debug)]
pub struct Dismissal {
    receiver: oneshot::Receiver<()>,
    complete: bool,
}

impl Dismissal {
    fn channel() -> (oneshot::Sender<()>, Self) {
        let (sender, receiver) = oneshot::channel();
        (
            sender,
            Self {
                receiver,
                complete: false,
            },
        )
    }

    /// Polls for completion without blocking.
    pub fn is_complete(&mut self) -> bool {
        if !self.complete {
            match self.receiver.try_recv() {
                // A closed channel means the manager went away; nothing is left to wait for.
                Ok(()) | Err(oneshot::error::TryRecvError::Closed) => self.complete = true,
                Err(oneshot::error::TryRecvError::Empty) => {}
            }
        }
        self.complete
    }

    /// Waits until the dismissal has completed.
    pub async fn finished(self) {
        if !self.complete {
            let _ = self.receiver.await;
        }
    }
}

/// The notification currently on screen and still accepting its deadline.
#[derive(Debug)]
struct Active {
    notification: Notification,
    deadline: Instant,
}

/// A notification playing its hide transition.
#[derive(Debug)]
struct Hiding {
    notification: Notification,
    started_at: Instant,
    finishes_at: Instant,
    waiters: Vec<oneshot::Sender<()>>,
}

/// What the view should draw.
#[derive(Debug, Clone, Copy)]
pub struct OnScreen<'a> {
    pub notification: &'a Notification,
    /// 1.0 while showing, fading to 0.0 over the hide transition.
    pub opacity: f32,
}

/// Manages the queue and the visible snackbar.
#[derive(Debug, Default)]
pub struct Manager {
    timing: Timing,
    active: Option<Active>,
    hiding: Option<Hiding>,
    queue: VecDeque<Notification>,
    events: VecDeque<Event>,
}

impl Manager {
    /// Creates a new empty manager with default timing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty manager with the given timing.
    #[must_use]
    pub fn with_timing(timing: Timing) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Changes the default timing. Affects notifications shown afterwards.
    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    /// Shows a plain notification with the default timeout.
    pub fn show(&mut self, message: impl Into<String>) -> NotificationHandle {
        self.push(Notification::new(message))
    }

    /// Pushes a notification.
    ///
    /// It is shown immediately when nothing is visible, hiding or waiting,
    /// and queued behind earlier notifications otherwise.
    pub fn push(&mut self, notification: Notification) -> NotificationHandle {
        self.push_at(notification, Instant::now())
    }

    /// [`Manager::push`] with an explicit clock reading.
    pub fn push_at(&mut self, notification: Notification, now: Instant) -> NotificationHandle {
        let handle = notification.handle();
        debug!(
            "snackbar {} queued: {:?}",
            notification.id(),
            notification.message()
        );
        self.queue.push_back(notification);
        self.promote(now);
        handle
    }

    /// Dismisses the visible notification.
    ///
    /// With `clear_all`, every queued notification is discarded as well and
    /// completion also waits for a hide already in progress. Calling this
    /// when nothing is visible completes immediately.
    pub fn dismiss(&mut self, clear_all: bool) -> Dismissal {
        self.dismiss_at(clear_all, Instant::now())
    }

    /// [`Manager::dismiss`] with an explicit clock reading.
    pub fn dismiss_at(&mut self, clear_all: bool, now: Instant) -> Dismissal {
        let (sender, dismissal) = Dismissal::channel();
        let mut waiter = Some(sender);

        // Taking the active entry cancels its deadline before anything else.
        if let Some(active) = self.active.take() {
            self.start_hiding(active.notification, now, waiter.take());
        }

        if clear_all {
            self.discard_queue();
            if let (Some(sender), Some(hiding)) = (waiter.take(), self.hiding.as_mut()) {
                hiding.waiters.push(sender);
            }
        }

        if let Some(sender) = waiter {
            let _ = sender.send(());
        }

        self.settle(now);
        dismissal
    }

    /// Dismisses one notification by ID.
    ///
    /// A queued notification is dropped without ever being shown. Returns
    /// `false` if the ID is neither visible nor queued.
    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        self.dismiss_notification_at(id, Instant::now())
    }

    /// [`Manager::dismiss_notification`] with an explicit clock reading.
    pub fn dismiss_notification_at(&mut self, id: NotificationId, now: Instant) -> bool {
        if self
            .active
            .as_ref()
            .is_some_and(|active| active.notification.id() == id)
        {
            let _ = self.dismiss_at(false, now);
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            if let Some(notification) = self.queue.remove(pos) {
                debug!("snackbar {id} dropped from queue");
                notification.set_state(State::Dismissed);
            }
            return true;
        }

        false
    }

    /// Advances timers: expires the visible notification, finishes hide
    /// transitions and promotes the next queued notification.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// [`Manager::tick`] with an explicit clock reading.
    pub fn tick_at(&mut self, now: Instant) {
        self.settle(now);
    }

    /// Handles a snackbar message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss_notification(*id);
            }
            Message::DismissAll => {
                let _ = self.dismiss(true);
            }
        }
    }

    /// Takes the buffered lifecycle events, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain(..).collect()
    }

    /// The notification currently showing, if any. A notification that is
    /// hiding is no longer considered showing.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.active.as_ref().map(|active| &active.notification)
    }

    /// What should be drawn at `now`, including a notification that is hiding.
    #[must_use]
    pub fn on_screen(&self, now: Instant) -> Option<OnScreen<'_>> {
        if let Some(active) = &self.active {
            return Some(OnScreen {
                notification: &active.notification,
                opacity: 1.0,
            });
        }
        self.hiding.as_ref().map(|hiding| {
            let total = hiding.finishes_at.saturating_duration_since(hiding.started_at);
            let left = hiding.finishes_at.saturating_duration_since(now);
            let opacity = if total.is_zero() {
                0.0
            } else {
                left.as_secs_f32() / total.as_secs_f32()
            };
            OnScreen {
                notification: &hiding.notification,
                opacity: opacity.clamp(0.0, 1.0),
            }
        })
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn is_hiding(&self) -> bool {
        self.hiding.is_some()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether anything is visible, hiding or queued. The host only
    /// needs to tick while this holds.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.active.is_some() || self.hiding.is_some() || !self.queue.is_empty()
    }

    /// Time left before the visible notification auto-dismisses.
    #[must_use]
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        self.active
            .as_ref()
            .map(|active| active.deadline.saturating_duration_since(now))
    }

    /// Overrides are clamped like the default so deadlines never overflow.
    fn timeout_for(&self, notification: &Notification) -> Duration {
        notification
            .custom_timeout()
            .map_or(self.timing.timeout, |timeout| {
                SnackbarTimeout::new(u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX))
            })
            .as_duration()
    }

    fn promote(&mut self, now: Instant) {
        if self.active.is_some() || self.hiding.is_some() {
            return;
        }
        if let Some(notification) = self.queue.pop_front() {
            let deadline = now + self.timeout_for(&notification);
            debug!("snackbar {} showing", notification.id());
            notification.set_state(State::Showing);
            self.events.push_back(Event::Showing(notification.id()));
            self.active = Some(Active {
                notification,
                deadline,
            });
        }
    }

    fn start_hiding(
        &mut self,
        notification: Notification,
        started_at: Instant,
        waiter: Option<oneshot::Sender<()>>,
    ) {
        debug_assert!(self.hiding.is_none(), "only one snackbar can hide at a time");
        debug!("snackbar {} hiding", notification.id());
        self.hiding = Some(Hiding {
            notification,
            started_at,
            finishes_at: started_at + self.timing.hide_transition.as_duration(),
            waiters: waiter.into_iter().collect(),
        });
    }

    fn discard_queue(&mut self) {
        for notification in self.queue.drain(..) {
            debug!("snackbar {} discarded", notification.id());
            notification.set_state(State::Dismissed);
        }
    }

    fn settle(&mut self, now: Instant) {
        loop {
            if let Some(active) = self.active.take_if(|active| active.deadline <= now) {
                let deadline = active.deadline;
                self.start_hiding(active.notification, deadline, None);
            }

            match self.hiding.take_if(|hiding| hiding.finishes_at <= now) {
                Some(hiding) => {
                    let id = hiding.notification.id();
                    debug!("snackbar {id} dismissed");
                    hiding.notification.set_state(State::Dismissed);
                    self.events.push_back(Event::Dismissed(id));
                    for waiter in hiding.waiters {
                        let _ = waiter.send(());
                    }
                    self.promote(now);
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::newtypes::snackbar_bounds;

    fn instant_manager() -> Manager {
        Manager::with_timing(Timing {
            timeout: SnackbarTimeout::default(),
            hide_transition: HideTransition::NONE,
        })
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(!manager.is_showing());
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn first_notification_shows_immediately() {
        let mut manager = instant_manager();
        let handle = manager.show("Message 1");

        assert_eq!(handle.state(), State::Showing);
        assert_eq!(manager.current().map(Notification::message), Some("Message 1"));
        assert_eq!(manager.drain_events(), vec![Event::Showing(handle.id())]);
    }

    #[test]
    fn notifications_are_shown_in_order_one_at_a_time() {
        let mut manager = instant_manager();
        let start = Instant::now();
        let h1 = manager.push_at(Notification::new("Message 1"), start);
        let h2 = manager.push_at(Notification::new("Message 2"), start);
        let h3 = manager.push_at(Notification::new("Message 3"), start);

        assert_eq!(manager.queued_count(), 2);
        assert_eq!(h2.state(), State::Queued);

        let _ = manager.dismiss_at(false, start);
        assert_eq!(manager.current().map(Notification::message), Some("Message 2"));
        let _ = manager.dismiss_at(false, start);
        assert_eq!(manager.current().map(Notification::message), Some("Message 3"));
        let _ = manager.dismiss_at(false, start);
        assert!(!manager.has_notifications());

        assert_eq!(
            manager.drain_events(),
            vec![
                Event::Showing(h1.id()),
                Event::Dismissed(h1.id()),
                Event::Showing(h2.id()),
                Event::Dismissed(h2.id()),
                Event::Showing(h3.id()),
                Event::Dismissed(h3.id()),
            ]
        );
    }

    #[test]
    fn dismiss_all_discards_queue_without_events() {
        let mut manager = instant_manager();
        let start = Instant::now();
        let h1 = manager.push_at(Notification::new("Message 1"), start);
        let h2 = manager.push_at(Notification::new("Message 2"), start);
        let h3 = manager.push_at(Notification::new("Message 3"), start);

        let mut dismissal = manager.dismiss_at(true, start);
        assert!(dismissal.is_complete());
        assert!(!manager.has_notifications());
        assert_eq!(h2.state(), State::Dismissed);
        assert_eq!(h3.state(), State::Dismissed);
        assert_eq!(
            manager.drain_events(),
            vec![Event::Showing(h1.id()), Event::Dismissed(h1.id())]
        );
    }

    #[test]
    fn dismiss_with_nothing_visible_completes_immediately() {
        let mut manager = Manager::new();
        assert!(manager.dismiss(false).is_complete());
        assert!(manager.dismiss(true).is_complete());
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn double_dismiss_after_clear_is_harmless() {
        let mut manager = instant_manager();
        let start = Instant::now();
        manager.push_at(Notification::new("Message 1"), start);
        manager.push_at(Notification::new("Message 2"), start);

        let _ = manager.dismiss_at(true, start);
        let _ = manager.drain_events();
        let mut again = manager.dismiss_at(false, start);

        assert!(again.is_complete());
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn auto_dismiss_after_timeout() {
        let mut manager = instant_manager();
        let start = Instant::now();
        let handle = manager.push_at(Notification::new("Message 1"), start);

        manager.tick_at(start + ms(2999));
        assert_eq!(handle.state(), State::Showing);

        manager.tick_at(start + ms(3000));
        assert_eq!(handle.state(), State::Dismissed);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn custom_timeout_overrides_default() {
        let mut manager = instant_manager();
        let start = Instant::now();
        let handle =
            manager.push_at(Notification::new("quick").auto_dismiss(ms(1000)), start);
        assert_eq!(manager.remaining_at(start), Some(ms(1000)));

        manager.tick_at(start + ms(1000));
        assert_eq!(handle.state(), State::Dismissed);
    }

    #[test]
    fn oversized_custom_timeout_is_clamped() {
        let mut manager = instant_manager();
        let start = Instant::now();
        let handle =
            manager.push_at(Notification::new("sticky").auto_dismiss(Duration::MAX), start);

        let max = ms(u64::from(snackbar_bounds::MAX_TIMEOUT_MS));
        assert_eq!(handle.state(), State::Showing);
        assert_eq!(manager.remaining_at(start), Some(max));

        manager.tick_at(start + max);
        assert_eq!(handle.state(), State::Dismissed);
    }

    #[test]
    fn next_notification_gets_full_timeout_after_promotion() {
        let mut manager = instant_manager();
        let start = Instant::now();
        manager.push_at(Notification::new("Message 1"), start);
        let h2 = manager.push_at(Notification::new("Message 2"), start);

        let promoted_at = start + ms(3000);
        manager.tick_at(promoted_at);
        assert_eq!(h2.state(), State::Showing);
        assert_eq!(manager.remaining_at(promoted_at), Some(ms(3000)));
    }

    #[test]
    fn manual_dismiss_cancels_the_deadline() {
        let mut manager = instant_manager();
        let start = Instant::now();
        let h1 = manager.push_at(Notification::new("Message 1"), start);
        let _ = manager.dismiss_at(false, start + ms(100));
        let _ = manager.drain_events();

        manager.tick_at(start + ms(10_000));
        assert_eq!(h1.state(), State::Dismissed);
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn hide_transition_delays_promotion() {
        let mut manager = Manager::with_timing(Timing {
            timeout: SnackbarTimeout::default(),
            hide_transition: HideTransition::new(200),
        });
        let start = Instant::now();
        let h1 = manager.push_at(Notification::new("Message 1"), start);
        let h2 = manager.push_at(Notification::new("Message 2"), start);

        let mut dismissal = manager.dismiss_at(false, start);
        assert!(!dismissal.is_complete());
        assert!(manager.is_hiding());
        assert!(manager.current().is_none());
        assert_eq!(h1.state(), State::Showing);
        assert_eq!(h2.state(), State::Queued);

        let halfway = manager.on_screen(start + ms(100)).map(|s| s.opacity);
        assert!(halfway.is_some_and(|o| (o - 0.5).abs() < 0.01));

        manager.tick_at(start + ms(200));
        assert!(dismissal.is_complete());
        assert_eq!(h1.state(), State::Dismissed);
        assert_eq!(h2.state(), State::Showing);
    }

    #[test]
    fn dismiss_all_during_hide_waits_for_transition() {
        let mut manager = Manager::with_timing(Timing {
            timeout: SnackbarTimeout::default(),
            hide_transition: HideTransition::new(200),
        });
        let start = Instant::now();
        manager.push_at(Notification::new("Message 1"), start);
        let h2 = manager.push_at(Notification::new("Message 2"), start);

        let _ = manager.dismiss_at(false, start);
        let mut all = manager.dismiss_at(true, start + ms(50));
        assert_eq!(h2.state(), State::Dismissed);
        assert!(!all.is_complete());

        manager.tick_at(start + ms(200));
        assert!(all.is_complete());
        assert!(!manager.has_notifications());
    }

    #[test]
    fn dismiss_by_id_removes_queued_notification() {
        let mut manager = instant_manager();
        let start = Instant::now();
        let h1 = manager.push_at(Notification::new("Message 1"), start);
        let h2 = manager.push_at(Notification::new("Message 2"), start);

        assert!(manager.dismiss_notification_at(h2.id(), start));
        assert_eq!(h2.state(), State::Dismissed);
        assert_eq!(manager.queued_count(), 0);

        assert!(manager.dismiss_notification_at(h1.id(), start));
        assert!(!manager.dismiss_notification_at(h1.id(), start));
    }

    #[test]
    fn event_handlers_may_push_while_draining() {
        let mut manager = instant_manager();
        let start = Instant::now();
        manager.push_at(Notification::new("Message 1"), start);

        for event in manager.drain_events() {
            if let Event::Showing(_) = event {
                manager.push_at(Notification::new("follow-up"), start);
                let _ = manager.dismiss_at(false, start);
            }
        }

        assert_eq!(manager.current().map(Notification::message), Some("follow-up"));
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismissing_from_dismissed_handler_walks_the_queue() {
        let mut manager = instant_manager();
        let start = Instant::now();
        let handles: Vec<_> = ["Message 1", "Message 2", "Message 3"]
            .into_iter()
            .map(|message| manager.push_at(Notification::new(message), start))
            .collect();
        let _ = manager.dismiss_at(false, start);

        let mut seen = Vec::new();
        loop {
            let events = manager.drain_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                seen.push(event);
                if let Event::Dismissed(_) = event {
                    let _ = manager.dismiss_at(false, start);
                }
            }
        }

        let expected: Vec<_> = handles
            .iter()
            .flat_map(|handle| [Event::Showing(handle.id()), Event::Dismissed(handle.id())])
            .collect();
        assert_eq!(seen, expected);
        assert!(handles.iter().all(|handle| handle.state() == State::Dismissed));
        assert!(!manager.has_notifications());
    }

    #[tokio::test]
    async fn handle_resolves_when_shown_and_dismissed() {
        let mut manager = instant_manager();
        let start = Instant::now();
        manager.push_at(Notification::new("Message 1"), start);
        let mut second = manager.push_at(Notification::new("Message 2"), start);

        let dismissal = manager.dismiss_at(false, start);
        dismissal.finished().await;
        assert_eq!(second.shown().await, State::Showing);

        let _ = manager.dismiss_at(false, start);
        second.dismissed().await;
        assert_eq!(second.state(), State::Dismissed);
    }
}
