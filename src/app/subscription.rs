// SPDX-License-Identifier: MPL-2.0
//! Subscription management for the application.
//!
//! The tick only runs while a notification is visible, hiding or queued, or
//! while scripted snapshot events are still pending. Escape dismisses every
//! notification when no widget captured it.

use super::config::SNACKBAR_TICK_MS;
use super::Message;
use crate::ui::notifications::NotificationMessage;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates the keyboard subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::Notification(NotificationMessage::DismissAll)),
        _ => None,
    })
}

/// Creates the periodic tick driving snackbar timers and the snapshot script.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(SNACKBAR_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
