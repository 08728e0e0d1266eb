// SPDX-License-Identifier: MPL-2.0
//! Snackbar notifications for user feedback.
//!
//! Notifications are shown one at a time at the bottom of the window, in
//! the order they were pushed. Each one auto-dismisses after its timeout
//! and can be dismissed early from the dismiss button or programmatically.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, its lifecycle `State` and the
//!   caller-side `NotificationHandle`
//! - [`manager`] - `Manager` for queuing, timing and dismissal
//! - [`snackbar`] - Widget rendering the visible notification
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! let handle = manager.push(Notification::error("Expected new value to start with \"0x\""));
//!
//! // From the periodic subscription
//! manager.tick();
//! for event in manager.drain_events() {
//!     // react to Showing / Dismissed
//! }
//! ```

mod manager;
mod notification;
mod snackbar;

pub use manager::{Dismissal, Event, Manager, Message as NotificationMessage, OnScreen, Timing};
pub use notification::{Notification, NotificationHandle, NotificationId, Severity, State};
pub use snackbar::Snackbar;
