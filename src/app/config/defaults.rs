// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Snackbar bounds live next to the `SnackbarTimeout` and `HideTransition`
//! newtypes and are re-exported here so config code has one place to look.

pub use crate::domain::ui::newtypes::snackbar_bounds::{
    DEFAULT_TIMEOUT_MS as DEFAULT_SNACKBAR_TIMEOUT_MS,
    DEFAULT_TRANSITION_MS as DEFAULT_HIDE_TRANSITION_MS,
    MAX_TIMEOUT_MS as MAX_SNACKBAR_TIMEOUT_MS, MAX_TRANSITION_MS as MAX_HIDE_TRANSITION_MS,
    MIN_TIMEOUT_MS as MIN_SNACKBAR_TIMEOUT_MS,
};

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config nor the OS picks one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Subscription Defaults
// ==========================================================================

/// Interval between snackbar ticks while a notification is on screen.
pub const SNACKBAR_TICK_MS: u64 = 50;
