// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Snackbar Bounds
// =============================================================================

/// Snackbar auto-dismiss bounds in milliseconds (1 s to 60 s).
pub mod snackbar_bounds {
    /// Minimum auto-dismiss timeout.
    pub const MIN_TIMEOUT_MS: u32 = 1_000;
    /// Maximum auto-dismiss timeout.
    pub const MAX_TIMEOUT_MS: u32 = 60_000;
    /// Default auto-dismiss timeout.
    pub const DEFAULT_TIMEOUT_MS: u32 = 3_000;
    /// Maximum hide transition (0 disables the animation).
    pub const MAX_TRANSITION_MS: u32 = 2_000;
    /// Default hide transition.
    pub const DEFAULT_TRANSITION_MS: u32 = 200;
}

// =============================================================================
// SnackbarTimeout
// =============================================================================

/// How long a snackbar stays on screen before dismissing itself.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnackbarTimeout(u32);

impl SnackbarTimeout {
    /// Creates a new timeout, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(
            snackbar_bounds::MIN_TIMEOUT_MS,
            snackbar_bounds::MAX_TIMEOUT_MS,
        ))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for SnackbarTimeout {
    fn default() -> Self {
        Self(snackbar_bounds::DEFAULT_TIMEOUT_MS)
    }
}

// =============================================================================
// HideTransition
// =============================================================================

/// Duration of the snackbar fade-out animation.
///
/// Zero means the widget disappears in the same update that dismisses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTransition(u32);

impl HideTransition {
    /// No animation.
    pub const NONE: Self = Self(0);

    /// Creates a new transition, capping to the maximum.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.min(snackbar_bounds::MAX_TRANSITION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the transition as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }

    /// Returns true when dismissal takes effect immediately.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for HideTransition {
    fn default() -> Self {
        Self(snackbar_bounds::DEFAULT_TRANSITION_MS)
    }
}
