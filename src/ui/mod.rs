// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Pages
//!
//! - [`adapter_page`] - Local adapter identity and state flags
//! - [`device_table`] - Devices seen by the adapter
//! - [`device_details`] - One inspected device with its GATT services
//!
//! # Shared Infrastructure
//!
//! - [`sidebar`] - Page list and the toggle that opens it
//! - [`value_control`] - Characteristic value editor with format picker
//! - [`notifications`] - Snackbar queue for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod adapter_page;
pub mod design_tokens;
pub mod device_details;
pub mod device_table;
pub mod notifications;
pub mod sidebar;
pub mod styles;
pub mod theming;
pub mod value_control;
