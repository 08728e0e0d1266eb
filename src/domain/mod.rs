// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`SnackbarTimeout`](ui::newtypes::SnackbarTimeout),
//!   [`HideTransition`](ui::newtypes::HideTransition))
//! - [`value`]: Characteristic values ([`ByteValue`](value::ByteValue),
//!   [`ValueFormat`](value::ValueFormat), [`FormatError`](value::FormatError))

pub mod ui;
pub mod value;
