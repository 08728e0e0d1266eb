// SPDX-License-Identifier: MPL-2.0
//! `bt_lens` is a Bluetooth internals inspector built with the Iced GUI framework.
//!
//! It shows the local adapter, the devices it has seen and the GATT
//! characteristics of an inspected device. Characteristic values can be
//! read and edited as hexadecimal, UTF-8 or decimal text, and user feedback
//! goes through a one-at-a-time snackbar queue.

#![doc(html_root_url = "https://docs.rs/bt_lens/0.1.0")]

pub mod app;
pub mod bluetooth;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

#[doc(hidden)]
pub mod test_utils;
