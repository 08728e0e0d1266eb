// SPDX-License-Identifier: MPL-2.0
//! Characteristic value types.
//!
//! A characteristic value is a byte buffer shown to the user in one of three
//! encodings (see [`ValueFormat`]). [`codec`] converts in both directions and
//! [`ByteValue`] keeps the bytes together with the selected encoding.

mod byte_value;
pub mod codec;
mod format;

pub use byte_value::ByteValue;
pub use codec::{from_text, to_text, FormatError};
pub use format::ValueFormat;
