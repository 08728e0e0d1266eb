// SPDX-License-Identifier: MPL-2.0
//! Backing buffer for a characteristic value.

use super::codec::{self, FormatError};
use super::format::ValueFormat;

/// Raw bytes of a characteristic value plus the format used to show them.
///
/// The bytes are the single source of truth: [`ByteValue::text`] is always
/// derived from them and the active format, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ByteValue {
    bytes: Vec<u8>,
    format: ValueFormat,
}

impl ByteValue {
    #[must_use]
    pub fn new(bytes: Vec<u8>, format: ValueFormat) -> Self {
        Self { bytes, format }
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn format(&self) -> ValueFormat {
        self.format
    }

    /// Current text for the active format.
    #[must_use]
    pub fn text(&self) -> String {
        codec::to_text(&self.bytes, self.format)
    }

    /// Replaces the bytes wholesale, e.g. when a new value is read.
    pub fn set_bytes(&mut self, bytes: Vec<u8>) {
        self.bytes = bytes;
    }

    /// Switches the active format. The bytes are left untouched.
    pub fn set_format(&mut self, format: ValueFormat) {
        self.format = format;
    }

    /// Parses `text` in the active format and replaces the bytes.
    ///
    /// # Errors
    ///
    /// Returns the parse error and leaves the bytes unchanged.
    pub fn set_text(&mut self, text: &str) -> Result<(), FormatError> {
        self.set_as(self.format, text)
    }

    /// Parses `text` as `format` and replaces the bytes, without changing
    /// the active format.
    ///
    /// # Errors
    ///
    /// Returns the parse error and leaves the bytes unchanged.
    pub fn set_as(&mut self, format: ValueFormat, text: &str) -> Result<(), FormatError> {
        self.bytes = codec::from_text(text, format)?;
        Ok(())
    }
}
