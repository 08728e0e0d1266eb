// SPDX-License-Identifier: MPL-2.0
//! Conversion between raw bytes and their textual representations.
//!
//! Both directions are pure functions. Parsing never produces partial
//! output: it either returns every byte or a [`FormatError`].

use super::format::ValueFormat;
use std::fmt::{self, Write};

/// Prefix required in front of hexadecimal values.
pub const HEX_PREFIX: &str = "0x";

/// Separator between decimal byte values.
pub const DECIMAL_SEPARATOR: char = '-';

/// Reasons a text cannot be converted to bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Hexadecimal text does not start with `0x`.
    MissingHexPrefix,
    /// A character after the prefix is not a hexadecimal digit.
    InvalidHexDigit {
        /// Byte offset of the offending character in the input text.
        position: usize,
    },
    /// Decimal text contains something other than digits and hyphens.
    InvalidDecimalCharacter,
    /// Decimal text has two consecutive hyphens or starts/ends with one.
    EmptyDecimalGroup,
    /// A decimal group is larger than 255.
    DecimalOutOfRange {
        /// The group as typed by the user.
        group: String,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingHexPrefix => {
                write!(f, "Expected new value to start with \"{HEX_PREFIX}\"")
            }
            FormatError::InvalidHexDigit { position } => write!(
                f,
                "New value contains an invalid hexadecimal digit at position {position}"
            ),
            FormatError::InvalidDecimalCharacter => {
                write!(f, "New value can only contain numbers and hyphens")
            }
            FormatError::EmptyDecimalGroup => {
                write!(f, "New value must separate numbers with single hyphens")
            }
            FormatError::DecimalOutOfRange { group } => {
                write!(f, "Decimal value \"{group}\" does not fit in a byte (0-255)")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders `bytes` in the given format.
///
/// An empty slice always renders as an empty string.
#[must_use]
pub fn to_text(bytes: &[u8], format: ValueFormat) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    match format {
        ValueFormat::Hexadecimal => {
            let mut text = String::with_capacity(HEX_PREFIX.len() + bytes.len() * 2);
            text.push_str(HEX_PREFIX);
            for byte in bytes {
                // Writing to a String cannot fail.
                let _ = write!(text, "{byte:02x}");
            }
            text
        }
        ValueFormat::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        ValueFormat::Decimal => bytes
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(&DECIMAL_SEPARATOR.to_string()),
    }
}

/// Parses `text` written in the given format.
///
/// # Errors
///
/// Returns a [`FormatError`] when `text` is malformed for `format`.
/// UTF-8 input never fails.
pub fn from_text(text: &str, format: ValueFormat) -> Result<Vec<u8>, FormatError> {
    match format {
        ValueFormat::Hexadecimal => parse_hexadecimal(text),
        ValueFormat::Utf8 => Ok(text.as_bytes().to_vec()),
        ValueFormat::Decimal => parse_decimal(text),
    }
}

fn parse_hexadecimal(text: &str) -> Result<Vec<u8>, FormatError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let digits = text
        .strip_prefix(HEX_PREFIX)
        .ok_or(FormatError::MissingHexPrefix)?;

    let mut bytes = Vec::with_capacity(digits.len().div_ceil(2));
    for (chunk_index, chunk) in digits.as_bytes().chunks(2).enumerate() {
        let mut value: u8 = 0;
        for (offset, &digit) in chunk.iter().enumerate() {
            let nibble = char::from(digit)
                .to_digit(16)
                .ok_or(FormatError::InvalidHexDigit {
                    position: HEX_PREFIX.len() + chunk_index * 2 + offset,
                })?;
            // A trailing lone digit is a byte of its own.
            value = (value << 4) | nibble as u8;
        }
        bytes.push(value);
    }
    Ok(bytes)
}

fn parse_decimal(text: &str) -> Result<Vec<u8>, FormatError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || c == DECIMAL_SEPARATOR)
    {
        return Err(FormatError::InvalidDecimalCharacter);
    }

    text.split(DECIMAL_SEPARATOR)
        .map(|group| {
            if group.is_empty() {
                return Err(FormatError::EmptyDecimalGroup);
            }
            group
                .parse::<u8>()
                .map_err(|_| FormatError::DecimalOutOfRange {
                    group: group.to_string(),
                })
        })
        .collect()
}
