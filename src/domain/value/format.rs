// SPDX-License-Identifier: MPL-2.0
//! Text encodings available for a characteristic value.

use std::fmt;

/// Textual representation used to display and edit a byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueFormat {
    /// `0x` followed by two lowercase hex digits per byte.
    #[default]
    Hexadecimal,
    /// Bytes interpreted as UTF-8 text.
    Utf8,
    /// Decimal byte values separated by hyphens.
    Decimal,
}

impl ValueFormat {
    /// Every format, in the order they are offered to the user.
    pub const ALL: [ValueFormat; 3] = [
        ValueFormat::Hexadecimal,
        ValueFormat::Utf8,
        ValueFormat::Decimal,
    ];

    /// Stable identifier used in configuration files.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ValueFormat::Hexadecimal => "hexadecimal",
            ValueFormat::Utf8 => "utf8",
            ValueFormat::Decimal => "decimal",
        }
    }

    /// Parses the identifier produced by [`ValueFormat::key`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueFormat::Hexadecimal => "Hexadecimal",
            ValueFormat::Utf8 => "UTF-8",
            ValueFormat::Decimal => "Decimal",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for format in ValueFormat::ALL {
            assert_eq!(ValueFormat::from_key(format.key()), Some(format));
        }
    }

    #[test]
    fn from_key_ignores_case() {
        assert_eq!(ValueFormat::from_key("UTF8"), Some(ValueFormat::Utf8));
        assert_eq!(ValueFormat::from_key("binary"), None);
    }

    #[test]
    fn default_is_hexadecimal() {
        assert_eq!(ValueFormat::default(), ValueFormat::Hexadecimal);
    }
}
