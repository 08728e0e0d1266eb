// SPDX-License-Identifier: MPL-2.0
//! Editor for a characteristic value.
//!
//! The control keeps the value as bytes and a draft text the user edits.
//! Switching format re-renders the draft from the bytes, so an edit that
//! was never applied is discarded. Applying parses the draft with the
//! active format; on failure the bytes are kept and the error is handed to
//! the caller for display.

use crate::bluetooth::CharacteristicInfo;
use crate::domain::value::{ByteValue, FormatError, ValueFormat};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, pick_list, text_input, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueControl {
    value: ByteValue,
    draft: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    FormatSelected(ValueFormat),
    DraftChanged(String),
    Apply,
}

/// Events propagated to the parent page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Applied,
    Rejected(FormatError),
}

impl ValueControl {
    /// Creates an empty control showing values in `format`.
    #[must_use]
    pub fn new(format: ValueFormat) -> Self {
        Self::from_value(ByteValue::new(Vec::new(), format))
    }

    fn from_value(value: ByteValue) -> Self {
        let draft = value.text();
        Self { value, draft }
    }

    #[must_use]
    pub fn value(&self) -> &ByteValue {
        &self.value
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the bytes with the characteristic's last known value.
    pub fn load(&mut self, characteristic: &CharacteristicInfo) {
        self.value.set_bytes(characteristic.last_known_value.clone());
        self.draft = self.value.text();
    }

    pub fn select_format(&mut self, format: ValueFormat) {
        self.value.set_format(format);
        self.draft = self.value.text();
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Parses the draft into bytes. The draft is normalized on success and
    /// left untouched on failure.
    pub fn apply(&mut self) -> Result<(), FormatError> {
        self.value.set_text(&self.draft)?;
        self.draft = self.value.text();
        Ok(())
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FormatSelected(format) => {
                self.select_format(format);
                Event::None
            }
            Message::DraftChanged(text) => {
                self.edit(text);
                Event::None
            }
            Message::Apply => match self.apply() {
                Ok(()) => Event::Applied,
                Err(err) => Event::Rejected(err),
            },
        }
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let format_picker = pick_list(
            &ValueFormat::ALL[..],
            Some(self.value.format()),
            Message::FormatSelected,
        )
        .width(Length::Fixed(sizing::FORMAT_PICKER_WIDTH));

        let input = text_input(&i18n.tr("value-placeholder"), &self.draft)
            .on_input(Message::DraftChanged)
            .on_submit(Message::Apply)
            .padding(spacing::XS)
            .width(Length::Fill);

        let apply = button(Text::new(i18n.tr("value-apply")))
            .on_press(Message::Apply)
            .padding(spacing::XS)
            .style(styles::button::primary);

        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(i18n.tr("value-format")))
            .push(format_picker)
            .push(input)
            .push(apply)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    fn loaded(bytes: &[u8]) -> ValueControl {
        let mut characteristic = fixtures::characteristic_1();
        characteristic.last_known_value = bytes.to_vec();
        let mut control = ValueControl::new(ValueFormat::Hexadecimal);
        control.load(&characteristic);
        control
    }

    #[test]
    fn empty_value_renders_empty_text_in_every_format() {
        let mut control = ValueControl::new(ValueFormat::Hexadecimal);
        for format in ValueFormat::ALL {
            control.select_format(format);
            assert_eq!(control.draft(), "");
        }
    }

    #[test]
    fn loading_renders_in_active_format() {
        let mut control = loaded(b"abc");
        assert_eq!(control.draft(), "0x616263");

        control.select_format(ValueFormat::Utf8);
        assert_eq!(control.draft(), "abc");

        control.select_format(ValueFormat::Decimal);
        assert_eq!(control.draft(), "97-98-99");
    }

    #[test]
    fn switching_format_discards_unapplied_edit() {
        let mut control = loaded(b"abc");
        control.edit("0x00");
        control.select_format(ValueFormat::Utf8);
        assert_eq!(control.draft(), "abc");
    }

    #[test]
    fn applying_valid_text_updates_bytes() {
        let mut control = loaded(b"abc");
        control.select_format(ValueFormat::Decimal);
        control.edit("1-2-3");

        assert_eq!(control.update(Message::Apply), Event::Applied);
        assert_eq!(control.value().bytes(), [1, 2, 3]);
    }

    #[test]
    fn rejected_hex_keeps_bytes_and_draft() {
        let mut control = loaded(b"abc");
        control.edit("d0x");

        let event = control.update(Message::Apply);
        assert_eq!(event, Event::Rejected(FormatError::MissingHexPrefix));
        assert_eq!(control.value().bytes(), b"abc");
        assert_eq!(control.draft(), "d0x");
    }

    #[test]
    fn rejected_decimal_reports_message() {
        let mut control = loaded(b"abc");
        control.select_format(ValueFormat::Decimal);
        control.update(Message::DraftChanged("97-+-99".into()));

        match control.update(Message::Apply) {
            Event::Rejected(err) => assert_eq!(
                err.to_string(),
                "New value can only contain numbers and hyphens"
            ),
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(control.value().bytes(), b"abc");
    }
}
