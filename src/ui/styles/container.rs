// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for pages and the value editor.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Sliding sidebar drawn over the page.
pub fn sidebar(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak;

    container::Style {
        background: Some(Background::Color(weak.color)),
        text_color: Some(weak.text),
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Bordered group of labelled fields.
pub fn fieldset(theme: &Theme) -> container::Style {
    let strong = theme.extended_palette().background.strong.color;

    container::Style {
        border: Border {
            color: strong,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Table row of a device that is no longer reported by the adapter.
pub fn removed_row(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        text_color: Some(palette::GRAY_400),
        ..Default::default()
    }
}
