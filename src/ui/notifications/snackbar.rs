// SPDX-License-Identifier: MPL-2.0
//! Snackbar widget for rendering the visible notification.
//!
//! The snackbar is a single card anchored to the bottom center of the
//! window, with a severity-colored border and a dismiss button. While the
//! notification is hiding, the card fades out.

use super::manager::{Manager, Message, OnScreen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Snackbar widget.
pub struct Snackbar;

impl Snackbar {
    /// Renders one notification at the given opacity.
    pub fn view<'a>(on_screen: OnScreen<'a>, i18n: &I18n) -> Element<'a, Message> {
        let notification = on_screen.notification;
        let accent_color = notification.severity().color();
        let alpha = on_screen.opacity;

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(faded(theme.palette().text, alpha)),
            });

        let dismiss_button = button(Text::new(i18n.tr("snackbar-dismiss")).size(typography::BODY_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::SNACKBAR_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| snackbar_container_style(theme, accent_color, alpha))
            .into()
    }

    /// Renders the overlay layer holding the snackbar, if any.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        now: Instant,
        i18n: &I18n,
    ) -> Element<'a, Message> {
        match manager.on_screen(now) {
            Some(on_screen) => Container::new(Self::view(on_screen, i18n))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into(),
            None => Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
        }
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn snackbar_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(faded(bg_color, alpha))),
        border: iced::Border {
            color: faded(accent_color, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if alpha < opacity::OPAQUE {
            shadow::NONE
        } else {
            shadow::MD
        },
        text_color: Some(faded(theme.palette().text, alpha)),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = faded(theme.extended_palette().background.base.text, alpha);
    let hover_background = |strength: f32| {
        Some(iced::Background::Color(Color {
            a: strength * alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Hovered => hover_background(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_background(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
