// SPDX-License-Identifier: MPL-2.0
//! Sidebar listing every registered page.
//!
//! The sidebar is closed by default. Opening or closing it twice has no
//! further effect, and choosing a page closes it.

use crate::app::navigation::PageId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Registered pages with their labels, in display order.
    pub entries: Vec<(PageId, String)>,
    pub selected: &'a PageId,
}

#[derive(Debug, Clone)]
pub enum Message {
    Open,
    Close,
    Select(PageId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(PageId),
}

/// Process a sidebar message and return the corresponding event.
pub fn update(message: Message, open: &mut bool) -> Event {
    match message {
        Message::Open => {
            *open = true;
            Event::None
        }
        Message::Close => {
            *open = false;
            Event::None
        }
        Message::Select(page) => {
            *open = false;
            Event::Navigate(page)
        }
    }
}

/// Label of a page. Details pages are titled after the device.
pub fn page_label(i18n: &I18n, page: &PageId, device_name: Option<&str>) -> String {
    match page {
        PageId::Adapter => i18n.tr("page-adapter"),
        PageId::Devices => i18n.tr("page-devices"),
        PageId::Device(address) => {
            i18n.tr_with_args("device-details-title", &[("name", device_name.unwrap_or(address))])
        }
    }
}

/// Button toggling the sidebar, shown in the page header.
pub fn toggle<'a>(i18n: &I18n, open: bool) -> Element<'a, Message> {
    let (label, message) = if open {
        (i18n.tr("sidebar-close"), Message::Close)
    } else {
        (i18n.tr("sidebar-open"), Message::Open)
    };
    button(Text::new(label))
        .on_press(message)
        .padding(spacing::XS)
        .style(styles::button::unselected)
        .into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS).padding(spacing::SM);

    for (page, label) in ctx.entries {
        let style = if &page == ctx.selected {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        column = column.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::Select(page))
                .width(Length::Fill)
                .style(style),
        );
    }

    Container::new(column)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::sidebar)
        .into()
}
