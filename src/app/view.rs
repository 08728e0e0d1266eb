// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders a header with the sidebar toggle and the page title, the
//! selected page, and the snackbar stacked on top of everything.

use super::navigation::{Navigation, PageId};
use super::Message;
use crate::bluetooth::DeviceCollection;
use crate::i18n::fluent::I18n;
use crate::ui::adapter_page::AdapterPage;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::device_details::DeviceDetails;
use crate::ui::device_table;
use crate::ui::notifications::{self, Snackbar};
use crate::ui::sidebar;
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};
use std::collections::BTreeMap;
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub adapter: &'a AdapterPage,
    pub devices: &'a DeviceCollection,
    pub navigation: &'a Navigation,
    pub details: &'a BTreeMap<String, DeviceDetails>,
    pub sidebar_open: bool,
    pub notifications: &'a notifications::Manager,
    pub now: Instant,
}

/// Title of a page, using the device name for details pages.
pub fn page_title(i18n: &I18n, devices: &DeviceCollection, page: &PageId) -> String {
    let name = page
        .device_address()
        .and_then(|address| devices.get(address))
        .map(|entry| entry.info().name_for_display.as_str());
    sidebar::page_label(i18n, page, name)
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let selected = ctx.navigation.selected();

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(sidebar::toggle(i18n, ctx.sidebar_open).map(Message::Sidebar))
        .push(Text::new(page_title(i18n, ctx.devices, selected)).size(typography::TITLE_MD));

    let body = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(header)
        .push(
            Container::new(view_page(&ctx, selected))
                .width(Length::Fill)
                .height(Length::Fill),
        );

    let mut layout = Row::new();
    if ctx.sidebar_open {
        let entries = ctx
            .navigation
            .pages()
            .iter()
            .map(|page| (page.clone(), page_title(i18n, ctx.devices, page)))
            .collect();
        layout = layout.push(
            sidebar::view(sidebar::ViewContext {
                i18n,
                entries,
                selected,
            })
            .map(Message::Sidebar),
        );
    }
    layout = layout.push(body.width(Length::Fill).height(Length::Fill));

    let base = Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::panel);

    Stack::new()
        .push(base)
        .push(Snackbar::view_overlay(ctx.notifications, ctx.now, i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_page<'a>(ctx: &ViewContext<'a>, page: &PageId) -> Element<'a, Message> {
    match page {
        PageId::Adapter => ctx.adapter.view(ctx.i18n),
        PageId::Devices => {
            let navigation = ctx.navigation;
            let is_inspected = move |address: &str| navigation.is_registered(&PageId::device(address));
            device_table::view(device_table::ViewContext {
                i18n: ctx.i18n,
                devices: ctx.devices,
                is_inspected: &is_inspected,
            })
            .map(Message::DeviceTable)
        }
        PageId::Device(key) => match ctx.details.get(key) {
            Some(details) => {
                let address = details.address().to_string();
                details
                    .view(ctx.devices.get(&address), ctx.i18n)
                    .map(move |message| Message::DeviceDetails(address.clone(), message))
            }
            None => Text::new(key.clone()).into(),
        },
    }
}
