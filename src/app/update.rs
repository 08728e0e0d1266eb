// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of the
//! application state it may touch.

use super::navigation::{Navigation, PageId};
use super::snapshot::Script;
use crate::bluetooth::{AdapterEvent, DeviceCollection};
use crate::domain::value::ValueFormat;
use crate::i18n::fluent::I18n;
use crate::ui::adapter_page::AdapterPage;
use crate::ui::device_details::{self, DeviceDetails};
use crate::ui::device_table;
use crate::ui::notifications::{self, Notification};
use crate::ui::sidebar;
use std::collections::BTreeMap;
use std::time::Instant;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub adapter: &'a mut AdapterPage,
    pub devices: &'a mut DeviceCollection,
    pub navigation: &'a mut Navigation,
    /// Details pages keyed by lowercased device address.
    pub details: &'a mut BTreeMap<String, DeviceDetails>,
    pub sidebar_open: &'a mut bool,
    pub notifications: &'a mut notifications::Manager,
    pub script: &'a mut Script,
    pub default_format: ValueFormat,
    pub now: &'a mut Instant,
}

/// Folds an adapter event into the adapter page or the device table.
pub fn handle_adapter_event(ctx: &mut UpdateContext<'_>, event: AdapterEvent) {
    log::trace!("adapter event: {event:?}");
    match event {
        AdapterEvent::DeviceAdded(info) => ctx.devices.add(info),
        AdapterEvent::DeviceChanged(info) => ctx.devices.change(info),
        AdapterEvent::DeviceRemoved(info) => {
            if !ctx.devices.remove(&info.address) {
                log::debug!("removal of unknown device {}", info.address);
            }
        }
        state_change => {
            ctx.adapter.apply(&state_change);
        }
    }
}

pub fn handle_sidebar_message(ctx: &mut UpdateContext<'_>, message: sidebar::Message) {
    if let sidebar::Event::Navigate(page) = sidebar::update(message, ctx.sidebar_open) {
        ctx.navigation.select(page);
    }
}

pub fn handle_device_table_message(ctx: &mut UpdateContext<'_>, message: device_table::Message) {
    match message {
        device_table::Message::Inspect(address) => inspect(ctx, &address),
        device_table::Message::Forget(address) => forget(ctx, &address),
    }
}

pub fn handle_details_message(
    ctx: &mut UpdateContext<'_>,
    address: &str,
    message: device_details::Message,
) {
    let key = address.to_ascii_lowercase();
    let Some(details) = ctx.details.get_mut(&key) else {
        log::debug!("message for closed details page {key}");
        return;
    };
    let device = ctx.devices.get(address).map(|entry| entry.info());

    match details.update(message, device) {
        device_details::Event::None => {}
        device_details::Event::Forget(address) => forget(ctx, &address),
        device_details::Event::ValueApplied => {
            let message = ctx.i18n.tr("notification-value-updated");
            ctx.notifications.push(Notification::success(message));
        }
        device_details::Event::ValueRejected(err) => {
            log::debug!("rejected value for {key}: {err}");
            ctx.notifications.push(Notification::error(err.to_string()));
        }
    }
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: notifications::NotificationMessage,
) {
    ctx.notifications.handle_message(&message);
}

/// Advances snackbar timers and fires scripted adapter events that are due.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    *ctx.now = now;
    ctx.notifications.tick_at(now);
    for event in ctx.script.due(now) {
        handle_adapter_event(ctx, event);
    }
}

/// Drains snackbar lifecycle events after an update.
pub fn drain_notification_events(ctx: &mut UpdateContext<'_>) {
    for event in ctx.notifications.drain_events() {
        log::trace!("snackbar event: {event:?}");
    }
}

fn inspect(ctx: &mut UpdateContext<'_>, address: &str) {
    let page = ctx.navigation.inspect(address);
    if let PageId::Device(key) = page {
        let format = ctx.default_format;
        ctx.details
            .entry(key)
            .or_insert_with(|| DeviceDetails::new(address, format));
    }
}

fn forget(ctx: &mut UpdateContext<'_>, address: &str) {
    if !ctx.navigation.forget(address) {
        return;
    }
    ctx.details.remove(&address.to_ascii_lowercase());

    let name = ctx
        .devices
        .get(address)
        .map_or_else(|| address.to_string(), |entry| entry.info().name_for_display.clone());
    let message = ctx
        .i18n
        .tr_with_args("notification-device-forgotten", &[("name", &name)]);
    ctx.notifications.push(Notification::new(message));
}
