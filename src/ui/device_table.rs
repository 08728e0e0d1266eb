// SPDX-License-Identifier: MPL-2.0
//! Table of the devices seen by the adapter.

use crate::bluetooth::{DeviceCollection, DeviceEntry};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the table.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub devices: &'a DeviceCollection,
    /// Whether a details page is open for an address.
    pub is_inspected: &'a dyn Fn(&str) -> bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Inspect(String),
    Forget(String),
}

/// Text shown in each cell of a row. `None` renders as "Unknown".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCells {
    pub name: String,
    pub address: String,
    pub rssi: Option<String>,
    pub services: Option<String>,
    pub removed: bool,
}

impl RowCells {
    #[must_use]
    pub fn from_entry(entry: &DeviceEntry) -> Self {
        Self {
            name: entry.info().name_for_display.clone(),
            address: entry.address().to_string(),
            rssi: entry.rssi().map(|rssi| rssi.to_string()),
            services: entry.services_count().map(|count| count.to_string()),
            removed: entry.is_removed(),
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let unknown = i18n.tr("value-unknown");

    if ctx.devices.is_empty() {
        return Text::new(i18n.tr("device-table-empty")).into();
    }

    let header = Row::new()
        .spacing(spacing::SM)
        .push(header_cell(i18n.tr("device-table-name"), Length::Fill))
        .push(header_cell(
            i18n.tr("device-table-address"),
            Length::Fixed(sizing::ADDRESS_COLUMN),
        ))
        .push(header_cell(
            i18n.tr("device-table-rssi"),
            Length::Fixed(sizing::RSSI_COLUMN),
        ))
        .push(header_cell(
            i18n.tr("device-table-services"),
            Length::Fixed(sizing::SERVICES_COLUMN),
        ));

    let mut rows = Column::new().spacing(spacing::XXS).push(header);

    for entry in ctx.devices.iter() {
        let cells = RowCells::from_entry(entry);
        let inspected = (ctx.is_inspected)(&cells.address);
        rows = rows.push(view_row(cells, inspected, i18n, &unknown));
    }

    scrollable(rows).height(Length::Fill).into()
}

fn header_cell<'a>(label: String, width: Length) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::BODY_SM)
        .width(width)
        .into()
}

fn view_row<'a>(cells: RowCells, inspected: bool, i18n: &I18n, unknown: &str) -> Element<'a, Message> {
    let name = if cells.removed {
        format!("{} ({})", cells.name, i18n.tr("device-table-removed"))
    } else {
        cells.name
    };

    let inspect = button(Text::new(i18n.tr("device-table-inspect")).size(typography::BODY_SM))
        .on_press(Message::Inspect(cells.address.clone()))
        .style(styles::button::unselected);

    let mut actions = Row::new().spacing(spacing::XXS).push(inspect);
    if inspected {
        actions = actions.push(
            button(Text::new(i18n.tr("device-table-forget")).size(typography::BODY_SM))
                .on_press(Message::Forget(cells.address.clone()))
                .style(styles::button::danger),
        );
    }

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(name).width(Length::Fill))
        .push(Text::new(cells.address).width(Length::Fixed(sizing::ADDRESS_COLUMN)))
        .push(
            Text::new(cells.rssi.unwrap_or_else(|| unknown.to_string()))
                .width(Length::Fixed(sizing::RSSI_COLUMN)),
        )
        .push(
            Text::new(cells.services.unwrap_or_else(|| unknown.to_string()))
                .width(Length::Fixed(sizing::SERVICES_COLUMN)),
        )
        .push(actions);

    let container = Container::new(row).padding(spacing::XXS);
    if cells.removed {
        container.style(styles::container::removed_row).into()
    } else {
        container.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    fn cells_for(devices: &DeviceCollection, address: &str) -> RowCells {
        RowCells::from_entry(devices.get(address).expect("device present"))
    }

    #[test]
    fn cells_show_known_values() {
        let devices = DeviceCollection::from_devices([fixtures::device_1()]);
        let cells = cells_for(&devices, "AA:AA:84:96:92:84");

        assert_eq!(cells.name, "AAA");
        assert_eq!(cells.rssi.as_deref(), Some("-40"));
        assert_eq!(cells.services.as_deref(), Some("0"));
        assert!(!cells.removed);
    }

    #[test]
    fn missing_rssi_and_services_are_unknown() {
        let devices = DeviceCollection::from_devices([fixtures::device_3()]);
        let cells = cells_for(&devices, "CC:CC:84:96:92:84");

        assert_eq!(cells.rssi, None);
        assert_eq!(cells.services, None);
    }

    #[test]
    fn removed_device_keeps_its_row() {
        let mut devices = DeviceCollection::from_devices([fixtures::device_2()]);
        devices.remove("BB:BB:84:96:92:84");

        assert!(cells_for(&devices, "BB:BB:84:96:92:84").removed);
    }
}
