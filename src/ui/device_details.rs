// SPDX-License-Identifier: MPL-2.0
//! Details page of one inspected device.
//!
//! Shows a fieldset with the device's identity and connection state, then
//! its GATT services. Selecting a characteristic loads its last known value
//! into the value editor.

use crate::app::navigation::PageId;
use crate::bluetooth::{CharacteristicInfo, DeviceEntry, DeviceInfo, ServiceInfo};
use crate::domain::value::{FormatError, ValueFormat};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::value_control::{self, ValueControl};
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub struct DeviceDetails {
    address: String,
    /// `(service id, characteristic id)` of the characteristic being edited.
    selected: Option<(String, String)>,
    value: ValueControl,
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectCharacteristic {
        service_id: String,
        characteristic_id: String,
    },
    Forget,
    Value(value_control::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Forget(String),
    ValueApplied,
    ValueRejected(FormatError),
}

/// Values shown in the device fieldset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fieldset {
    pub name: String,
    pub address: String,
    pub gatt_connected: bool,
    pub rssi: Option<i16>,
    pub services: Option<usize>,
}

impl Fieldset {
    #[must_use]
    pub fn from_entry(entry: &DeviceEntry) -> Self {
        let info = entry.info();
        Self {
            name: info.name_for_display.clone(),
            address: info.address.clone(),
            gatt_connected: info.is_gatt_connected,
            rssi: entry.rssi(),
            services: entry.services_count(),
        }
    }

    /// Text of the GATT connection field.
    #[must_use]
    pub fn connection_key(&self) -> &'static str {
        if self.gatt_connected {
            "device-connected"
        } else {
            "device-not-connected"
        }
    }
}

/// Looks up a characteristic in a device's reported services.
#[must_use]
pub fn find_characteristic<'a>(
    device: &'a DeviceInfo,
    service_id: &str,
    characteristic_id: &str,
) -> Option<&'a CharacteristicInfo> {
    device
        .services
        .as_deref()?
        .iter()
        .find(|service| service.id == service_id)?
        .characteristics
        .iter()
        .find(|characteristic| characteristic.id == characteristic_id)
}

impl DeviceDetails {
    #[must_use]
    pub fn new(address: &str, format: ValueFormat) -> Self {
        Self {
            address: address.to_string(),
            selected: None,
            value: ValueControl::new(format),
        }
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn page_id(&self) -> PageId {
        PageId::device(&self.address)
    }

    #[must_use]
    pub fn selected(&self) -> Option<(&str, &str)> {
        self.selected
            .as_ref()
            .map(|(service, characteristic)| (service.as_str(), characteristic.as_str()))
    }

    #[must_use]
    pub fn value(&self) -> &ValueControl {
        &self.value
    }

    /// Selects a characteristic and loads its last known value.
    ///
    /// Returns `false` and keeps the current selection if the device does
    /// not report that characteristic.
    pub fn select_characteristic(
        &mut self,
        device: &DeviceInfo,
        service_id: &str,
        characteristic_id: &str,
    ) -> bool {
        match find_characteristic(device, service_id, characteristic_id) {
            Some(characteristic) => {
                self.value.load(characteristic);
                self.selected = Some((service_id.to_string(), characteristic_id.to_string()));
                true
            }
            None => false,
        }
    }

    pub fn update(&mut self, message: Message, device: Option<&DeviceInfo>) -> Event {
        match message {
            Message::SelectCharacteristic {
                service_id,
                characteristic_id,
            } => {
                if let Some(device) = device {
                    self.select_characteristic(device, &service_id, &characteristic_id);
                }
                Event::None
            }
            Message::Forget => Event::Forget(self.address.clone()),
            Message::Value(message) => match self.value.update(message) {
                value_control::Event::None => Event::None,
                value_control::Event::Applied => Event::ValueApplied,
                value_control::Event::Rejected(err) => Event::ValueRejected(err),
            },
        }
    }

    pub fn view<'a>(&'a self, entry: Option<&'a DeviceEntry>, i18n: &I18n) -> Element<'a, Message> {
        let Some(entry) = entry else {
            return Text::new(self.address.clone()).into();
        };
        let fieldset = Fieldset::from_entry(entry);
        let unknown = i18n.tr("value-unknown");

        let fields = Column::new()
            .spacing(spacing::XS)
            .push(field(i18n.tr("device-details-name"), fieldset.name.clone()))
            .push(field(i18n.tr("device-details-address"), fieldset.address.clone()))
            .push(field(
                i18n.tr("device-details-gatt"),
                i18n.tr(fieldset.connection_key()),
            ))
            .push(field(
                i18n.tr("device-details-rssi"),
                fieldset.rssi.map_or_else(|| unknown.clone(), |rssi| rssi.to_string()),
            ))
            .push(field(
                i18n.tr("device-details-services"),
                fieldset.services.map_or(unknown, |count| count.to_string()),
            ));

        let forget = button(Text::new(i18n.tr("device-details-forget")))
            .on_press(Message::Forget)
            .style(styles::button::danger);

        let mut content = Column::new()
            .spacing(spacing::MD)
            .push(
                Container::new(fields)
                    .padding(spacing::MD)
                    .width(Length::Fill)
                    .style(styles::container::fieldset),
            )
            .push(forget);

        if self.selected.is_some() {
            content = content.push(
                Container::new(self.value.view(i18n).map(Message::Value))
                    .padding(spacing::SM)
                    .style(styles::container::panel),
            );
        } else {
            content = content.push(Text::new(i18n.tr("value-none-selected")).size(typography::BODY_SM));
        }

        match entry.info().services.as_deref() {
            Some(services) if !services.is_empty() => {
                for service in services {
                    content = content.push(self.view_service(service, i18n));
                }
            }
            _ => {
                content = content.push(Text::new(i18n.tr("device-details-no-services")));
            }
        }

        scrollable(content).height(Length::Fill).into()
    }

    fn view_service<'a>(&'a self, service: &'a ServiceInfo, i18n: &I18n) -> Element<'a, Message> {
        let kind = if service.is_primary {
            i18n.tr("device-details-primary")
        } else {
            i18n.tr("device-details-secondary")
        };
        let mut column = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(format!("{} ({kind})", service.uuid)).size(typography::TITLE_SM));

        let properties_label = i18n.tr("characteristic-properties");
        let permissions_label = i18n.tr("characteristic-permissions");

        for characteristic in &service.characteristics {
            let is_selected = self
                .selected()
                .is_some_and(|(s, c)| s == service.id && c == characteristic.id);
            let style = if is_selected {
                styles::button::selected
            } else {
                styles::button::unselected
            };

            let summary = Column::new()
                .push(Text::new(characteristic.uuid.as_str()))
                .push(
                    Text::new(format!(
                        "{properties_label}: {}",
                        characteristic.property_names().join(", ")
                    ))
                    .size(typography::CAPTION),
                )
                .push(
                    Text::new(format!(
                        "{permissions_label}: {}",
                        characteristic.permission_names().join(", ")
                    ))
                    .size(typography::CAPTION),
                );

            column = column.push(
                button(summary)
                    .on_press(Message::SelectCharacteristic {
                        service_id: service.id.clone(),
                        characteristic_id: characteristic.id.clone(),
                    })
                    .width(Length::Fill)
                    .style(style),
            );
        }

        Container::new(column)
            .padding(spacing::SM)
            .width(Length::Fill)
            .style(styles::container::fieldset)
            .into()
    }
}

fn field<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(label).size(typography::BODY_SM).width(Length::FillPortion(1)))
        .push(Text::new(value).width(Length::FillPortion(2)))
        .into()
}
