// SPDX-License-Identifier: MPL-2.0
//! Adapter page: the local adapter's identity and state flags.

use crate::bluetooth::{AdapterEvent, AdapterInfo};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{checkbox, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Default)]
pub struct AdapterPage {
    info: AdapterInfo,
}

impl AdapterPage {
    #[must_use]
    pub fn new(info: AdapterInfo) -> Self {
        Self { info }
    }

    #[must_use]
    pub fn info(&self) -> &AdapterInfo {
        &self.info
    }

    /// Applies an adapter state change. Device events are not handled here.
    ///
    /// Returns `true` if a field changed.
    pub fn apply(&mut self, event: &AdapterEvent) -> bool {
        let (field, value) = match event {
            AdapterEvent::PresentChanged(value) => (&mut self.info.present, *value),
            AdapterEvent::PoweredChanged(value) => (&mut self.info.powered, *value),
            AdapterEvent::DiscoverableChanged(value) => (&mut self.info.discoverable, *value),
            AdapterEvent::DiscoveringChanged(value) => (&mut self.info.discovering, *value),
            AdapterEvent::DeviceAdded(_)
            | AdapterEvent::DeviceChanged(_)
            | AdapterEvent::DeviceRemoved(_) => return false,
        };
        let changed = *field != value;
        *field = value;
        changed
    }

    pub fn view<'a, M: 'a>(&'a self, i18n: &I18n) -> Element<'a, M> {
        let info = &self.info;
        let fields = Column::new()
            .spacing(spacing::XS)
            .push(text_field(i18n.tr("adapter-address"), &info.address))
            .push(text_field(i18n.tr("adapter-name"), &info.name))
            .push(flag_field(i18n.tr("adapter-initialized"), info.initialized))
            .push(flag_field(i18n.tr("adapter-present"), info.present))
            .push(flag_field(i18n.tr("adapter-powered"), info.powered))
            .push(flag_field(i18n.tr("adapter-discoverable"), info.discoverable))
            .push(flag_field(i18n.tr("adapter-discovering"), info.discovering));

        Container::new(fields)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::fieldset)
            .into()
    }
}

fn text_field<'a, M: 'a>(label: String, value: &'a str) -> Element<'a, M> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(label).size(typography::BODY_SM).width(Length::FillPortion(1)))
        .push(Text::new(value).width(Length::FillPortion(2)))
        .into()
}

// Read-only: no toggle handler is attached.
fn flag_field<'a, M: 'a>(label: String, value: bool) -> Element<'a, M> {
    checkbox(value).label(label).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn applies_state_changes() {
        let mut page = AdapterPage::new(fixtures::adapter());

        assert!(page.apply(&AdapterEvent::DiscoverableChanged(true)));
        assert!(page.apply(&AdapterEvent::PoweredChanged(false)));
        assert!(page.apply(&AdapterEvent::DiscoveringChanged(true)));
        assert!(page.apply(&AdapterEvent::PresentChanged(false)));

        let info = page.info();
        assert!(info.discoverable);
        assert!(!info.powered);
        assert!(info.discovering);
        assert!(!info.present);
    }

    #[test]
    fn applying_same_change_twice_is_idempotent() {
        let mut page = AdapterPage::new(fixtures::adapter());

        assert!(page.apply(&AdapterEvent::DiscoveringChanged(true)));
        assert!(!page.apply(&AdapterEvent::DiscoveringChanged(true)));
        assert!(page.info().discovering);
    }

    #[test]
    fn device_events_leave_adapter_untouched() {
        let mut page = AdapterPage::new(fixtures::adapter());
        assert!(!page.apply(&AdapterEvent::DeviceAdded(fixtures::device_1())));
        assert_eq!(page.info(), &fixtures::adapter());
    }
}
