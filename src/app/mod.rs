// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the inspector pages.
//!
//! The `App` struct wires together the adapter snapshot, page navigation,
//! localization and the snackbar queue, and routes every message through
//! the handlers in [`update`].

pub mod config;
mod message;
pub mod navigation;
pub mod paths;
pub mod snapshot;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::bluetooth::DeviceCollection;
use crate::domain::value::ValueFormat;
use crate::i18n::fluent::I18n;
use crate::ui::adapter_page::AdapterPage;
use crate::ui::device_details::DeviceDetails;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use navigation::Navigation;
use snapshot::{Script, Snapshot};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::time::Instant;

/// Localization key of the warning shown when a snapshot cannot be read.
pub const SNAPSHOT_WARNING_KEY: &str = "notification-snapshot-load-error";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Format new details pages start in.
    default_format: ValueFormat,
    adapter: AdapterPage,
    devices: DeviceCollection,
    navigation: Navigation,
    /// Open details pages, keyed by lowercased device address.
    details: BTreeMap<String, DeviceDetails>,
    sidebar_open: bool,
    notifications: notifications::Manager,
    /// `[[events]]` from the snapshot that have not fired yet.
    script: Script,
    /// Time of the last tick, used to render the snackbar fade.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selected", self.navigation.selected())
            .field("devices", &self.devices.len())
            .field("details", &self.details.len())
            .field("sidebar_open", &self.sidebar_open)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Reads the configuration, then loads the snapshot named in `flags`
    /// (or the bundled demo).
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let app = Self::with_config(&flags, &config, config_warning);
        (app, Task::none())
    }

    fn with_config(flags: &Flags, config: &Config, config_warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config);
        let notifications = notifications::Manager::with_timing(config.snackbar_timing());

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            default_format: config.default_format(),
            adapter: AdapterPage::default(),
            devices: DeviceCollection::new(),
            navigation: Navigation::new(),
            details: BTreeMap::new(),
            sidebar_open: false,
            notifications,
            script: Script::empty(Instant::now()),
            now: Instant::now(),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(Notification::warning(app.i18n.tr(&key)));
        }

        let snapshot = match load_snapshot(flags.snapshot.as_deref()) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::warn!("no adapter snapshot: {err}");
                app.notifications
                    .push(Notification::warning(app.i18n.tr(SNAPSHOT_WARNING_KEY)));
                Snapshot::default()
            }
        };
        app.replay(snapshot);
        app
    }

    /// Replaces the adapter state with a snapshot and starts its script.
    fn replay(&mut self, snapshot: Snapshot) {
        log::info!(
            "loaded adapter {} with {} device(s) and {} scripted event(s)",
            snapshot.adapter.address,
            snapshot.devices.len(),
            snapshot.events.len()
        );
        let now = Instant::now();
        self.script = snapshot.script(now).unwrap_or_else(|err| {
            log::warn!("ignoring snapshot script: {err}");
            Script::empty(now)
        });

        let events = snapshot.device_events();
        self.adapter = AdapterPage::new(snapshot.adapter);
        self.devices.clear();
        for event in events.into_iter().chain(self.script.due(now)) {
            let _ = self.update(Message::Adapter(event));
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications() || !self.script.is_empty(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            adapter: &mut self.adapter,
            devices: &mut self.devices,
            navigation: &mut self.navigation,
            details: &mut self.details,
            sidebar_open: &mut self.sidebar_open,
            notifications: &mut self.notifications,
            script: &mut self.script,
            default_format: self.default_format,
            now: &mut self.now,
        };

        match message {
            Message::Sidebar(message) => update::handle_sidebar_message(&mut ctx, message),
            Message::DeviceTable(message) => {
                update::handle_device_table_message(&mut ctx, message);
            }
            Message::DeviceDetails(address, message) => {
                update::handle_details_message(&mut ctx, &address, message);
            }
            Message::Notification(message) => {
                update::handle_notification_message(&mut ctx, message);
            }
            Message::Adapter(event) => update::handle_adapter_event(&mut ctx, event),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }

        update::drain_notification_events(&mut ctx);
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            adapter: &self.adapter,
            devices: &self.devices,
            navigation: &self.navigation,
            details: &self.details,
            sidebar_open: self.sidebar_open,
            notifications: &self.notifications,
            now: self.now,
        })
    }
}

fn load_snapshot(path: Option<&str>) -> crate::error::Result<Snapshot> {
    match path {
        Some(path) => Snapshot::load_from_path(Path::new(path)),
        None => Snapshot::demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bluetooth::AdapterEvent;
    use crate::test_utils::fixtures;
    use crate::ui::device_table;
    use crate::ui::notifications::{NotificationMessage, Severity};
    use navigation::PageId;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    fn english() -> Flags {
        Flags {
            lang: Some("en-US".into()),
            ..Flags::default()
        }
    }

    #[test]
    fn starts_on_adapter_page_with_demo_devices() {
        let app = App::with_config(&english(), &Config::default(), None);

        assert_eq!(app.navigation.selected(), &PageId::Adapter);
        assert_eq!(app.devices.len(), 3);
        assert!(app.adapter.info().present);
        assert!(!app.notifications.has_notifications());
        assert_eq!(app.title(), "Bluetooth Internals");
    }

    #[test]
    fn loads_snapshot_from_path() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("adapter.toml");
        fs::write(
            &path,
            r#"
            [adapter]
            address = "11:22:33:44:55:66"
            name = "usb"
            initialized = true
            present = true
            powered = false
            discoverable = false
            discovering = false

            [[devices]]
            address = "AA:AA:84:96:92:84"
            name_for_display = "AAA"
            "#,
        )
        .expect("write snapshot");

        let flags = Flags {
            snapshot: Some(path.to_string_lossy().into_owned()),
            ..english()
        };
        let app = App::with_config(&flags, &Config::default(), None);

        assert_eq!(app.adapter.info().name, "usb");
        assert_eq!(app.devices.len(), 1);
    }

    #[test]
    fn broken_snapshot_warns_and_starts_empty() {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            snapshot: Some(dir.path().join("missing.toml").to_string_lossy().into_owned()),
            ..english()
        };
        let app = App::with_config(&flags, &Config::default(), None);

        assert!(app.devices.is_empty());
        let current = app.notifications.current().expect("warning shown");
        assert_eq!(current.severity(), Severity::Warning);
        assert_eq!(
            current.message(),
            "The adapter snapshot could not be loaded."
        );
    }

    #[test]
    fn config_warning_is_queued_before_snapshot_warning() {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            snapshot: Some(dir.path().join("missing.toml").to_string_lossy().into_owned()),
            ..english()
        };
        let app = App::with_config(
            &flags,
            &Config::default(),
            Some(config::LOAD_WARNING_KEY.to_string()),
        );

        assert_eq!(
            app.notifications.current().map(Notification::message),
            Some("Settings could not be read. Default settings are used.")
        );
        assert_eq!(app.notifications.queued_count(), 1);
    }

    #[test]
    fn adapter_messages_update_pages() {
        let mut app = App::with_config(&english(), &Config::default(), None);
        let _ = app.update(Message::Adapter(AdapterEvent::PoweredChanged(false)));
        let _ = app.update(Message::Adapter(AdapterEvent::DeviceRemoved(
            fixtures::device_3(),
        )));

        assert!(!app.adapter.info().powered);
        assert!(app
            .devices
            .get("CC:CC:84:96:92:84")
            .is_some_and(|entry| entry.is_removed()));
    }

    #[test]
    fn inspected_device_uses_configured_format() {
        let mut config = Config::default();
        config.value.default_format = Some("decimal".into());
        let mut app = App::with_config(&english(), &config, None);

        let _ = app.update(Message::DeviceTable(device_table::Message::Inspect(
            "AA:AA:84:96:92:84".into(),
        )));

        let details = app.details.get("aa:aa:84:96:92:84").expect("details open");
        assert_eq!(details.value().value().format(), ValueFormat::Decimal);
    }

    #[test]
    fn ticks_expire_notifications() {
        let mut app = App::with_config(&english(), &Config::default(), None);
        let start = Instant::now();
        app.notifications
            .push_at(Notification::new("Message 1"), start);

        let timing = app.notifications.timing();
        let after = start
            + timing.timeout.as_duration()
            + timing.hide_transition.as_duration()
            + Duration::from_millis(1);
        let _ = app.update(Message::Tick(after));

        assert_eq!(app.now, after);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn dismiss_all_message_empties_snackbar() {
        let mut app = App::with_config(&english(), &Config::default(), None);
        app.notifications.show("Message 1");
        app.notifications.show("Message 2");

        let _ = app.update(Message::Notification(NotificationMessage::DismissAll));

        assert!(!app.notifications.is_showing());
        assert_eq!(app.notifications.queued_count(), 0);
    }

    #[test]
    fn ticks_play_scripted_snapshot_events() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("adapter.toml");
        fs::write(
            &path,
            r#"
            [adapter]
            address = "11:22:33:44:55:66"
            name = "usb"
            present = true
            powered = true

            [[devices]]
            address = "AA:AA:84:96:92:84"
            name_for_display = "AAA"

            [[events]]
            kind = "discovering"
            value = true

            [[events]]
            after_ms = 1000
            kind = "device_changed"
            device = { address = "AA:AA:84:96:92:84", name_for_display = "AAA", rssi = -55 }

            [[events]]
            after_ms = 2000
            kind = "powered"
            value = false

            [[events]]
            after_ms = 2000
            kind = "device_removed"
            device = { address = "AA:AA:84:96:92:84", name_for_display = "AAA" }
            "#,
        )
        .expect("write snapshot");

        let flags = Flags {
            snapshot: Some(path.to_string_lossy().into_owned()),
            ..english()
        };
        let mut app = App::with_config(&flags, &Config::default(), None);
        assert!(app.adapter.info().discovering);
        assert_eq!(app.script.len(), 3);

        let later = Instant::now() + Duration::from_secs(3);
        let _ = app.update(Message::Tick(later));

        assert!(app.script.is_empty());
        assert!(!app.adapter.info().powered);
        let device = app.devices.get("AA:AA:84:96:92:84").expect("device kept");
        assert_eq!(device.rssi(), Some(-55));
        assert!(device.is_removed());
    }
}
