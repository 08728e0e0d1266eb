// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::bluetooth::AdapterEvent;
use crate::ui::device_details;
use crate::ui::device_table;
use crate::ui::notifications;
use crate::ui::sidebar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Sidebar(sidebar::Message),
    DeviceTable(device_table::Message),
    /// Message for the details page of the given device address.
    DeviceDetails(String, device_details::Message),
    Notification(notifications::NotificationMessage),
    /// State change reported by the adapter source.
    Adapter(AdapterEvent),
    Tick(Instant), // Periodic tick for snackbar timers and scripted events
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `BT_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional adapter snapshot to load instead of the bundled demo.
    pub snapshot: Option<String>,
}
