// SPDX-License-Identifier: MPL-2.0
//! Adapter snapshots: the TOML files the inspector is fed from.
//!
//! A snapshot holds an `[adapter]` table and any number of `[[devices]]`.
//! Loading one replays it as [`AdapterEvent`]s, so the pages see exactly
//! what a live adapter source would send them.
//!
//! An optional `[[events]]` list scripts later changes, each one fired
//! `after_ms` milliseconds after the snapshot was loaded:
//!
//! ```toml
//! [[events]]
//! after_ms = 2000
//! kind = "powered"
//! value = false
//!
//! [[events]]
//! after_ms = 4000
//! kind = "device_removed"
//! device = { address = "CC:CC:84:96:92:84", name_for_display = "CCC" }
//! ```

use crate::bluetooth::{AdapterEvent, AdapterInfo, DeviceInfo};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(RustEmbed)]
#[folder = "assets/fixtures/"]
struct Fixtures;

const DEMO_FILE: &str = "demo.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Snapshot {
    pub adapter: AdapterInfo,
    #[serde(default)]
    pub devices: Vec<DeviceInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<ScriptedEvent>,
}

/// What a scripted event changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Present,
    Powered,
    Discoverable,
    Discovering,
    DeviceAdded,
    DeviceChanged,
    DeviceRemoved,
}

/// One `[[events]]` entry. Adapter flags take `value`, device events take `device`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    #[serde(default)]
    pub after_ms: u64,
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceInfo>,
}

impl ScriptedEvent {
    /// Converts the entry, failing when its payload does not match `kind`.
    pub fn to_adapter_event(&self) -> Result<AdapterEvent> {
        match self.kind {
            EventKind::Present => self.flag().map(AdapterEvent::PresentChanged),
            EventKind::Powered => self.flag().map(AdapterEvent::PoweredChanged),
            EventKind::Discoverable => self.flag().map(AdapterEvent::DiscoverableChanged),
            EventKind::Discovering => self.flag().map(AdapterEvent::DiscoveringChanged),
            EventKind::DeviceAdded => self.device().map(AdapterEvent::DeviceAdded),
            EventKind::DeviceChanged => self.device().map(AdapterEvent::DeviceChanged),
            EventKind::DeviceRemoved => self.device().map(AdapterEvent::DeviceRemoved),
        }
    }

    fn flag(&self) -> Result<bool> {
        self.value.ok_or_else(|| self.missing("value"))
    }

    fn device(&self) -> Result<DeviceInfo> {
        self.device.clone().ok_or_else(|| self.missing("device"))
    }

    fn missing(&self, field: &str) -> Error {
        Error::Snapshot(format!(
            "{:?} event at {} ms has no {field}",
            self.kind, self.after_ms
        ))
    }
}

/// Scripted events waiting for their time, ordered by delay.
#[derive(Debug)]
pub struct Script {
    started: Instant,
    pending: VecDeque<(Duration, AdapterEvent)>,
}

impl Script {
    /// A script with nothing left to play.
    #[must_use]
    pub fn empty(started: Instant) -> Self {
        Self {
            started,
            pending: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes every event whose delay has elapsed at `now`, in script order.
    pub fn due(&mut self, now: Instant) -> Vec<AdapterEvent> {
        let elapsed = now.saturating_duration_since(self.started);
        let mut due = Vec::new();
        while self
            .pending
            .front()
            .is_some_and(|(after, _)| *after <= elapsed)
        {
            if let Some((_, event)) = self.pending.pop_front() {
                due.push(event);
            }
        }
        due
    }
}

impl Snapshot {
    /// Parses a snapshot from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let snapshot: Self =
            toml::from_str(content).map_err(|err| Error::Snapshot(err.to_string()))?;
        for event in &snapshot.events {
            event.to_adapter_event()?;
        }
        Ok(snapshot)
    }

    /// Loads a snapshot file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// The snapshot bundled with the binary.
    pub fn demo() -> Result<Self> {
        let file = Fixtures::get(DEMO_FILE)
            .ok_or_else(|| Error::Snapshot(format!("{DEMO_FILE} is not embedded")))?;
        Self::parse(&String::from_utf8_lossy(file.data.as_ref()))
    }

    /// Device events replaying this snapshot, in file order.
    #[must_use]
    pub fn device_events(&self) -> Vec<AdapterEvent> {
        self.devices
            .iter()
            .cloned()
            .map(AdapterEvent::DeviceAdded)
            .collect()
    }

    /// The `[[events]]` list as a script starting at `started`. Entries
    /// with equal delays keep their file order.
    pub fn script(&self, started: Instant) -> Result<Script> {
        let mut pending = self
            .events
            .iter()
            .map(|event| Ok((Duration::from_millis(event.after_ms), event.to_adapter_event()?)))
            .collect::<Result<Vec<_>>>()?;
        pending.sort_by_key(|(after, _)| *after);
        Ok(Script {
            started,
            pending: pending.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn demo_snapshot_parses() {
        let snapshot = Snapshot::demo().expect("demo snapshot should parse");
        assert!(snapshot.adapter.present);
        assert_eq!(snapshot.devices.len(), 3);

        let first = &snapshot.devices[0];
        let services = first.services.as_ref().expect("first device has services");
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].characteristics[0].last_known_value, b"abc");
        assert_eq!(snapshot.devices[2].services, None);
        assert_eq!(snapshot.events.len(), 3);
        assert!(snapshot.script(Instant::now()).is_ok());
    }

    #[test]
    fn device_events_preserve_order() {
        let snapshot = Snapshot::demo().expect("demo snapshot should parse");
        let addresses: Vec<_> = snapshot
            .device_events()
            .into_iter()
            .filter_map(|event| match event {
                AdapterEvent::DeviceAdded(device) => Some(device.address),
                _ => None,
            })
            .collect();
        assert_eq!(
            addresses,
            ["AA:AA:84:96:92:84", "BB:BB:84:96:92:84", "CC:CC:84:96:92:84"]
        );
    }

    #[test]
    fn missing_adapter_table_is_a_snapshot_error() {
        match Snapshot::parse("[[devices]]\naddress = \"x\"\nname_for_display = \"x\"\n") {
            Err(Error::Snapshot(message)) => assert!(message.contains("adapter")),
            other => panic!("expected Snapshot error, got {other:?}"),
        }
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = Snapshot::load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn written_snapshot_loads_back() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("snapshot.toml");
        let snapshot = Snapshot {
            adapter: crate::test_utils::fixtures::adapter(),
            devices: vec![crate::test_utils::fixtures::device_1()],
            events: vec![ScriptedEvent {
                after_ms: 500,
                kind: EventKind::Powered,
                value: Some(false),
                device: None,
            }],
        };
        fs::write(&path, toml::to_string(&snapshot).expect("serialize")).expect("write");

        assert_eq!(Snapshot::load_from_path(&path).expect("load"), snapshot);
    }

    #[test]
    fn scripted_events_play_in_delay_order() {
        let snapshot = Snapshot::parse(
            r#"
            [adapter]
            address = "02:1C:7E:6A:11:5A"
            name = "usb"

            [[events]]
            after_ms = 2000
            kind = "device_removed"
            device = { address = "CC:CC:84:96:92:84", name_for_display = "CCC" }

            [[events]]
            after_ms = 1000
            kind = "powered"
            value = false

            [[events]]
            after_ms = 1000
            kind = "discovering"
            value = true
            "#,
        )
        .expect("scripted snapshot should parse");

        let start = Instant::now();
        let mut script = snapshot.script(start).expect("script");
        assert_eq!(script.len(), 3);

        assert!(script.due(start + Duration::from_millis(999)).is_empty());
        assert_eq!(
            script.due(start + Duration::from_millis(1000)),
            vec![
                AdapterEvent::PoweredChanged(false),
                AdapterEvent::DiscoveringChanged(true)
            ]
        );
        match script.due(start + Duration::from_secs(5)).as_slice() {
            [AdapterEvent::DeviceRemoved(device)] => {
                assert_eq!(device.address, "CC:CC:84:96:92:84");
            }
            other => panic!("expected one removal, got {other:?}"),
        }
        assert!(script.is_empty());
    }

    #[test]
    fn scripted_event_without_payload_is_rejected() {
        let result = Snapshot::parse(
            r#"
            [adapter]
            address = "02:1C:7E:6A:11:5A"
            name = "usb"

            [[events]]
            kind = "device_changed"
            value = true
            "#,
        );
        match result {
            Err(Error::Snapshot(message)) => assert!(message.contains("device")),
            other => panic!("expected Snapshot error, got {other:?}"),
        }
    }
}
