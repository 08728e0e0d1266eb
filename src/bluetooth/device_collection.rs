// SPDX-License-Identifier: MPL-2.0
//! Devices seen by the adapter, in discovery order.
//!
//! Rows are never deleted: a device that disappears is only marked as
//! removed so the table keeps its layout, and the mark is cleared if the
//! device shows up again.

use super::types::DeviceInfo;

/// One row of the device table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
    info: DeviceInfo,
    removed: bool,
}

impl DeviceEntry {
    #[must_use]
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.info.address
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Last RSSI reported for this device, if any report carried one.
    #[must_use]
    pub fn rssi(&self) -> Option<i16> {
        self.info.rssi
    }

    /// Number of services, or `None` if discovery never reported.
    #[must_use]
    pub fn services_count(&self) -> Option<usize> {
        self.info.services.as_ref().map(Vec::len)
    }
}

/// Ordered collection of [`DeviceEntry`] keyed by address.
#[derive(Debug, Clone, Default)]
pub struct DeviceCollection {
    entries: Vec<DeviceEntry>,
}

impl DeviceCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from an initial device list.
    #[must_use]
    pub fn from_devices(devices: impl IntoIterator<Item = DeviceInfo>) -> Self {
        let mut collection = Self::new();
        for device in devices {
            collection.add(device);
        }
        collection
    }

    /// Adds a device, or updates it in place if the address is known.
    pub fn add(&mut self, info: DeviceInfo) {
        self.upsert(info);
    }

    /// Applies a device update. Unknown addresses are added.
    pub fn change(&mut self, info: DeviceInfo) {
        self.upsert(info);
    }

    /// Marks the device as removed. Returns `false` for unknown addresses.
    pub fn remove(&mut self, address: &str) -> bool {
        match self.position(address) {
            Some(index) => {
                self.entries[index].removed = true;
                true
            }
            None => false,
        }
    }

    /// Drops every row.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Looks a device up by address, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, address: &str) -> Option<&DeviceEntry> {
        self.position(address).map(|index| &self.entries[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeviceEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, address: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.info.address.eq_ignore_ascii_case(address))
    }

    fn upsert(&mut self, mut info: DeviceInfo) {
        match self.position(&info.address) {
            Some(index) => {
                let entry = &mut self.entries[index];
                // Keep the last valid RSSI when an update carries none.
                if info.rssi.is_none() {
                    info.rssi = entry.info.rssi;
                }
                entry.info = info;
                entry.removed = false;
            }
            None => self.entries.push(DeviceEntry {
                info,
                removed: false,
            }),
        }
    }
}
