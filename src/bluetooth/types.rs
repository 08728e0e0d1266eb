// SPDX-License-Identifier: MPL-2.0
//! Plain data reported by a Bluetooth adapter.
//!
//! These mirror what an adapter service hands to an inspector: the adapter
//! itself, the devices it has seen and, for connected devices, their GATT
//! services and characteristics.

use serde::{Deserialize, Serialize};

/// State of the local adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AdapterInfo {
    pub address: String,
    pub name: String,
    #[serde(default)]
    pub initialized: bool,
    #[serde(default)]
    pub present: bool,
    #[serde(default)]
    pub powered: bool,
    #[serde(default)]
    pub discoverable: bool,
    #[serde(default)]
    pub discovering: bool,
}

/// A remote device seen by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub name_for_display: String,
    /// Signal strength in dBm, when the last report carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i16>,
    /// `None` until service discovery has reported at least once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceInfo>>,
    #[serde(default)]
    pub is_gatt_connected: bool,
}

impl DeviceInfo {
    /// Creates a device with only an address and a display name.
    pub fn new(address: impl Into<String>, name_for_display: impl Into<String>) -> Self {
        let name_for_display = name_for_display.into();
        Self {
            address: address.into(),
            name: Some(name_for_display.clone()),
            name_for_display,
            rssi: None,
            services: None,
            is_gatt_connected: false,
        }
    }
}

/// A GATT service exposed by a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub id: String,
    pub uuid: String,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub characteristics: Vec<CharacteristicInfo>,
}

/// A GATT characteristic and the last value read from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacteristicInfo {
    pub id: String,
    pub uuid: String,
    /// Bit set of [`Property`] flags.
    #[serde(default)]
    pub properties: u64,
    /// Bit set of [`Permission`] flags.
    #[serde(default)]
    pub permissions: u64,
    #[serde(default)]
    pub last_known_value: Vec<u8>,
}

impl CharacteristicInfo {
    /// Names of the property flags set on this characteristic.
    #[must_use]
    pub fn property_names(&self) -> Vec<&'static str> {
        Property::ALL
            .iter()
            .filter(|property| self.properties & property.bit() != 0)
            .map(|property| property.name())
            .collect()
    }

    /// Names of the permission flags set on this characteristic.
    #[must_use]
    pub fn permission_names(&self) -> Vec<&'static str> {
        Permission::ALL
            .iter()
            .filter(|permission| self.permissions & permission.bit() != 0)
            .map(|permission| permission.name())
            .collect()
    }
}

/// Characteristic property flags, in bit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Broadcast,
    Read,
    WriteWithoutResponse,
    Write,
    Notify,
    Indicate,
    AuthenticatedSignedWrites,
    ExtendedProperties,
    ReliableWrite,
    WritableAuxiliaries,
    ReadEncrypted,
    WriteEncrypted,
    ReadEncryptedAuthenticated,
    WriteEncryptedAuthenticated,
}

impl Property {
    pub const ALL: [Property; 14] = [
        Property::Broadcast,
        Property::Read,
        Property::WriteWithoutResponse,
        Property::Write,
        Property::Notify,
        Property::Indicate,
        Property::AuthenticatedSignedWrites,
        Property::ExtendedProperties,
        Property::ReliableWrite,
        Property::WritableAuxiliaries,
        Property::ReadEncrypted,
        Property::WriteEncrypted,
        Property::ReadEncryptedAuthenticated,
        Property::WriteEncryptedAuthenticated,
    ];

    #[must_use]
    pub fn bit(self) -> u64 {
        1 << (self as u32)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Property::Broadcast => "Broadcast",
            Property::Read => "Read",
            Property::WriteWithoutResponse => "Write Without Response",
            Property::Write => "Write",
            Property::Notify => "Notify",
            Property::Indicate => "Indicate",
            Property::AuthenticatedSignedWrites => "Authenticated Signed Writes",
            Property::ExtendedProperties => "Extended Properties",
            Property::ReliableWrite => "Reliable Write",
            Property::WritableAuxiliaries => "Writable Auxiliaries",
            Property::ReadEncrypted => "Read Encrypted",
            Property::WriteEncrypted => "Write Encrypted",
            Property::ReadEncryptedAuthenticated => "Read Encrypted Authenticated",
            Property::WriteEncryptedAuthenticated => "Write Encrypted Authenticated",
        }
    }
}

/// Characteristic permission flags, in bit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Read,
    Write,
    ReadEncrypted,
    WriteEncrypted,
    ReadEncryptedAuthenticated,
    WriteEncryptedAuthenticated,
}

impl Permission {
    pub const ALL: [Permission; 6] = [
        Permission::Read,
        Permission::Write,
        Permission::ReadEncrypted,
        Permission::WriteEncrypted,
        Permission::ReadEncryptedAuthenticated,
        Permission::WriteEncryptedAuthenticated,
    ];

    #[must_use]
    pub fn bit(self) -> u64 {
        1 << (self as u32)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Permission::Read => "Read",
            Permission::Write => "Write",
            Permission::ReadEncrypted => "Read Encrypted",
            Permission::WriteEncrypted => "Write Encrypted",
            Permission::ReadEncryptedAuthenticated => "Read Encrypted Authenticated",
            Permission::WriteEncryptedAuthenticated => "Write Encrypted Authenticated",
        }
    }
}

/// Notifications pushed by the adapter service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterEvent {
    PresentChanged(bool),
    PoweredChanged(bool),
    DiscoverableChanged(bool),
    DiscoveringChanged(bool),
    DeviceAdded(DeviceInfo),
    DeviceChanged(DeviceInfo),
    DeviceRemoved(DeviceInfo),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn characteristic(properties: u64, permissions: u64) -> CharacteristicInfo {
        CharacteristicInfo {
            id: "characteristic1".into(),
            uuid: "00002a19-0000-1000-8000-00805f9b34fb".into(),
            properties,
            permissions,
            last_known_value: Vec::new(),
        }
    }

    #[test]
    fn property_names_follow_bits() {
        let c = characteristic(Property::Read.bit() | Property::Notify.bit(), 0);
        assert_eq!(c.property_names(), vec!["Read", "Notify"]);
    }

    #[test]
    fn all_bits_set_lists_every_flag() {
        let c = characteristic(u64::MAX, u64::MAX);
        assert_eq!(c.property_names().len(), Property::ALL.len());
        assert_eq!(c.permission_names().len(), Permission::ALL.len());
    }

    #[test]
    fn device_deserializes_without_optional_fields() {
        let device: DeviceInfo = toml::from_str(
            r#"
            address = "CC:CC:84:96:92:84"
            name_for_display = "CCC"
            "#,
        )
        .expect("minimal device should parse");
        assert_eq!(device.rssi, None);
        assert_eq!(device.services, None);
        assert!(!device.is_gatt_connected);
    }
}
