// SPDX-License-Identifier: MPL-2.0
//! Bluetooth adapter, device and GATT data as seen by the inspector.
//!
//! Nothing here talks to a controller. State arrives as [`AdapterEvent`]s
//! from whatever source the application is wired to and is folded into
//! the [`DeviceCollection`] and the adapter page.

mod device_collection;
mod types;

pub use device_collection::{DeviceCollection, DeviceEntry};
pub use types::{
    AdapterEvent, AdapterInfo, CharacteristicInfo, DeviceInfo, Permission, Property, ServiceInfo,
};
