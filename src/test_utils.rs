// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by unit and integration tests.
//!
//! [`fixtures`] returns fresh copies of a small, fixed adapter/device/service
//! set so tests can mutate them freely.

pub mod fixtures {
    use crate::bluetooth::{AdapterInfo, CharacteristicInfo, DeviceInfo, ServiceInfo};

    /// Powered, present adapter that is neither discoverable nor discovering.
    #[must_use]
    pub fn adapter() -> AdapterInfo {
        AdapterInfo {
            address: "02:1C:7E:6A:11:5A".into(),
            name: "computer.example.com-0".into(),
            initialized: true,
            present: true,
            powered: true,
            discoverable: false,
            discovering: false,
        }
    }

    /// Device with RSSI and an empty service list.
    #[must_use]
    pub fn device_1() -> DeviceInfo {
        DeviceInfo {
            rssi: Some(-40),
            services: Some(Vec::new()),
            ..DeviceInfo::new("AA:AA:84:96:92:84", "AAA")
        }
    }

    /// Device without RSSI and with an empty service list.
    #[must_use]
    pub fn device_2() -> DeviceInfo {
        DeviceInfo {
            services: Some(Vec::new()),
            ..DeviceInfo::new("BB:BB:84:96:92:84", "BBB")
        }
    }

    /// Device lacking both RSSI and services.
    #[must_use]
    pub fn device_3() -> DeviceInfo {
        DeviceInfo::new("CC:CC:84:96:92:84", "CCC")
    }

    #[must_use]
    pub fn service_1() -> ServiceInfo {
        ServiceInfo {
            id: "service1".into(),
            uuid: "00002a05-0000-1000-8000-00805f9b34fb".into(),
            is_primary: true,
            characteristics: vec![characteristic_1()],
        }
    }

    #[must_use]
    pub fn service_2() -> ServiceInfo {
        ServiceInfo {
            id: "service2".into(),
            uuid: "0000180d-0000-1000-8000-00805f9b34fb".into(),
            is_primary: true,
            characteristics: Vec::new(),
        }
    }

    /// Characteristic with every property and permission bit set.
    #[must_use]
    pub fn characteristic_1() -> CharacteristicInfo {
        CharacteristicInfo {
            id: "characteristic1".into(),
            uuid: "00002a19-0000-1000-8000-00805f9b34fb".into(),
            properties: u64::MAX,
            permissions: u64::MAX,
            last_known_value: Vec::new(),
        }
    }
}
