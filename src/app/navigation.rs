// SPDX-License-Identifier: MPL-2.0
//! Page registry and selection.
//!
//! The adapter and device list pages always exist. A details page is
//! registered the first time a device is inspected and unregistered when it
//! is forgotten.

use std::fmt;

/// Identifier of a page reachable from the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageId {
    Adapter,
    Devices,
    /// Details page of one device, keyed by its lowercased address.
    Device(String),
}

impl PageId {
    /// Details page for a device address (any case).
    #[must_use]
    pub fn device(address: &str) -> Self {
        PageId::Device(address.to_ascii_lowercase())
    }

    /// The device address behind a details page.
    #[must_use]
    pub fn device_address(&self) -> Option<&str> {
        match self {
            PageId::Device(address) => Some(address),
            PageId::Adapter | PageId::Devices => None,
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageId::Adapter => f.write_str("adapter"),
            PageId::Devices => f.write_str("devices"),
            PageId::Device(address) => write!(f, "devices/{address}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigation {
    pages: Vec<PageId>,
    selected: PageId,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            pages: vec![PageId::Adapter, PageId::Devices],
            selected: PageId::Adapter,
        }
    }
}

impl Navigation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered pages in sidebar order.
    #[must_use]
    pub fn pages(&self) -> &[PageId] {
        &self.pages
    }

    #[must_use]
    pub fn selected(&self) -> &PageId {
        &self.selected
    }

    #[must_use]
    pub fn is_registered(&self, page: &PageId) -> bool {
        self.pages.contains(page)
    }

    /// Selects a registered page. Unknown pages are ignored.
    pub fn select(&mut self, page: PageId) -> bool {
        if self.is_registered(&page) {
            log::trace!("navigating to {page}");
            self.selected = page;
            true
        } else {
            false
        }
    }

    /// Registers the details page of `address` if needed and selects it.
    pub fn inspect(&mut self, address: &str) -> PageId {
        let page = PageId::device(address);
        if !self.is_registered(&page) {
            self.pages.push(page.clone());
        }
        self.selected = page.clone();
        page
    }

    /// Unregisters the details page of `address` and returns to the device
    /// list. Returns `false` if the device was never inspected.
    pub fn forget(&mut self, address: &str) -> bool {
        let page = PageId::device(address);
        let Some(pos) = self.pages.iter().position(|p| *p == page) else {
            return false;
        };
        self.pages.remove(pos);
        self.selected = PageId::Devices;
        true
    }
}
