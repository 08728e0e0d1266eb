// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[snackbar]` - Auto-dismiss timeout and hide transition
//! - `[value]` - Format used when a characteristic value is first displayed
//!
//! # Path Resolution
//!
//! See [`crate::app::paths`]. Tests use `load_from_path()`/`save_to_path()`
//! or the `_with_override` variants with a temporary directory.
//!
//! # Examples
//!
//! ```no_run
//! use bt_lens::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.snackbar.timeout_ms = Some(5_000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::{HideTransition, SnackbarTimeout};
use crate::domain::value::ValueFormat;
use crate::error::{Error, Result};
use crate::ui::notifications::Timing;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Localization key of the warning shown when `settings.toml` cannot be read.
pub const LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Snackbar timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnackbarConfig {
    /// Auto-dismiss timeout in milliseconds.
    #[serde(
        default = "default_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_ms: Option<u32>,

    /// Hide transition in milliseconds; 0 hides instantly.
    #[serde(
        default = "default_hide_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hide_transition_ms: Option<u32>,
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            hide_transition_ms: default_hide_transition_ms(),
        }
    }
}

/// Characteristic value display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ValueConfig {
    /// One of `hexadecimal`, `utf8` or `decimal`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub snackbar: SnackbarConfig,

    #[serde(default)]
    pub value: ValueConfig,
}

impl Config {
    /// Snackbar timing, clamped to the supported bounds.
    #[must_use]
    pub fn snackbar_timing(&self) -> Timing {
        Timing {
            timeout: self
                .snackbar
                .timeout_ms
                .map(SnackbarTimeout::new)
                .unwrap_or_default(),
            hide_transition: self
                .snackbar
                .hide_transition_ms
                .map(HideTransition::new)
                .unwrap_or_default(),
        }
    }

    /// Format for newly loaded values. Unknown keys fall back to hexadecimal.
    #[must_use]
    pub fn default_format(&self) -> ValueFormat {
        self.value
            .default_format
            .as_deref()
            .and_then(ValueFormat::from_key)
            .unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_timeout_ms() -> Option<u32> {
    Some(DEFAULT_SNACKBAR_TIMEOUT_MS)
}

fn default_hide_transition_ms() -> Option<u32> {
    Some(DEFAULT_HIDE_TRANSITION_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the localization key of a warning to display.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("falling back to default settings: {err}");
                    return (Config::default(), Some(LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
