// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[feed]` - Data source URL, loading behavior, preview cache size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` CLI argument or `APOD_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! The application never writes this file; users edit it by hand.
//!
//! # Examples
//!
//! ```no_run
//! use apod_lens::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("feed: {}", config.feed.url());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Data source and gallery loading settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct FeedConfig {
    /// URL of the JSON feed.
    #[serde(default)]
    pub url: Option<String>,

    /// Minimum time the loading placeholder stays visible.
    #[serde(default)]
    pub min_loading_ms: Option<u64>,

    /// Show only entries whose date lies inside the selected range.
    #[serde(default)]
    pub filter_to_range: Option<bool>,

    /// Number of decoded preview images kept in memory.
    #[serde(default)]
    pub preview_cache_entries: Option<usize>,
}

impl FeedConfig {
    /// Feed URL, falling back to the public APOD mirror.
    #[must_use]
    pub fn url(&self) -> &str {
        self.url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_FEED_URL)
    }

    /// Minimum loading duration, clamped to the supported range.
    #[must_use]
    pub fn min_loading(&self) -> Duration {
        let ms = self
            .min_loading_ms
            .unwrap_or(DEFAULT_MIN_LOADING_MS)
            .clamp(MIN_MIN_LOADING_MS, MAX_MIN_LOADING_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn filter_to_range(&self) -> bool {
        self.filter_to_range.unwrap_or(DEFAULT_FILTER_TO_RANGE)
    }

    /// Preview cache capacity, clamped to the supported range.
    #[must_use]
    pub fn preview_cache_entries(&self) -> usize {
        self.preview_cache_entries
            .unwrap_or(DEFAULT_PREVIEW_CACHE_ENTRIES)
            .clamp(MIN_PREVIEW_CACHE_ENTRIES, MAX_PREVIEW_CACHE_ENTRIES)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub feed: FeedConfig,
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
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "ignoring unreadable config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
