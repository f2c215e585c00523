// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Feed**: Data source location and loading behavior
//! - **Previews**: In-memory preview image cache

// ==========================================================================
// Feed Defaults
// ==========================================================================

/// Static JSON feed of APOD entries.
pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

/// Minimum time the loading placeholder stays visible (milliseconds).
pub const DEFAULT_MIN_LOADING_MS: u64 = 1200;

/// Lower bound for the minimum loading time.
pub const MIN_MIN_LOADING_MS: u64 = 0;

/// Upper bound for the minimum loading time.
pub const MAX_MIN_LOADING_MS: u64 = 10_000;

/// Whether the gallery only shows entries inside the selected range.
pub const DEFAULT_FILTER_TO_RANGE: bool = false;

// ==========================================================================
// Preview Cache Defaults
// ==========================================================================

/// Default number of decoded preview images kept in memory.
pub const DEFAULT_PREVIEW_CACHE_ENTRIES: usize = 64;

/// Minimum preview cache size.
pub const MIN_PREVIEW_CACHE_ENTRIES: usize = 8;

/// Maximum preview cache size.
pub const MAX_PREVIEW_CACHE_ENTRIES: usize = 512;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_MIN_LOADING_MS >= MIN_MIN_LOADING_MS);
    assert!(DEFAULT_MIN_LOADING_MS >= MIN_MIN_LOADING_MS);
    assert!(DEFAULT_MIN_LOADING_MS <= MAX_MIN_LOADING_MS);

    assert!(MIN_PREVIEW_CACHE_ENTRIES > 0);
    assert!(MAX_PREVIEW_CACHE_ENTRIES >= MIN_PREVIEW_CACHE_ENTRIES);
    assert!(DEFAULT_PREVIEW_CACHE_ENTRIES >= MIN_PREVIEW_CACHE_ENTRIES);
    assert!(DEFAULT_PREVIEW_CACHE_ENTRIES <= MAX_PREVIEW_CACHE_ENTRIES);
};
