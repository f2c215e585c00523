// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains the feed entry model and the rules that decide how
//! an entry is ordered, filtered, and displayed. Nothing here performs I/O.

pub mod range;
pub mod types;

// Re-export commonly used types
pub use range::{DateRange, RangeError};
pub use types::{has_source, sort_by_date, CardPreview, MediaEntry, MediaType, ModalMedia};
