// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core rules with no I/O.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Its only dependencies are `chrono` for calendar dates and `serde` for the
//! feed schema, which keeps it testable without a window or a network.
//!
//! # Modules
//!
//! - [`media`]: Feed entries ([`MediaEntry`](media::MediaEntry)), rendering
//!   decisions ([`CardPreview`](media::CardPreview), [`ModalMedia`](media::ModalMedia))
//!   and date ranges ([`DateRange`](media::DateRange))

pub mod media;
