// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State`, consumes its own `Message`, and reports what the
//! application must do through an `Effect` or `Event` value.
//!
//! # Components
//!
//! - [`query`] - Date inputs and the fetch lifecycle
//! - [`gallery`] - Card grid and the loading/error/empty states
//! - [`modal`] - Detail overlay for one entry
//! - [`fact_box`] - "Did You Know?" box
//! - [`previews`] - Remote image cache shared by gallery and modal
//! - [`notifications`] - Toasts for non-blocking warnings
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom widgets (spinner)
//! - [`styles`] - Button, container and overlay styles
//! - [`design_tokens`] - Design system constants
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod fact_box;
pub mod gallery;
pub mod modal;
pub mod notifications;
pub mod previews;
pub mod query;
pub mod styles;
pub mod theming;
pub mod widgets;
