// SPDX-License-Identifier: MPL-2.0
//! `apod_lens` is a desktop gallery for Astronomy Picture of the Day
//! entries, built with the Iced GUI framework.
//!
//! It downloads a static JSON feed, validates the requested date range,
//! shows the entries as cards sorted by date, and opens a detail overlay
//! for the chosen entry. UI strings are localized with Fluent.

#![doc(html_root_url = "https://docs.rs/apod_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod facts;
pub mod feed;
pub mod i18n;
pub mod ui;
