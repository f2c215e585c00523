// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{gallery, modal, notifications, previews, query};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Query(query::Message),
    Gallery(gallery::Message),
    Modal(modal::Message),
    Preview(previews::Message),
    Notification(notifications::NotificationMessage),
    /// The native alert dialog was closed.
    AlertDismissed,
    /// Drives the spinner and toast expiry.
    Tick(Instant),
}

/// Runtime flags passed from the launcher to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Overrides `[feed] url` from the settings file.
    pub feed_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `APOD_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
