// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking feedback.
//!
//! Used for problems the user should know about but that never interrupt
//! browsing: an unreadable settings file or a link that could not be opened.
//! Blocking date-range errors use native alert dialogs instead.
//!
//! - [`notification`] - `Notification` with i18n key and arguments
//! - [`manager`] - `Manager` for the visible slots and overflow queue
//! - [`toast`] - rendering
//!
//! At most three toasts are visible, each dismissing itself after five
//! seconds unless closed first.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, AUTO_DISMISS_AFTER};
pub use toast::Toast;
