// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Component handlers return effects; this module turns them into tasks
//! (feed fetches, preview downloads, native alerts) or direct side effects
//! (opening links, pushing toasts).

use super::Message;
use crate::domain::media::RangeError;
use crate::feed::{self, FeedClient};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::query::{self, Effect, RequestToken};
use crate::ui::{gallery, modal, previews};
use iced::Task;
use std::time::Duration;

/// Context for update operations, borrowing what the handlers need from
/// `App`.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub feed: &'a FeedClient,
    pub min_loading: Duration,
    pub query: &'a mut query::State,
    pub modal: &'a mut modal::State,
    pub previews: &'a mut previews::Cache,
    pub notifications: &'a mut notifications::Manager,
    /// Set while a validation alert is on screen.
    pub alert_pending: &'a mut bool,
}

/// Handles date input changes, the "Get Space Images" trigger and feed
/// completions.
///
/// The trigger is ignored while an alert is open, so alerts never stack.
pub fn handle_query_message(ctx: &mut UpdateContext<'_>, message: query::Message) -> Task<Message> {
    if *ctx.alert_pending && matches!(message, query::Message::GetImages) {
        tracing::debug!("alert still open, ignoring trigger");
        return Task::none();
    }

    let today = chrono::Local::now().date_naive();

    match ctx.query.handle(message, today) {
        Effect::None => Task::none(),
        Effect::Alert(err) => {
            *ctx.alert_pending = true;
            show_alert(ctx.i18n, &err)
        }
        Effect::Fetch(token) => fetch_feed(ctx.feed.clone(), ctx.min_loading, token),
        Effect::GalleryReady => {
            let entries = ctx.query.entries();
            ctx.previews.fit_gallery(gallery::preview_urls(entries).count());
            previews::load(ctx.previews, ctx.feed, gallery::preview_urls(entries))
                .map(Message::Preview)
        }
    }
}

/// Handles card presses and video links on cards.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match message {
        gallery::Message::CardPressed(index) => open_modal(ctx, index),
        gallery::Message::VideoLinkPressed(index) => {
            // The link sits inside the card, so the card opens as well.
            if let Some(url) = ctx.query.entries().get(index).map(|e| e.url.clone()) {
                open_link(ctx.notifications, &url);
            }
            open_modal(ctx, index)
        }
    }
}

pub fn handle_modal_message(ctx: &mut UpdateContext<'_>, message: modal::Message) -> Task<Message> {
    match ctx.modal.handle(message) {
        modal::Event::OpenExternal(url) => open_link(ctx.notifications, &url),
        modal::Event::Closed | modal::Event::None => {}
    }
    Task::none()
}

fn open_modal(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    let Some(entry) = ctx.query.entries().get(index).cloned() else {
        tracing::debug!(index, "card index out of range");
        return Task::none();
    };

    // Cards first, so the modal image evicts older modal images instead.
    let urls = gallery::preview_urls(ctx.query.entries()).chain(entry.modal_image_url());
    let task = previews::load(ctx.previews, ctx.feed, urls);
    ctx.modal.open(entry);
    task.map(Message::Preview)
}

fn fetch_feed(client: FeedClient, minimum: Duration, token: RequestToken) -> Task<Message> {
    Task::perform(
        feed::with_minimum_display(client.fetch_entries(), minimum),
        move |result| Message::Query(query::Message::FeedLoaded { token, result }),
    )
}

/// Opens `url` in the system browser; failures become a warning toast.
fn open_link(notifications: &mut notifications::Manager, url: &str) {
    tracing::info!(%url, "opening external link");
    if let Err(err) = opener::open(url) {
        tracing::warn!(%url, %err, "failed to open link");
        notifications
            .push(Notification::warning("notification-open-link-error").with_arg("url", url));
    }
}

/// Shows a native alert for a rejected date range.
fn show_alert(i18n: &I18n, err: &RangeError) -> Task<Message> {
    let title = i18n.tr("alert-title");
    let description = i18n.tr(err.i18n_key());

    Task::perform(
        async move {
            rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title(title)
                .set_description(description)
                .set_buttons(rfd::MessageButtons::Ok)
                .show()
                .await
        },
        |_| Message::AlertDismissed,
    )
}
