// SPDX-License-Identifier: MPL-2.0
//! Detail modal for a single gallery entry.
//!
//! The modal holds its own copy of the entry it shows, so a gallery that is
//! replaced while it is open does not change what the user is reading.
//! Dismissal happens through the close control or a press on the backdrop.

use crate::domain::media::{MediaEntry, ModalMedia};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery;
use crate::ui::previews;
use crate::ui::styles;
use iced::widget::{
    button, center, container, mouse_area, opaque, scrollable, text, Column, Container, Row,
    Space, Stack, Text,
};
use iced::{alignment, Element, Length};

const MODAL_MAX_HEIGHT: f32 = sizing::MODAL_MEDIA_HEIGHT + 320.0;

#[derive(Debug, Clone, Default)]
pub struct State {
    entry: Option<MediaEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Close,
    /// Play control on an embedded video frame.
    PlayEmbedded,
    /// "View Video" link for videos that cannot be embedded.
    OpenVideoLink,
}

/// What the application has to do after a modal message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Closed,
    OpenExternal(String),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub previews: &'a previews::Cache,
}

impl State {
    /// Shows `entry`, replacing whatever was displayed before.
    pub fn open(&mut self, entry: MediaEntry) {
        tracing::debug!(date = %entry.date, "opening detail modal");
        self.entry = Some(entry);
    }

    pub fn close(&mut self) {
        self.entry = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.entry.is_some()
    }

    #[must_use]
    pub fn entry(&self) -> Option<&MediaEntry> {
        self.entry.as_ref()
    }

    pub fn handle(&mut self, message: Message) -> Event {
        match message {
            Message::Close => {
                if self.entry.take().is_some() {
                    Event::Closed
                } else {
                    Event::None
                }
            }
            Message::PlayEmbedded | Message::OpenVideoLink => self
                .entry
                .as_ref()
                .filter(|entry| entry.is_video())
                .map_or(Event::None, |entry| Event::OpenExternal(entry.url.clone())),
        }
    }

    /// Overlay covering the whole window, or `None` while closed.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
        let entry = self.entry.as_ref()?;

        let close = button(text(ctx.i18n.tr("modal-close-button")).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .on_press(Message::Close)
            .style(styles::button::close);

        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(Text::new(entry.title.as_str()).size(typography::TITLE_MD))
                    .push(Text::new(entry.date.as_str()).size(typography::BODY_SM)),
            )
            .push(close);

        let body = Column::new()
            .spacing(spacing::MD)
            .push(media(ctx.i18n, ctx.previews, entry))
            .push(Text::new(entry.explanation.as_str()).size(typography::BODY));

        let content = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .push(header)
                .push(scrollable(body).height(Length::Shrink)),
        )
        .padding(spacing::LG)
        .max_width(sizing::MODAL_MAX_WIDTH)
        .max_height(MODAL_MAX_HEIGHT)
        .style(styles::container::modal);

        let backdrop = center(opaque(content))
            .padding(spacing::XL)
            .style(styles::overlay::backdrop);

        Some(opaque(mouse_area(backdrop).on_press(Message::Close)))
    }
}

fn media<'a>(
    i18n: &'a I18n,
    previews: &'a previews::Cache,
    entry: &'a MediaEntry,
) -> Element<'a, Message> {
    let framed = |inner: Element<'a, Message>| -> Element<'a, Message> {
        Container::new(inner)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MODAL_MEDIA_HEIGHT))
            .clip(true)
            .into()
    };

    match entry.modal_media() {
        ModalMedia::Image { src } => framed(gallery::remote_image(
            i18n,
            previews,
            src,
            entry.title.clone(),
        )),
        ModalMedia::EmbeddedFrame { .. } => {
            let poster: Element<'a, Message> = match entry.thumbnail() {
                Some(thumbnail) => gallery::remote_image(
                    i18n,
                    previews,
                    thumbnail,
                    i18n.tr_with_args("gallery-video-thumbnail-alt", &[("title", entry.title.as_str())]),
                ),
                None => container(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::container::preview_placeholder)
                    .into(),
            };

            let play = button(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Center)
                    .push(text("▶").size(typography::TITLE_MD))
                    .push(text(i18n.tr("modal-play-embedded")).size(typography::BODY_LG)),
            )
            .padding([spacing::SM, spacing::LG])
            .on_press(Message::PlayEmbedded)
            .style(styles::button::play_overlay());

            framed(Stack::new().push(poster).push(center(play)).into())
        }
        ModalMedia::ExternalLink { .. } => button(
            text(i18n.tr("modal-view-video")).size(typography::BODY_LG),
        )
        .on_press(Message::OpenVideoLink)
        .style(styles::button::link)
        .into(),
    }
}
