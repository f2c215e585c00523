// SPDX-License-Identifier: MPL-2.0
//! Gallery area: idle prompt, loading indicator, error message or cards.
//!
//! Cards keep the order of the entries they are given. Each card is a
//! button that opens the detail modal; video cards carry an inner link
//! control that reports [`Message::VideoLinkPressed`] instead.

use crate::domain::media::{has_source, CardPreview, MediaEntry};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::previews::{self, Preview};
use crate::ui::query::{self, Phase};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{
    button, center, container, image, scrollable, text, Column, Container, Row, Stack, Text,
};
use iced::{alignment, ContentFit, Element, Length};

/// Borrowed state needed to render the gallery area.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub query: &'a query::State,
    pub previews: &'a previews::Cache,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Index into the current gallery entries.
    CardPressed(usize),
    VideoLinkPressed(usize),
}

/// Image URLs the cards for `entries` display, in card order.
pub fn preview_urls(entries: &[MediaEntry]) -> impl Iterator<Item = &str> {
    entries.iter().filter_map(MediaEntry::card_image_url)
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.query.phase() {
        Phase::Idle => status_message(ctx.i18n.tr("gallery-empty-prompt")),
        Phase::Loading => loading(ctx.i18n, ctx.query.spinner_rotation()),
        Phase::Error(err) => error(ctx.i18n.tr(err.i18n_key())),
        Phase::Gallery(entries) if entries.is_empty() => {
            status_message(ctx.i18n.tr("gallery-no-entries-in-range"))
        }
        Phase::Gallery(entries) => cards(ctx.i18n, ctx.previews, entries),
    }
}

fn cards<'a>(
    i18n: &'a I18n,
    previews: &'a previews::Cache,
    entries: &'a [MediaEntry],
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| card(i18n, previews, index, entry))
        .collect();

    let grid = Row::with_children(cards)
        .spacing(spacing::LG)
        .wrap()
        .vertical_spacing(spacing::LG);

    scrollable(
        Container::new(grid)
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn card<'a>(
    i18n: &'a I18n,
    previews: &'a previews::Cache,
    index: usize,
    entry: &'a MediaEntry,
) -> Element<'a, Message> {
    let media: Element<'a, Message> = match entry.card_preview() {
        CardPreview::Image { src } => remote_image(i18n, previews, src, entry.title.clone()),
        CardPreview::VideoThumbnail { thumbnail, .. } => {
            let alt = i18n.tr_with_args("gallery-video-thumbnail-alt", &[("title", entry.title.as_str())]);
            let play = button(text("▶").size(typography::TITLE_MD))
                .padding([spacing::XS, spacing::SM])
                .on_press(Message::VideoLinkPressed(index))
                .style(styles::button::play_overlay());

            Stack::new()
                .push(remote_image(i18n, previews, thumbnail, alt))
                .push(center(play))
                .into()
        }
        CardPreview::VideoLink { .. } => {
            let link = button(text(i18n.tr("gallery-view-video")).size(typography::BODY_LG))
                .on_press(Message::VideoLinkPressed(index))
                .style(styles::button::link);
            placeholder(link.into())
        }
    };

    let info_overlay = Container::new(title_and_date(entry, typography::BODY, typography::CAPTION))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::overlay::card_info);

    let preview = Stack::new().push(media).push(
        Container::new(info_overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Bottom),
    );

    let content = Column::new()
        .spacing(spacing::SM)
        .push(
            Container::new(preview)
                .width(Length::Fixed(sizing::CARD_WIDTH))
                .height(Length::Fixed(sizing::CARD_PREVIEW_HEIGHT))
                .clip(true),
        )
        .push(title_and_date(entry, typography::TITLE_SM, typography::BODY_SM));

    button(content)
        .width(Length::Fixed(sizing::CARD_WIDTH + 2.0 * spacing::XS))
        .padding(spacing::XS)
        .on_press(Message::CardPressed(index))
        .style(styles::button::card)
        .into()
}

fn title_and_date(entry: &MediaEntry, title_size: f32, date_size: f32) -> Column<'_, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(entry.title.as_str()).size(title_size))
        .push(Text::new(entry.date.as_str()).size(date_size))
}

/// Image from the preview cache, or a text placeholder while it loads or
/// after it failed. `alt` is shown for failures and blank URLs.
pub fn remote_image<'a, M: 'a>(
    i18n: &I18n,
    previews: &previews::Cache,
    url: &str,
    alt: String,
) -> Element<'a, M> {
    if !has_source(url) {
        return placeholder(Text::new(alt).size(typography::BODY).into());
    }
    match previews.get(url) {
        Some(Preview::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Preview::Failed) => placeholder(Text::new(alt).size(typography::BODY).into()),
        Some(Preview::Loading) | None => placeholder(
            Text::new(i18n.tr("gallery-preview-loading"))
                .size(typography::CAPTION)
                .into(),
        ),
    }
}

fn placeholder<'a, M: 'a>(content: Element<'a, M>) -> Element<'a, M> {
    center(content)
        .padding(spacing::SM)
        .style(styles::container::preview_placeholder)
        .into()
}

fn loading(i18n: &I18n, rotation: f32) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(AnimatedSpinner::new(palette::PRIMARY_500, rotation).into_element())
        .push(Text::new(i18n.tr("gallery-loading")).size(typography::BODY_LG));

    center(content).into()
}

fn error<'a>(message: String) -> Element<'a, Message> {
    center(
        container(Text::new(message).size(typography::BODY_LG))
            .padding(spacing::MD)
            .style(styles::container::error_message),
    )
    .into()
}

fn status_message<'a>(message: String) -> Element<'a, Message> {
    center(
        Text::new(message)
            .size(typography::BODY_LG)
            .color(palette::GRAY_400),
    )
    .into()
}
