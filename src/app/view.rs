// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the page (header, date inputs, gallery, fact
//! box), the detail modal when open, and the toast overlay.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::{fact_box, gallery, modal, previews, query, styles};
use iced::widget::{button, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub query: &'a query::State,
    pub modal: &'a modal::State,
    pub previews: &'a previews::Cache,
    pub notifications: &'a notifications::Manager,
    pub fact: &'a str,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header(ctx.i18n))
        .push(controls(ctx.i18n, ctx.query))
        .push(
            Container::new(
                gallery::view(gallery::ViewContext {
                    i18n: ctx.i18n,
                    query: ctx.query,
                    previews: ctx.previews,
                })
                .map(Message::Gallery),
            )
            .width(Length::Fill)
            .height(Length::Fill),
        )
        .push(fact_box::view(fact_box::ViewContext {
            i18n: ctx.i18n,
            fact: ctx.fact,
        }));

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill).push(page);

    if let Some(overlay) = ctx.modal.view(modal::ViewContext {
        i18n: ctx.i18n,
        previews: ctx.previews,
    }) {
        layers = layers.push(overlay.map(Message::Modal));
    }

    if ctx.notifications.has_notifications() {
        layers = layers.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));
    }

    layers.into()
}

fn header(i18n: &I18n) -> Element<'_, Message> {
    Container::new(Text::new(i18n.tr("app-heading")).size(typography::TITLE_LG))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn controls<'a>(i18n: &'a I18n, query: &'a query::State) -> Element<'a, Message> {
    let placeholder = i18n.tr("query-date-placeholder");

    let date_field = |label_key: &str, value: &'a str, on_input: fn(String) -> query::Message| {
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr(label_key)).size(typography::BODY_SM))
            .push(
                text_input(&placeholder, value)
                    .on_input(move |input| Message::Query(on_input(input)))
                    .on_submit(Message::Query(query::Message::GetImages))
                    .width(Length::Fixed(sizing::INPUT_WIDTH))
                    .padding(spacing::XS),
            )
    };

    let trigger = button(Text::new(i18n.tr("query-get-images-button")).size(typography::BODY_LG))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::Query(query::Message::GetImages));

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Bottom)
        .push(date_field(
            "query-start-date-label",
            query.start_input(),
            query::Message::StartDateChanged,
        ))
        .push(date_field(
            "query-end-date-label",
            query.end_input(),
            query::Message::EndDateChanged,
        ))
        .push(trigger)
        .wrap()
        .into()
}
