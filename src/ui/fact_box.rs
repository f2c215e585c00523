// SPDX-License-Identifier: MPL-2.0
//! "Did You Know?" box shown under the gallery.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Row, Text};
use iced::{alignment, font, Element, Font, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub fact: &'a str,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("fact-box-label"))
        .size(typography::BODY_LG)
        .color(palette::ACCENT_500)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        });

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(label)
        .push(Text::new(ctx.fact).size(typography::BODY_LG));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::fact_box)
        .into()
}
