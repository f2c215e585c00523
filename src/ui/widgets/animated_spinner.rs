// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas.
//!
//! The widget is stateless: the caller owns the rotation angle and advances
//! it on every tick, so a fresh spinner is built on each `view`.

use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, path::Arc, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI};

const STROKE_WIDTH: f32 = 3.0;

/// Half-circle arc rotating over a faint track.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// `rotation` is in radians; zero puts the arc's leading edge at the top.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    fn arc(&self, frame: &Frame) -> Arc {
        let start = self.rotation - FRAC_PI_2;
        Arc {
            center: frame.center(),
            radius: track_radius(frame),
            start_angle: Radians(start),
            end_angle: Radians(start + PI),
        }
    }
}

fn track_radius(frame: &Frame) -> f32 {
    (frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH - 1.0).max(1.0)
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let track = Path::circle(frame.center(), track_radius(&frame));
        frame.stroke(
            &track,
            Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..self.color
            }),
        );

        let arc = Path::new(|builder| builder.arc(self.arc(&frame)));
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
