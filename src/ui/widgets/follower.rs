// SPDX-License-Identifier: MPL-2.0
//! Spring-damped cursor follower dot.
//!
//! Drawn on a full-window canvas above the slide stage. The position comes
//! from the smoothed pointer springs, so the dot trails the raw cursor and
//! eases to a stop when the pointer rests.

use crate::ui::design_tokens::{opacity, palette, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};

pub struct FollowerDot {
    position: Point,
    cache: Cache,
}

impl FollowerDot {
    /// Creates the dot at the smoothed pointer position.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            cache: Cache::default(),
        }
    }

    /// Wraps the dot into a full-window canvas element. The canvas never
    /// handles events, so clicks pass through to the widgets beneath it.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for FollowerDot {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame: &mut Frame| {
            let radius = sizing::FOLLOWER_DIAMETER / 2.0;
            let circle = Path::circle(self.position, radius);

            frame.fill(
                &circle,
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::WHITE
                },
            );
            frame.stroke(
                &circle,
                Stroke::default().with_width(1.5).with_color(Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..palette::WHITE
                }),
            );
        });

        vec![geometry]
    }
}
