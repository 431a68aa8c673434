// SPDX-License-Identifier: MPL-2.0
//! Pixel-art star drawn on a small canvas.
//!
//! Idle it sits still; while the reveal animation plays it spins a full turn
//! and pulses, driven by the sequencer's progress in `[0, 1]`. Click handling
//! lives in the view (a `mouse_area` wraps the canvas), not here.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::f32::consts::TAU;

/// Cells of a 5x5 pixel grid forming an 8-bit sparkle, as (column, row)
/// offsets from the grid center.
const CELLS: [(i8, i8); 9] = [
    (0, 0),
    (0, -1),
    (0, -2),
    (0, 1),
    (0, 2),
    (-1, 0),
    (-2, 0),
    (1, 0),
    (2, 0),
];

pub struct PixelStar {
    progress: f32,
    cache: Cache,
}

impl PixelStar {
    /// Creates the star with the reveal animation progress in `[0, 1]`.
    /// Zero renders the resting star.
    #[must_use]
    pub fn new(progress: f32) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
            cache: Cache::default(),
        }
    }

    /// Wraps the star into a fixed-size canvas element.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::PIXEL_STAR))
            .height(Length::Fixed(sizing::PIXEL_STAR))
            .into()
    }
}

impl<Message> canvas::Program<Message> for PixelStar {
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
            let center = frame.center();
            let cell = frame.width().min(frame.height()) / 5.0;

            // One full turn over the animation, with a mid-animation pulse.
            let rotation = self.progress * TAU;
            let pulse = 1.0 + 0.25 * (self.progress * std::f32::consts::PI).sin();

            frame.translate(Vector::new(center.x, center.y));
            frame.rotate(rotation);
            frame.scale(pulse);

            for (col, row) in CELLS {
                let size = cell * 0.9;
                let top_left = Point::new(
                    f32::from(col) * cell - size / 2.0,
                    f32::from(row) * cell - size / 2.0,
                );
                frame.fill_rectangle(top_left, Size::new(size, size), color_for(self.progress));
            }
        });

        vec![geometry]
    }
}

/// White at rest, warming toward the accent color while animating.
fn color_for(progress: f32) -> Color {
    let accent = palette::ACCENT;
    let white = palette::WHITE;
    let t = (progress * std::f32::consts::PI).sin();
    Color::from_rgb(
        white.r + (accent.r - white.r) * t,
        white.g + (accent.g - white.g) * t,
        white.b + (accent.b - white.b) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn progress_is_clamped() {
        assert_abs_diff_eq!(PixelStar::new(-1.0).progress, 0.0);
        assert_abs_diff_eq!(PixelStar::new(2.0).progress, 1.0);
    }

    #[test]
    fn resting_and_finished_star_is_white() {
        let start = color_for(0.0);
        let end = color_for(1.0);
        assert_abs_diff_eq!(start.r, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(end.g, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn mid_animation_color_leans_toward_accent() {
        let mid = color_for(0.5);
        assert!(mid.b < 0.5, "accent has a low blue channel");
    }
}
