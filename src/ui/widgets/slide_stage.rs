// SPDX-License-Identifier: MPL-2.0
//! Full-window canvas that composites the slide layers.
//!
//! During a transition two layers are drawn (outgoing below, entering above),
//! each with its own horizontal offset, opacity, and scale. Outside a
//! transition a single centered layer is drawn. All layers share the pointer
//! parallax shift; images are cover-fitted with a slight base zoom so the
//! parallax never exposes the backdrop at the edges.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::canvas::{self, gradient, Cache, Canvas, Frame, Geometry, Image, Path};
use iced::widget::image;
use iced::{mouse, Length, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Extra zoom applied on top of cover-fit; headroom for the parallax shift.
const BASE_ZOOM: f32 = 1.1;

/// One slide image plus its animation parameters for the current frame.
#[derive(Debug, Clone)]
pub struct SlideLayer {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    pub offset_x: f32,
    pub opacity: f32,
    pub scale: f32,
}

/// Canvas program compositing up to two slide layers over the backdrop.
pub struct SlideStage {
    current: Option<SlideLayer>,
    outgoing: Option<SlideLayer>,
    parallax: Vector,
    cache: Cache,
}

impl SlideStage {
    /// Creates a stage for the given layers and parallax shift. `outgoing` is
    /// only present mid-transition.
    #[must_use]
    pub fn new(current: Option<SlideLayer>, outgoing: Option<SlideLayer>, parallax: Vector) -> Self {
        Self {
            current,
            outgoing,
            parallax,
            cache: Cache::default(),
        }
    }

    /// Wraps the stage into a full-window canvas element.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn draw_layer(&self, frame: &mut Frame, layer: &SlideLayer) {
        if layer.opacity <= 0.0 {
            return;
        }
        let dest = layer_rect(frame.size(), layer, self.parallax);
        frame.draw_image(dest, Image::new(layer.handle.clone()).opacity(layer.opacity));
    }
}

/// Destination rectangle for a layer: cover-fit to the frame, scaled by the
/// base zoom and the layer's own scale, centered, then shifted by the layer
/// offset and the shared parallax.
#[must_use]
pub fn layer_rect(frame: Size, layer: &SlideLayer, parallax: Vector) -> Rectangle {
    let image_w = layer.width.max(1) as f32;
    let image_h = layer.height.max(1) as f32;
    let cover = (frame.width / image_w).max(frame.height / image_h);
    let zoom = cover * BASE_ZOOM * layer.scale;

    let width = image_w * zoom;
    let height = image_h * zoom;
    let x = (frame.width - width) / 2.0 + layer.offset_x + parallax.x;
    let y = (frame.height - height) / 2.0 + parallax.y;

    Rectangle::new(Point::new(x, y), Size::new(width, height))
}

impl<Message> canvas::Program<Message> for SlideStage {
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
            let backdrop = Path::rectangle(Point::ORIGIN, frame.size());
            frame.fill(&backdrop, palette::BACKDROP);

            if let Some(outgoing) = &self.outgoing {
                self.draw_layer(frame, outgoing);
            }
            if let Some(current) = &self.current {
                self.draw_layer(frame, current);
            }

            // Bottom vignette keeps the chrome legible over bright slides.
            let fade_top = frame.height() * 0.7;
            let vignette = gradient::Linear::new(
                Point::new(0.0, fade_top),
                Point::new(0.0, frame.height()),
            )
            .add_stop(0.0, iced::Color::TRANSPARENT)
            .add_stop(
                1.0,
                iced::Color {
                    a: opacity::OVERLAY_STRONG,
                    ..palette::BLACK
                },
            );
            let bottom = Path::rectangle(
                Point::new(0.0, fade_top),
                Size::new(frame.width(), frame.height() - fade_top),
            );
            frame.fill(&bottom, vignette);
        });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn layer(width: u32, height: u32) -> SlideLayer {
        SlideLayer {
            handle: image::Handle::from_rgba(width, height, vec![0u8; (width * height * 4) as usize]),
            width,
            height,
            offset_x: 0.0,
            opacity: 1.0,
            scale: 1.0,
        }
    }

    #[test]
    fn wide_image_covers_a_tall_frame() {
        let frame = Size::new(400.0, 800.0);
        let rect = layer_rect(frame, &layer(1600, 800), Vector::ZERO);

        // Height drives the cover scale; with the base zoom both axes overflow.
        assert!(rect.width >= frame.width);
        assert!(rect.height >= frame.height);
        assert_abs_diff_eq!(rect.height, 800.0 * BASE_ZOOM);
    }

    #[test]
    fn layer_is_centered_without_offsets() {
        let frame = Size::new(1000.0, 500.0);
        let rect = layer_rect(frame, &layer(1000, 500), Vector::ZERO);

        assert_abs_diff_eq!(rect.x + rect.width / 2.0, 500.0, epsilon = 0.01);
        assert_abs_diff_eq!(rect.y + rect.height / 2.0, 250.0, epsilon = 0.01);
    }

    #[test]
    fn offset_and_parallax_shift_the_layer() {
        let frame = Size::new(1000.0, 500.0);
        let mut with_offset = layer(1000, 500);
        with_offset.offset_x = 200.0;

        let base = layer_rect(frame, &layer(1000, 500), Vector::ZERO);
        let shifted = layer_rect(frame, &with_offset, Vector::new(-15.0, 10.0));

        assert_abs_diff_eq!(shifted.x, base.x + 200.0 - 15.0);
        assert_abs_diff_eq!(shifted.y, base.y + 10.0);
    }

    #[test]
    fn scale_shrinks_around_the_center() {
        let frame = Size::new(1000.0, 500.0);
        let mut small = layer(1000, 500);
        small.scale = 0.9;

        let base = layer_rect(frame, &layer(1000, 500), Vector::ZERO);
        let scaled = layer_rect(frame, &small, Vector::ZERO);

        assert!(scaled.width < base.width);
        assert_abs_diff_eq!(
            scaled.x + scaled.width / 2.0,
            base.x + base.width / 2.0,
            epsilon = 0.01
        );
    }

    #[test]
    fn degenerate_image_dimensions_do_not_divide_by_zero() {
        let frame = Size::new(1000.0, 500.0);
        let rect = layer_rect(frame, &layer(0, 0), Vector::ZERO);
        assert!(rect.width.is_finite());
        assert!(rect.height.is_finite());
    }
}
