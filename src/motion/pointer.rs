// SPDX-License-Identifier: MPL-2.0
//! Pointer tracking and the two effects derived from it.
//!
//! Every cursor-move event feeds the raw position in here. Two independent
//! values come out: the spring-smoothed follower position (lags the cursor for
//! a fluid feel) and a small parallax translation for the active slide image
//! (a direct linear map of the raw position, no smoothing).

use crate::motion::spring::{Spring, SpringParams};
use iced::{Point, Size, Vector};

/// Maximum parallax translation in either axis, in logical pixels.
pub const PARALLAX_RANGE: f32 = 15.0;

/// Tracks the raw cursor position and derives follower/parallax values.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    raw: Point,
    smoothed_x: Spring,
    smoothed_y: Spring,
    viewport: Size,
}

impl PointerTracker {
    /// Creates a tracker for the given viewport size. The springs start at
    /// the viewport center so the follower does not fly in from the origin.
    #[must_use]
    pub fn new(viewport: Size, params: SpringParams) -> Self {
        let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
        Self {
            raw: center,
            smoothed_x: Spring::new(center.x, params),
            smoothed_y: Spring::new(center.y, params),
            viewport,
        }
    }

    /// Records a raw cursor position and retargets the follower springs.
    pub fn record(&mut self, position: Point) {
        self.raw = position;
        self.smoothed_x.set_target(position.x);
        self.smoothed_y.set_target(position.y);
    }

    /// Advances the follower springs by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.smoothed_x.step(dt);
        self.smoothed_y.step(dt);
    }

    /// Updates the viewport bounds after a window resize.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Last raw cursor position.
    #[must_use]
    pub fn raw(&self) -> Point {
        self.raw
    }

    /// Spring-smoothed follower position.
    #[must_use]
    pub fn smoothed(&self) -> Point {
        Point::new(self.smoothed_x.value(), self.smoothed_y.value())
    }

    /// Parallax translation for the active slide image.
    ///
    /// Maps the raw position across the viewport linearly into
    /// `[-PARALLAX_RANGE, +PARALLAX_RANGE]` on each axis. A degenerate
    /// viewport falls back to a 1px extent so the math stays finite.
    #[must_use]
    pub fn parallax(&self) -> Vector {
        let width = self.viewport.width.max(1.0);
        let height = self.viewport.height.max(1.0);
        let map = |value: f32, extent: f32| {
            let normalized = (value / extent).clamp(0.0, 1.0);
            (normalized * 2.0 - 1.0) * PARALLAX_RANGE
        };
        Vector::new(map(self.raw.x, width), map(self.raw.y, height))
    }

    /// Whether both follower springs are at rest.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.smoothed_x.is_settled() && self.smoothed_y.is_settled()
    }
}
