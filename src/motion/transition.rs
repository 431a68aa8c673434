// SPDX-License-Identifier: MPL-2.0
//! Per-pagination slide transition.
//!
//! Each index change spawns one `SlideTransition`: the entering slide starts
//! off-screen (±1000 units, sign chosen by the pagination direction) at low
//! opacity and slight scale-down, and spring-converges to centered; the
//! outgoing slide exits toward the opposite offset while fading out. Only one
//! slide is ever "centered"; once the transition completes the outgoing layer
//! is dropped and no longer drawn.

use crate::motion::spring::{Spring, SpringParams};
use crate::navigation::Direction;

/// Horizontal offset the entering slide starts from (and the exiting slide
/// converges to, with opposite sign), in logical units.
pub const ENTER_OFFSET: f32 = 1000.0;

/// Duration of the opacity and scale ramps.
pub const FADE_SECS: f32 = 0.4;

const ENTER_SCALE: f32 = 0.9;
const ENTER_OPACITY: f32 = 0.0;

/// Animated hand-off between the outgoing and the entering slide.
#[derive(Debug, Clone)]
pub struct SlideTransition {
    from: usize,
    to: usize,
    entering_x: Spring,
    exiting_x: Spring,
    elapsed: f32,
}

impl SlideTransition {
    /// Starts a transition from slide `from` to slide `to`.
    ///
    /// `Direction::Next` brings the new slide in from the right (+1000) and
    /// pushes the old one out to the left; `Direction::Previous` mirrors that.
    /// A direct jump (`Direction::Still`, sign 0) enters from the left like
    /// `Previous` but exits to the left like `Next`.
    #[must_use]
    pub fn start(from: usize, to: usize, direction: Direction, params: SpringParams) -> Self {
        let enter_from = if direction.sign() > 0 {
            ENTER_OFFSET
        } else {
            -ENTER_OFFSET
        };
        let exit_to = if direction.sign() < 0 {
            ENTER_OFFSET
        } else {
            -ENTER_OFFSET
        };

        let mut entering_x = Spring::new(enter_from, params);
        entering_x.set_target(0.0);
        let mut exiting_x = Spring::new(0.0, params);
        exiting_x.set_target(exit_to);

        Self {
            from,
            to,
            entering_x,
            exiting_x,
            elapsed: 0.0,
        }
    }

    /// Advances the transition by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.entering_x.step(dt);
        self.exiting_x.step(dt);
        self.elapsed += dt.max(0.0);
    }

    /// Index of the outgoing slide.
    #[must_use]
    pub fn from(&self) -> usize {
        self.from
    }

    /// Index of the entering slide.
    #[must_use]
    pub fn to(&self) -> usize {
        self.to
    }

    fn fade_progress(&self) -> f32 {
        (self.elapsed / FADE_SECS).clamp(0.0, 1.0)
    }

    /// Horizontal offset of the entering slide.
    #[must_use]
    pub fn entering_offset(&self) -> f32 {
        self.entering_x.value()
    }

    /// Horizontal offset of the outgoing slide.
    #[must_use]
    pub fn exiting_offset(&self) -> f32 {
        self.exiting_x.value()
    }

    /// Opacity of the entering slide, ramping 0 → 1.
    #[must_use]
    pub fn entering_opacity(&self) -> f32 {
        ENTER_OPACITY + (1.0 - ENTER_OPACITY) * self.fade_progress()
    }

    /// Opacity of the outgoing slide, ramping 1 → 0.
    #[must_use]
    pub fn exiting_opacity(&self) -> f32 {
        1.0 - self.fade_progress()
    }

    /// Scale of the entering slide, ramping 0.9 → 1.
    #[must_use]
    pub fn entering_scale(&self) -> f32 {
        ENTER_SCALE + (1.0 - ENTER_SCALE) * self.fade_progress()
    }

    /// Scale of the outgoing slide, ramping 1 → 0.9.
    #[must_use]
    pub fn exiting_scale(&self) -> f32 {
        1.0 - (1.0 - ENTER_SCALE) * self.fade_progress()
    }

    /// Whether both springs have settled and the fade window has elapsed.
    /// Once true the owner drops the transition, unmounting the outgoing
    /// slide layer.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entering_x.is_settled() && self.exiting_x.is_settled() && self.elapsed >= FADE_SECS
    }
}
