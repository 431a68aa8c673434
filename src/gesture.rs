// SPDX-License-Identifier: MPL-2.0
//! Horizontal drag tracking and the swipe-to-navigate decision.
//!
//! A drag begins when the pointer is pressed over the slide stage and ends on
//! release. The release decision is a single threshold comparison on the
//! "swipe power" — the product of the drag offset magnitude and the release
//! velocity — with the sign picking the pagination direction. Below the
//! threshold nothing navigates and the slide springs back to center.

use iced::Point;
use std::time::Instant;

/// What a drag release asks the navigator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
    /// Below threshold: snap back, no navigation.
    None,
    /// Strong leftward swipe: advance to the next slide.
    Forward,
    /// Strong rightward swipe: go back to the previous slide.
    Backward,
}

/// Gesture-strength signal: `|offset| × velocity`. Keeps the velocity's sign,
/// so a leftward fling yields a negative power.
#[must_use]
pub fn swipe_power(offset: f32, velocity: f32) -> f32 {
    offset.abs() * velocity
}

/// Maps a release (offset, velocity) pair to a navigation decision.
#[must_use]
pub fn decide(offset: f32, velocity: f32, threshold: f32) -> SwipeDecision {
    let power = swipe_power(offset, velocity);
    if power < -threshold {
        SwipeDecision::Forward
    } else if power > threshold {
        SwipeDecision::Backward
    } else {
        SwipeDecision::None
    }
}

/// Smoothing factor for the velocity estimate; favors the newest sample while
/// filtering single-event jitter.
const VELOCITY_BLEND: f32 = 0.8;

/// Tracks one horizontal drag from press to release.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    active: bool,
    origin_x: f32,
    current_x: f32,
    last_sample: Option<(f32, Instant)>,
    velocity_x: f32,
}

impl DragState {
    /// Starts a drag at the given pointer position.
    pub fn start(&mut self, position: Point, now: Instant) {
        self.active = true;
        self.origin_x = position.x;
        self.current_x = position.x;
        self.last_sample = Some((position.x, now));
        self.velocity_x = 0.0;
    }

    /// Records a pointer move while dragging; updates the velocity estimate.
    pub fn update(&mut self, position: Point, now: Instant) {
        if !self.active {
            return;
        }
        if let Some((last_x, last_at)) = self.last_sample {
            let dt = now.duration_since(last_at).as_secs_f32();
            if dt > 0.0 {
                let instantaneous = (position.x - last_x) / dt;
                self.velocity_x = if self.velocity_x == 0.0 {
                    instantaneous
                } else {
                    VELOCITY_BLEND * instantaneous + (1.0 - VELOCITY_BLEND) * self.velocity_x
                };
            }
        }
        self.current_x = position.x;
        self.last_sample = Some((position.x, now));
    }

    /// Ends the drag and returns the navigation decision.
    pub fn release(&mut self, threshold: f32) -> SwipeDecision {
        if !self.active {
            return SwipeDecision::None;
        }
        let decision = decide(self.offset_x(), self.velocity_x, threshold);
        self.active = false;
        self.last_sample = None;
        self.velocity_x = 0.0;
        decision
    }

    /// Whether a drag is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active
    }

    /// Horizontal displacement since the drag started; zero when inactive.
    #[must_use]
    pub fn offset_x(&self) -> f32 {
        if self.active {
            self.current_x - self.origin_x
        } else {
            0.0
        }
    }

    /// Current velocity estimate in pixels per second.
    #[must_use]
    pub fn velocity_x(&self) -> f32 {
        self.velocity_x
    }
}
