// SPDX-License-Identifier: MPL-2.0
//! Damped spring filter used for the cursor follower and slide motion.
//!
//! The integrator is semi-implicit Euler over a unit mass, which is stable at
//! UI frame rates for the stiffness/damping ranges the config allows. When the
//! spring gets close enough to its target it snaps exactly, so downstream code
//! can gate animation ticks on [`Spring::is_settled`].

/// Stiffness/damping pair for the spring filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: crate::config::DEFAULT_TRANSITION_STIFFNESS,
            damping: crate::config::DEFAULT_TRANSITION_DAMPING,
        }
    }
}

/// Position tolerance below which the spring is considered settled.
const SETTLE_DISTANCE: f32 = 0.05;
/// Velocity tolerance below which the spring is considered settled.
const SETTLE_VELOCITY: f32 = 0.05;
/// Integration steps larger than this are subdivided to keep Euler stable
/// after a stalled frame.
const MAX_STEP_SECS: f32 = 1.0 / 60.0;

/// A one-dimensional damped spring tracking a moving target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    params: SpringParams,
}

impl Spring {
    /// Creates a spring at rest at `value`.
    #[must_use]
    pub fn new(value: f32, params: SpringParams) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            params,
        }
    }

    /// Sets a new target; the spring keeps its current position and velocity.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Moves the spring instantly to `value` and stops it there.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advances the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 || self.is_settled() {
            return;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let displacement = self.value - self.target;
            let acceleration =
                -self.params.stiffness * displacement - self.params.damping * self.velocity;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.value - self.target).abs() < SETTLE_DISTANCE
            && self.velocity.abs() < SETTLE_VELOCITY
        {
            self.snap_to(self.target);
        }
    }

    /// Current filtered value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current target.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the spring has come to rest at its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }
}
