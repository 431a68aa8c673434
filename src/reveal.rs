// SPDX-License-Identifier: MPL-2.0
//! One-shot reveal sequencer for the social links panel.
//!
//! Clicking the decorative star starts a timed icon animation; when the delay
//! elapses the panel becomes permanently visible. The sequence is one-way and
//! never resets. The timer is poll-driven from the application tick rather
//! than a detached callback, so nothing can fire after teardown.

use std::time::{Duration, Instant};

/// Stagger between successive link fade-ins once revealed.
const LINK_STAGGER: Duration = Duration::from_millis(100);
/// Duration of each link's fade-in.
const LINK_FADE: Duration = Duration::from_millis(300);

/// Stage of the reveal sequence. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealStage {
    /// Nothing has been triggered yet.
    #[default]
    Idle,
    /// The star animation is playing; the panel is still hidden.
    Animating,
    /// Terminal: the panel is visible forever.
    Revealed,
}

/// Drives the Idle → Animating → Revealed sequence.
#[derive(Debug, Clone)]
pub struct RevealSequencer {
    stage: RevealStage,
    delay: Duration,
    animating_since: Option<Instant>,
    revealed_at: Option<Instant>,
}

impl RevealSequencer {
    /// Creates a sequencer with the given animation delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            stage: RevealStage::Idle,
            delay,
            animating_since: None,
            revealed_at: None,
        }
    }

    /// Handles a star click. Only the first trigger has any effect; repeated
    /// clicks while Animating (or after Revealed) are ignored, so the trigger
    /// is idempotent and timers cannot stack.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.stage != RevealStage::Idle {
            return false;
        }
        self.stage = RevealStage::Animating;
        self.animating_since = Some(now);
        true
    }

    /// Advances the sequence; called from the application tick. Returns true
    /// on the single Animating → Revealed transition.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.stage != RevealStage::Animating {
            return false;
        }
        let Some(since) = self.animating_since else {
            return false;
        };
        if now.duration_since(since) >= self.delay {
            self.stage = RevealStage::Revealed;
            self.animating_since = None;
            self.revealed_at = Some(now);
            true
        } else {
            false
        }
    }

    /// Current stage.
    #[must_use]
    pub fn stage(&self) -> RevealStage {
        self.stage
    }

    /// Whether the star animation is playing.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.stage == RevealStage::Animating
    }

    /// Whether the panel is (permanently) visible.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.stage == RevealStage::Revealed
    }

    /// Progress of the star animation in `[0, 1]`; zero outside Animating.
    #[must_use]
    pub fn animation_progress(&self, now: Instant) -> f32 {
        match (self.stage, self.animating_since) {
            (RevealStage::Animating, Some(since)) => {
                let elapsed = now.duration_since(since).as_secs_f32();
                (elapsed / self.delay.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Opacity of the link at `index` in the revealed panel, honoring the
    /// staggered fade-in. Zero until Revealed; 1.0 once each fade finishes.
    #[must_use]
    pub fn link_opacity(&self, index: usize, now: Instant) -> f32 {
        let Some(revealed_at) = self.revealed_at else {
            return 0.0;
        };
        let start = revealed_at + LINK_STAGGER * index as u32;
        if now < start {
            return 0.0;
        }
        let elapsed = now.duration_since(start).as_secs_f32();
        (elapsed / LINK_FADE.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether the staggered link fade-ins are still running.
    #[must_use]
    pub fn links_fading(&self, link_count: usize, now: Instant) -> bool {
        if link_count == 0 {
            return false;
        }
        self.revealed_at
            .is_some_and(|_| self.link_opacity(link_count - 1, now) < 1.0)
    }
}

impl Default for RevealSequencer {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_REVEAL_DELAY_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1000);

    #[test]
    fn starts_idle() {
        let seq = RevealSequencer::new(DELAY);
        assert_eq!(seq.stage(), RevealStage::Idle);
        assert!(!seq.is_animating());
        assert!(!seq.is_revealed());
    }

    #[test]
    fn trigger_enters_animating_immediately() {
        let mut seq = RevealSequencer::new(DELAY);
        let now = Instant::now();
        assert!(seq.trigger(now));
        assert!(seq.is_animating());
    }

    #[test]
    fn poll_before_delay_does_nothing() {
        let mut seq = RevealSequencer::new(DELAY);
        let now = Instant::now();
        seq.trigger(now);
        assert!(!seq.poll(now + Duration::from_millis(500)));
        assert!(seq.is_animating());
    }

    #[test]
    fn poll_after_delay_reveals_exactly_once() {
        let mut seq = RevealSequencer::new(DELAY);
        let now = Instant::now();
        seq.trigger(now);

        assert!(seq.poll(now + DELAY));
        assert!(seq.is_revealed());

        // Subsequent polls must not report a second transition.
        assert!(!seq.poll(now + DELAY * 2));
        assert!(seq.is_revealed());
    }

    #[test]
    fn repeated_triggers_while_animating_are_ignored() {
        let mut seq = RevealSequencer::new(DELAY);
        let now = Instant::now();
        assert!(seq.trigger(now));
        assert!(!seq.trigger(now + Duration::from_millis(200)));
        assert!(!seq.trigger(now + Duration::from_millis(900)));

        // The delay still counts from the first trigger.
        assert!(seq.poll(now + DELAY));
        assert!(seq.is_revealed());
    }

    #[test]
    fn trigger_after_revealed_is_ignored() {
        let mut seq = RevealSequencer::new(DELAY);
        let now = Instant::now();
        seq.trigger(now);
        seq.poll(now + DELAY);
        assert!(!seq.trigger(now + DELAY * 2));
        assert!(seq.is_revealed());
    }

    #[test]
    fn animation_progress_ramps_and_clamps() {
        let mut seq = RevealSequencer::new(DELAY);
        let now = Instant::now();
        assert_eq!(seq.animation_progress(now), 0.0);

        seq.trigger(now);
        let halfway = seq.animation_progress(now + Duration::from_millis(500));
        assert!((halfway - 0.5).abs() < 0.01);
        assert_eq!(seq.animation_progress(now + DELAY * 3), 1.0);
    }

    #[test]
    fn link_opacity_staggers_per_index() {
        let mut seq = RevealSequencer::new(DELAY);
        let now = Instant::now();
        seq.trigger(now);
        seq.poll(now + DELAY);
        let revealed = now + DELAY;

        // Second link has not started fading when the first one has.
        let early = revealed + Duration::from_millis(50);
        assert!(seq.link_opacity(0, early) > 0.0);
        assert_eq!(seq.link_opacity(1, early), 0.0);

        // Both fully visible after the fades complete.
        let late = revealed + Duration::from_millis(1000);
        assert_eq!(seq.link_opacity(0, late), 1.0);
        assert_eq!(seq.link_opacity(1, late), 1.0);
        assert!(!seq.links_fading(2, late));
    }

    #[test]
    fn links_hidden_before_reveal() {
        let seq = RevealSequencer::new(DELAY);
        assert_eq!(seq.link_opacity(0, Instant::now()), 0.0);
    }
}
