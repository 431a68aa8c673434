// SPDX-License-Identifier: MPL-2.0
//! Slide navigation state: current index plus the direction of the last step.
//!
//! The navigator is the single source of truth for which slide is active.
//! Both pagination (arrows, keyboard, swipe) and direct selection (thumbnail
//! click) go through it, so the `current index ∈ [0, len)` invariant holds
//! everywhere else in the application.

/// Direction of the last pagination step.
///
/// Only used to pick which transition variant plays; it never affects which
/// slide is logically active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// No pagination has happened yet (or the last change was a direct jump).
    #[default]
    Still,
    /// Last step advanced forward.
    Next,
    /// Last step went backward.
    Previous,
}

impl Direction {
    /// Sign of the step: +1 for next, -1 for previous, 0 when still.
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Still => 0,
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

/// Navigation state over a fixed-size slide deck with wraparound at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideNavigator {
    len: usize,
    current: usize,
    direction: Direction,
}

impl SlideNavigator {
    /// Creates a navigator over `len` slides, starting at index 0.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero; the deck is compiled in and never empty.
    #[must_use]
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "slide deck must not be empty");
        Self {
            len,
            current: 0,
            direction: Direction::Still,
        }
    }

    /// Advances one step in the given direction, wrapping at both ends.
    ///
    /// `Direction::Still` is a no-op; the two call sites (arrow controls and
    /// keyboard arrows) only ever pass `Next` or `Previous`.
    pub fn paginate(&mut self, direction: Direction) {
        match direction {
            Direction::Still => return,
            Direction::Next => {
                self.current = if self.current + 1 >= self.len {
                    0
                } else {
                    self.current + 1
                };
            }
            Direction::Previous => {
                self.current = if self.current == 0 {
                    self.len - 1
                } else {
                    self.current - 1
                };
            }
        }
        self.direction = direction;
    }

    /// Jumps directly to `index` (thumbnail click).
    ///
    /// The stored direction is intentionally left untouched: no direction is
    /// computed relative to the jump, so the next transition reuses whatever
    /// variant the last pagination chose. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    /// Index of the active slide, always in `[0, len)`.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Direction of the last pagination step.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of slides in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; kept for API symmetry with collection types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The wrapped index following the current one (preload target).
    #[must_use]
    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.len
    }

    /// The wrapped index preceding the current one.
    #[must_use]
    pub fn previous_index(&self) -> usize {
        if self.current == 0 {
            self.len - 1
        } else {
            self.current - 1
        }
    }

    /// Zero-padded position label, e.g. `"01 / 04"`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{:02} / {:02}", self.current + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_navigator_starts_at_zero_still() {
        let nav = SlideNavigator::new(4);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.direction(), Direction::Still);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn new_rejects_empty_deck() {
        let _ = SlideNavigator::new(0);
    }

    #[test]
    fn paginate_next_advances_and_records_direction() {
        let mut nav = SlideNavigator::new(4);
        nav.paginate(Direction::Next);
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.direction(), Direction::Next);
    }

    #[test]
    fn paginate_next_wraps_to_first() {
        let mut nav = SlideNavigator::new(4);
        nav.select(3);
        nav.paginate(Direction::Next);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn paginate_previous_wraps_to_last() {
        let mut nav = SlideNavigator::new(4);
        nav.paginate(Direction::Previous);
        assert_eq!(nav.current_index(), 3);
        assert_eq!(nav.direction(), Direction::Previous);
    }

    #[test]
    fn index_stays_in_range_under_arbitrary_sequences() {
        let mut nav = SlideNavigator::new(4);
        let steps = [
            Direction::Next,
            Direction::Next,
            Direction::Previous,
            Direction::Next,
            Direction::Next,
            Direction::Next,
            Direction::Previous,
            Direction::Previous,
            Direction::Previous,
            Direction::Next,
        ];
        for step in steps {
            nav.paginate(step);
            assert!(nav.current_index() < nav.len());
        }
    }

    #[test]
    fn four_slide_end_to_end_sequence() {
        let mut nav = SlideNavigator::new(4);
        let mut seen = Vec::new();
        for _ in 0..3 {
            nav.paginate(Direction::Next);
            seen.push(nav.current_index());
        }
        assert_eq!(seen, vec![1, 2, 3]);

        nav.paginate(Direction::Next);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn select_jumps_without_changing_direction() {
        let mut nav = SlideNavigator::new(4);
        nav.paginate(Direction::Next);
        nav.select(3);
        assert_eq!(nav.current_index(), 3);
        assert_eq!(nav.direction(), Direction::Next);
    }

    #[test]
    fn select_ignores_out_of_range_index() {
        let mut nav = SlideNavigator::new(4);
        nav.select(10);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn neighbor_indices_wrap() {
        let mut nav = SlideNavigator::new(4);
        assert_eq!(nav.next_index(), 1);
        assert_eq!(nav.previous_index(), 3);

        nav.select(3);
        assert_eq!(nav.next_index(), 0);
        assert_eq!(nav.previous_index(), 2);
    }

    #[test]
    fn position_label_is_zero_padded() {
        let mut nav = SlideNavigator::new(4);
        assert_eq!(nav.position_label(), "01 / 04");
        nav.select(3);
        assert_eq!(nav.position_label(), "04 / 04");
    }

    #[test]
    fn direction_signs() {
        assert_eq!(Direction::Next.sign(), 1);
        assert_eq!(Direction::Previous.sign(), -1);
        assert_eq!(Direction::Still.sign(), 0);
    }
}
