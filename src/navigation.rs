//! Navigation controller: the single cursor over the deck.
//!
//! Pure state, no effects. Every request is clamped into range; nothing
//! here can fail after construction.

use crate::error::DeckError;

/// Signed record of the most recent move.
///
/// Drives only the slide-in transition and the status glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    /// `-1`, `0` or `+1`.
    pub fn signum(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }

    fn of(delta: isize) -> Self {
        match delta.signum() {
            -1 => Direction::Backward,
            1 => Direction::Forward,
            _ => Direction::Still,
        }
    }
}

/// Current index and last move direction over a deck of fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    direction: Direction,
    slide_count: usize,
}

impl Navigator {
    /// A cursor at the first slide. A deck of zero slides cannot be navigated.
    pub fn new(slide_count: usize) -> Result<Self, DeckError> {
        if slide_count == 0 {
            return Err(DeckError::Empty);
        }
        Ok(Navigator {
            current: 0,
            direction: Direction::Still,
            slide_count,
        })
    }

    /// A cursor at `index`, clamped into range.
    pub fn starting_at(slide_count: usize, index: usize) -> Result<Self, DeckError> {
        let mut nav = Navigator::new(slide_count)?;
        nav.current = index.min(slide_count - 1);
        Ok(nav)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Move by `delta` slides without wrapping.
    ///
    /// The direction records the request even when the cursor is pinned at
    /// a boundary and does not move.
    pub fn advance(&mut self, delta: isize) -> Self {
        let last = (self.slide_count - 1) as isize;
        let proposed = (self.current as isize).saturating_add(delta);
        self.current = proposed.clamp(0, last) as usize;
        self.direction = Direction::of(delta);
        *self
    }

    pub fn next(&mut self) -> Self {
        self.advance(1)
    }

    pub fn previous(&mut self) -> Self {
        self.advance(-1)
    }

    /// Jump to `index`, clamped into range. Direction follows the jump.
    pub fn go_to(&mut self, index: usize) -> Self {
        let target = index.min(self.slide_count - 1);
        self.direction = Direction::of(target as isize - self.current as isize);
        self.current = target;
        *self
    }

    pub fn first(&mut self) -> Self {
        self.go_to(0)
    }

    pub fn last(&mut self) -> Self {
        self.go_to(self.slide_count - 1)
    }

    pub fn at_start(&self) -> bool {
        self.current == 0
    }

    pub fn at_end(&self) -> bool {
        self.current == self.slide_count - 1
    }

    /// Fraction of the deck reached, in `(0, 1]`.
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.slide_count as f64
    }

    /// One-based position, e.g. `"03 / 16"`.
    pub fn position_label(&self) -> String {
        format!("{:02} / {:02}", self.current + 1, self.slide_count)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_deck_cannot_be_navigated() {
        assert!(Navigator::new(0).is_err());
    }

    #[test]
    fn three_slide_walkthrough() {
        let mut nav = Navigator::new(3).unwrap();
        assert_eq!(nav.current(), 0);

        nav.advance(1);
        assert_eq!((nav.current(), nav.direction()), (1, Direction::Forward));

        nav.advance(1);
        assert_eq!((nav.current(), nav.direction()), (2, Direction::Forward));

        nav.advance(1);
        assert_eq!((nav.current(), nav.direction()), (2, Direction::Forward));
        assert!(nav.at_end());

        nav.advance(-1);
        assert_eq!((nav.current(), nav.direction()), (1, Direction::Backward));
    }

    #[test]
    fn repeated_next_stops_at_last_slide() {
        let count = 7;
        let mut nav = Navigator::new(count).unwrap();
        for _ in 0..count {
            nav.next();
        }
        assert_eq!(nav.current(), count - 1);

        let pinned = nav;
        nav.next();
        assert_eq!(nav.current(), pinned.current());
    }

    #[test]
    fn previous_at_start_is_a_noop_but_records_direction() {
        let mut nav = Navigator::new(4).unwrap();
        let state = nav.previous();
        assert_eq!(state.current(), 0);
        assert_eq!(state.direction(), Direction::Backward);
    }

    #[test]
    fn boundary_predicates_hold_only_at_the_ends() {
        let count = 5;
        let mut nav = Navigator::new(count).unwrap();
        for index in 0..count {
            nav.go_to(index);
            assert_eq!(nav.at_start(), index == 0);
            assert_eq!(nav.at_end(), index == count - 1);
        }
    }

    #[test]
    fn single_slide_deck_is_both_start_and_end() {
        let mut nav = Navigator::new(1).unwrap();
        assert!(nav.at_start() && nav.at_end());
        nav.next();
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn every_step_stays_in_bounds() {
        let count = 4;
        let mut nav = Navigator::new(count).unwrap();
        // Deterministic pseudo-random walk with oversized jumps.
        let deltas = [1, 1, -3, 5, 1, -1, -1, -9, 2, 2, 2, 2, -2, 7, -7];
        for delta in deltas {
            nav.advance(delta);
            assert!(nav.current() < count, "escaped after delta {}", delta);
        }
    }

    #[test]
    fn steps_apply_one_at_a_time() {
        // +1 +1 +1 -1 from 0 in a 3-deck ends at 1, not at clamp(0+2) = 2.
        let mut nav = Navigator::new(3).unwrap();
        for delta in [1, 1, 1, -1] {
            nav.advance(delta);
        }
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn go_to_clamps_out_of_range_index() {
        let mut nav = Navigator::new(3).unwrap();
        nav.go_to(99);
        assert_eq!(nav.current(), 2);
        assert_eq!(nav.direction(), Direction::Forward);
    }

    #[test]
    fn go_to_same_index_is_still() {
        let mut nav = Navigator::new(3).unwrap();
        nav.go_to(0);
        assert_eq!(nav.direction(), Direction::Still);
    }

    #[test]
    fn first_and_last_jump_to_the_ends() {
        let mut nav = Navigator::starting_at(10, 4).unwrap();
        assert_eq!(nav.last().current(), 9);
        assert_eq!(nav.first().current(), 0);
        assert_eq!(nav.direction(), Direction::Backward);
    }

    #[test]
    fn starting_index_is_clamped() {
        let nav = Navigator::starting_at(3, 10).unwrap();
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn progress_reaches_one_on_last_slide() {
        let mut nav = Navigator::new(4).unwrap();
        assert!((nav.progress() - 0.25).abs() < f64::EPSILON);
        nav.last();
        assert!((nav.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn position_label_is_one_based_and_padded() {
        let mut nav = Navigator::new(16).unwrap();
        nav.advance(2);
        assert_eq!(nav.position_label(), "03 / 16");
    }

    #[test]
    fn extreme_deltas_clamp_to_the_ends() {
        let mut nav = Navigator::new(3).unwrap();
        nav.advance(1);
        nav.advance(isize::MAX);
        assert_eq!(nav.current(), 2);
        assert_eq!(nav.direction(), Direction::Forward);

        nav.advance(isize::MIN);
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.direction(), Direction::Backward);

        nav.advance(isize::MIN);
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn direction_signum_matches_variant() {
        assert_eq!(Direction::Backward.signum(), -1);
        assert_eq!(Direction::Still.signum(), 0);
        assert_eq!(Direction::Forward.signum(), 1);
    }
}
