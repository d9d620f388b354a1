/// Current position within a deck of `last + 1` slides.
///
/// Invariant: `current <= last`. All moves either stay in range or are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    last: usize,
}

impl Navigator {
    /// `slide_count` of zero is treated as a single-slide deck.
    pub fn new(slide_count: usize) -> Self {
        Self {
            current: 0,
            last: slide_count.saturating_sub(1),
        }
    }

    /// Start somewhere other than the first slide. Out-of-range starts clamp.
    pub fn starting_at(slide_count: usize, start: usize) -> Self {
        let mut nav = Self::new(slide_count);
        nav.go_to(start);
        nav
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn last(&self) -> usize {
        self.last
    }

    pub fn slide_count(&self) -> usize {
        self.last + 1
    }

    pub fn can_go_prev(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current < self.last
    }

    /// Advance one slide. Returns true if the position changed.
    pub fn next(&mut self) -> bool {
        if self.can_go_next() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Step back one slide. Returns true if the position changed.
    pub fn prev(&mut self) -> bool {
        if self.can_go_prev() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump directly to `index`, clamped to the last slide.
    /// Returns true if the position changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        let target = index.min(self.last);
        let changed = target != self.current;
        self.current = target;
        changed
    }

    /// The slide after the current one, if there is one.
    pub fn next_index(&self) -> Option<usize> {
        self.can_go_next().then_some(self.current + 1)
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.current == index
    }

    /// 1-based position and total, e.g. (3, 5).
    pub fn position(&self) -> (usize, usize) {
        (self.current + 1, self.slide_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_stops_at_last_slide() {
        let mut nav = Navigator::new(5);
        for _ in 0..4 {
            assert!(nav.next());
        }
        assert_eq!(nav.current(), 4);
        assert!(!nav.next());
        assert_eq!(nav.current(), 4);
        assert!(!nav.can_go_next());
    }

    #[test]
    fn prev_is_a_no_op_on_first_slide() {
        let mut nav = Navigator::new(5);
        assert!(!nav.can_go_prev());
        assert!(!nav.prev());
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn mixed_moves_stay_in_bounds() {
        let mut nav = Navigator::new(5);
        // Pseudo-random walk biased to hit both ends repeatedly
        let pattern = [true, true, false, true, true, true, true, true, false, false, false, false, false, false, true];
        for forward in pattern.iter().cycle().take(200) {
            if *forward {
                nav.next();
            } else {
                nav.prev();
            }
            assert!(nav.current() <= nav.last());
        }
    }

    #[test]
    fn go_to_sets_valid_index_exactly() {
        let mut nav = Navigator::new(5);
        for i in [3, 0, 4, 2, 1] {
            nav.go_to(i);
            assert_eq!(nav.current(), i);
        }
    }

    #[test]
    fn go_to_clamps_out_of_range() {
        let mut nav = Navigator::new(5);
        assert!(nav.go_to(99));
        assert_eq!(nav.current(), 4);
        assert!(!nav.go_to(4));
    }

    #[test]
    fn next_index_is_none_on_last_slide() {
        let mut nav = Navigator::starting_at(3, 1);
        assert_eq!(nav.next_index(), Some(2));
        nav.next();
        assert_eq!(nav.next_index(), None);
        assert_eq!(nav.position(), (3, 3));
    }

    #[test]
    fn empty_deck_behaves_like_single_slide() {
        let mut nav = Navigator::new(0);
        assert_eq!(nav.slide_count(), 1);
        assert!(!nav.next());
        assert!(!nav.prev());
    }
}
