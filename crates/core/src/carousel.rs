//! Slide index arithmetic for the hero carousel.

/// Current slide of a carousel with a known number of slides.
///
/// The index always lies in `[0, len)`, or is `0` when there are no slides.
/// Every operation is a no-op on an empty carousel, so nothing here can
/// divide by zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    /// A carousel over `len` slides, starting at the first one.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    /// A carousel positioned at `index`, wrapped into range.
    #[must_use]
    pub const fn at(len: usize, index: usize) -> Self {
        let current = if len == 0 { 0 } else { index % len };
        Self { current, len }
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index that [`advance`](Self::advance) would move to.
    #[must_use]
    pub const fn next_index(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.current + 1) % self.len
        }
    }

    /// Index that [`retreat`](Self::retreat) would move to.
    #[must_use]
    pub const fn previous_index(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.current + self.len - 1) % self.len
        }
    }

    /// Move forward one slide, wrapping to the first.
    pub const fn advance(&mut self) {
        self.current = self.next_index();
    }

    /// Move back one slide, wrapping to the last.
    pub const fn retreat(&mut self) {
        self.current = self.previous_index();
    }

    /// Jump to a slide. Out-of-range indices are ignored.
    ///
    /// Returns whether the index was accepted.
    pub const fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Change the number of slides, keeping the index in range.
    pub const fn resize(&mut self, len: usize) {
        *self = Self::at(len, self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_n_times_is_n_mod_len() {
        for len in 1..=5 {
            let mut carousel = Carousel::new(len);
            for n in 1..=12 {
                carousel.advance();
                assert_eq!(carousel.current(), n % len, "len={len} n={n}");
            }
        }
    }

    #[test]
    fn test_empty_never_moves() {
        let mut carousel = Carousel::new(0);
        carousel.advance();
        carousel.retreat();
        assert!(!carousel.select(0));
        assert_eq!(carousel.current(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn test_retreat_wraps_to_last() {
        let mut carousel = Carousel::new(4);
        carousel.retreat();
        assert_eq!(carousel.current(), 3);
        carousel.retreat();
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.select(2));
        assert!(!carousel.select(3));
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_resize_keeps_index_in_range() {
        let mut carousel = Carousel::at(5, 4);
        carousel.resize(3);
        assert_eq!(carousel.current(), 1);
        carousel.resize(0);
        assert_eq!(carousel.current(), 0);
        carousel.resize(2);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_at_wraps() {
        assert_eq!(Carousel::at(3, 7).current(), 1);
        assert_eq!(Carousel::at(0, 7).current(), 0);
    }
}
