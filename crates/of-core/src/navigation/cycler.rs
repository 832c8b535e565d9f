//! Circular index over a fixed, non-empty item list

use rand::Rng;
use tracing::debug;

use crate::error::NavigationError;

/// Tracks which item of a fixed list is active.
///
/// `next` and `previous` wrap around at both ends. `jump_to` is a direct
/// assignment and rejects indices outside `0..len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexCycler {
    len: usize,
    current: usize,
}

impl IndexCycler {
    /// Create a cycler over `len` items, starting at index 0
    pub fn new(len: usize) -> Result<Self, NavigationError> {
        if len == 0 {
            return Err(NavigationError::InvalidLength(len));
        }

        Ok(Self { len, current: 0 })
    }

    /// Number of items in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// Currently active index
    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance by one, wrapping from the last item to the first
    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    /// Step back by one, wrapping from the first item to the last
    pub fn previous(&mut self) -> usize {
        self.current = (self.current + self.len - 1) % self.len;
        self.current
    }

    /// Select `index` directly. No wraparound is applied.
    pub fn jump_to(&mut self, index: usize) -> Result<usize, NavigationError> {
        if index >= self.len {
            return Err(NavigationError::OutOfRange { index, len: self.len });
        }

        self.current = index;
        Ok(self.current)
    }

    /// Select a uniformly random index. The current index may be picked again.
    pub fn random_jump(&mut self) -> usize {
        self.random_jump_with(&mut rand::thread_rng())
    }

    /// Same as [`random_jump`](Self::random_jump) with a caller-supplied generator
    pub fn random_jump_with<R: Rng>(&mut self, rng: &mut R) -> usize {
        self.current = rng.gen_range(0..self.len);
        debug!(index = self.current, len = self.len, "random jump");
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_length_rejected() {
        assert_eq!(IndexCycler::new(0), Err(NavigationError::InvalidLength(0)));
    }

    #[test]
    fn test_starts_at_zero() {
        let cycler = IndexCycler::new(3).unwrap();
        assert_eq!(cycler.current(), 0);
        assert_eq!(cycler.len(), 3);
    }

    #[test]
    fn test_single_item_always_zero() {
        let mut cycler = IndexCycler::new(1).unwrap();
        assert_eq!(cycler.next(), 0);
        assert_eq!(cycler.previous(), 0);
        assert_eq!(cycler.jump_to(0), Ok(0));
    }

    #[test]
    fn test_wraparound_at_both_ends() {
        let mut cycler = IndexCycler::new(4).unwrap();
        assert_eq!(cycler.previous(), 3);
        assert_eq!(cycler.next(), 0);
    }

    #[test]
    fn test_current_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..=12 {
            let mut cycler = IndexCycler::new(len).unwrap();
            for _ in 0..200 {
                if rng.gen_bool(0.5) {
                    cycler.next();
                } else {
                    cycler.previous();
                }
                assert!(cycler.current() < len);
            }
        }
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for len in 1..=9 {
            for start in 0..len {
                let mut cycler = IndexCycler::new(len).unwrap();
                cycler.jump_to(start).unwrap();

                for _ in 0..len {
                    cycler.next();
                }
                assert_eq!(cycler.current(), start);

                for _ in 0..len {
                    cycler.previous();
                }
                assert_eq!(cycler.current(), start);
            }
        }
    }

    #[test]
    fn test_next_previous_are_inverse() {
        let len = 6;
        for start in 0..len {
            let mut cycler = IndexCycler::new(len).unwrap();
            cycler.jump_to(start).unwrap();

            cycler.next();
            cycler.previous();
            assert_eq!(cycler.current(), start);

            cycler.previous();
            cycler.next();
            assert_eq!(cycler.current(), start);
        }
    }

    #[test]
    fn test_jump_to_in_range() {
        let mut cycler = IndexCycler::new(5).unwrap();
        for k in 0..5 {
            assert_eq!(cycler.jump_to(k), Ok(k));
            assert_eq!(cycler.current(), k);
        }
        // Jumping to the current index is allowed
        assert_eq!(cycler.jump_to(4), Ok(4));
    }

    #[test]
    fn test_jump_to_out_of_range_leaves_state() {
        let mut cycler = IndexCycler::new(5).unwrap();
        cycler.jump_to(2).unwrap();

        assert_eq!(
            cycler.jump_to(5),
            Err(NavigationError::OutOfRange { index: 5, len: 5 })
        );
        assert!(cycler.jump_to(usize::MAX).is_err());
        assert_eq!(cycler.current(), 2);
    }

    #[test]
    fn test_random_jump_covers_all_indices() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut cycler = IndexCycler::new(5).unwrap();
        let mut counts = [0usize; 5];

        for _ in 0..1000 {
            let index = cycler.random_jump_with(&mut rng);
            assert!(index < 5);
            assert_eq!(cycler.current(), index);
            counts[index] += 1;
        }

        // Expected 200 per bucket; allow a wide statistical margin
        for count in counts {
            assert!((120..=280).contains(&count), "skewed distribution: {:?}", counts);
        }
    }

    #[test]
    fn test_random_jump_may_repeat_current() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut cycler = IndexCycler::new(2).unwrap();
        let mut repeated = false;

        for _ in 0..100 {
            let before = cycler.current();
            if cycler.random_jump_with(&mut rng) == before {
                repeated = true;
                break;
            }
        }
        assert!(repeated);
    }

    #[test]
    fn test_ten_item_boundary_walk() {
        let mut cycler = IndexCycler::new(10).unwrap();
        assert_eq!(cycler.previous(), 9);

        for expected in 0..9 {
            assert_eq!(cycler.next(), expected);
        }
        assert_eq!(cycler.current(), 8);

        assert_eq!(cycler.next(), 9);
        assert_eq!(cycler.next(), 0);
    }
}
