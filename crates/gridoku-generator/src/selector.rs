//! Strategies for choosing which cells of a solution stay visible.

use std::collections::HashSet;

use gridoku_core::{Position, validator::GivenCountValidator};
use rand::{Rng as _, RngCore};

/// Chooses the set of positions that remain as given clues when a full
/// solution is masked into a puzzle.
///
/// Implementations draw randomness from the injected `rng` only, so a
/// seeded generator run stays reproducible.
pub trait GivenSelector {
    /// Selects the given positions for a grid of `size`.
    fn select(&self, size: u8, rng: &mut dyn RngCore) -> HashSet<Position>;
}

/// Uniform random selection with a size-scaled clue count.
///
/// The clue count starts from half the cells left over after reserving the
/// minimum clue threshold, plus a difficulty-dependent jitter. For a 9×9
/// grid this lands on 32 clues, comfortably above the 16-clue threshold
/// enforced by [`GivenCountValidator`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomGivenSelector;

/// Fixed difficulty knob; higher values shrink the jitter window.
const DIFFICULTY: usize = 31;

impl RandomGivenSelector {
    /// Creates a selector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn given_count(size: u8, rng: &mut dyn RngCore) -> usize {
        let cells = usize::from(size) * usize::from(size);
        let threshold = GivenCountValidator::threshold(size);
        // Half the cells beyond the clue threshold, clamped so small grids
        // still clear the threshold.
        let minimum = ((cells - threshold) / 2).max(threshold + 1).min(cells);
        let spread = minimum / ((DIFFICULTY % minimum) + 1);
        let jitter = if spread > 0 {
            rng.random_range(0..spread)
        } else {
            0
        };
        minimum + jitter
    }
}

impl GivenSelector for RandomGivenSelector {
    fn select(&self, size: u8, rng: &mut dyn RngCore) -> HashSet<Position> {
        let count = Self::given_count(size, rng);
        let mut positions = HashSet::with_capacity(count);
        while positions.len() < count {
            let row = rng.random_range(0..size);
            let col = rng.random_range(0..size);
            positions.insert(Position::new(row, col));
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_nine_by_nine_selects_thirty_two_givens() {
        // minimum = (81 - 16) / 2 = 32, and the jitter window collapses to
        // zero at this difficulty, so the count is exact.
        let mut rng = Pcg64Mcg::seed_from_u64(0);
        let positions = RandomGivenSelector::new().select(9, &mut rng);
        assert_eq!(positions.len(), 32);
        assert!(
            positions
                .iter()
                .all(|position| position.row() < 9 && position.col() < 9)
        );
    }

    #[test]
    fn test_count_clears_validator_threshold() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        for size in [4, 9, 16, 25] {
            let count = RandomGivenSelector::given_count(size, &mut rng);
            assert!(
                count > GivenCountValidator::threshold(size),
                "size {size}: {count} givens would fail validation"
            );
            assert!(count <= usize::from(size) * usize::from(size));
        }
    }

    #[test]
    fn test_selection_is_reproducible_for_a_seed() {
        let first = RandomGivenSelector::new().select(9, &mut Pcg64Mcg::seed_from_u64(42));
        let second = RandomGivenSelector::new().select(9, &mut Pcg64Mcg::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
