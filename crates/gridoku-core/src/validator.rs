//! Structural legality checks over a grid snapshot.
//!
//! Validators are pure predicates: they read a [`Grid`] and report whether
//! it is structurally legal, without ever invoking the solver. A grid is
//! valid iff every validator in [`all_validators`] accepts it, which is what
//! [`Grid::is_valid`] computes.

use std::fmt::Debug;

use crate::{CandidateSet, Grid};

/// A pure structural-legality predicate over a grid.
pub trait Validator: Debug {
    /// A short human-readable name for diagnostics.
    fn name(&self) -> &'static str;

    /// Returns `true` if the grid satisfies this validator.
    fn is_valid(&self, grid: &Grid) -> bool;
}

/// A boxed [`Validator`] trait object.
pub type BoxedValidator = Box<dyn Validator>;

/// Returns the full registered validator set, in evaluation order.
#[must_use]
pub fn all_validators() -> Vec<BoxedValidator> {
    vec![
        Box::new(RangeValidator),
        Box::new(UniquenessValidator),
        Box::new(GivenCountValidator),
    ]
}

/// Checks that every assigned value lies in `[1, size]`.
///
/// Absent values always pass; only an explicitly stored out-of-range value
/// (possible through [`Grid::put`] with an arbitrary given) fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct RangeValidator;

impl Validator for RangeValidator {
    fn name(&self) -> &'static str {
        "value range"
    }

    fn is_valid(&self, grid: &Grid) -> bool {
        grid.iter().all(|(_, cell)| match cell.value() {
            Some(value) => (1..=grid.size()).contains(&value),
            None => true,
        })
    }
}

/// Checks that no value repeats within any row, column, or region.
///
/// Absent values never conflict. Regions are only checked when the grid
/// carries a region constraint.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniquenessValidator;

impl UniquenessValidator {
    fn values_are_unique<'a>(cells: impl Iterator<Item = &'a crate::Cell>) -> bool {
        let mut seen = CandidateSet::EMPTY;
        for cell in cells {
            if let Some(value) = cell.value()
                && (1..=CandidateSet::MAX_VALUE).contains(&value)
                && !seen.insert(value)
            {
                return false;
            }
        }
        true
    }
}

impl Validator for UniquenessValidator {
    fn name(&self) -> &'static str {
        "uniqueness"
    }

    fn is_valid(&self, grid: &Grid) -> bool {
        for index in 0..grid.size() {
            if !Self::values_are_unique(grid.row(index).iter()) {
                return false;
            }
            if !Self::values_are_unique(grid.column(index)) {
                return false;
            }
            if grid.has_regions() && !Self::values_are_unique(grid.region(index)) {
                return false;
            }
        }
        true
    }
}

/// Checks that the grid carries strictly more given clues than the minimum
/// threshold for its size.
///
/// The threshold is `size * 16 / 9` (9×9: more than 16 givens are required),
/// following the well-known heuristic that too few clues generally admit
/// multiple solutions.
#[derive(Debug, Default, Clone, Copy)]
pub struct GivenCountValidator;

impl GivenCountValidator {
    /// The minimum given count (exclusive) for a grid of `size`.
    #[must_use]
    pub fn threshold(size: u8) -> usize {
        usize::from(size) * 16 / 9
    }
}

impl Validator for GivenCountValidator {
    fn name(&self) -> &'static str {
        "given count"
    }

    fn is_valid(&self, grid: &Grid) -> bool {
        let given_count = grid.iter().filter(|(_, cell)| cell.is_given()).count();
        given_count > Self::threshold(grid.size())
    }
}
