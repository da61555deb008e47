//! The two kinds of grid cell: given clues and variable cells.

use crate::CandidateSet;

/// A single cell of a grid.
///
/// A cell is either a [`Given`] clue, whose value is fixed at construction,
/// or a [`Variable`] whose value starts absent and whose candidate set
/// shrinks as the solver eliminates values.
///
/// A Variable is *solved* exactly when its candidate set has one member and
/// its value is set to that member; [`solve`](Cell::solve) establishes both
/// halves of that invariant at once.
///
/// [`Given`]: Cell::Given
/// [`Variable`]: Cell::Variable
///
/// # Examples
///
/// ```
/// use gridoku_core::{CandidateSet, Cell};
///
/// let mut cell = Cell::empty(9);
/// assert_eq!(cell.value(), None);
/// assert!(!cell.is_solved());
///
/// cell.solve(4);
/// assert_eq!(cell.value(), Some(4));
/// assert_eq!(cell.candidates(), Some(CandidateSet::from_iter([4])));
/// assert!(cell.is_solved());
/// ```
#[derive(Debug, Clone)]
pub enum Cell {
    /// A clue with a fixed, immutable value.
    Given(u8),
    /// An unknown cell tracked through a shrinking candidate set.
    Variable {
        /// The assigned value, `None` until the cell is solved.
        value: Option<u8>,
        /// The values still possible for this cell.
        candidates: CandidateSet,
    },
}

impl Cell {
    /// Creates an unsolved variable cell with the full candidate range `1..=size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not in the range `1..=32`.
    #[must_use]
    pub fn empty(size: u8) -> Self {
        Self::Variable {
            value: None,
            candidates: CandidateSet::full(size),
        }
    }

    /// Creates a given cell holding `value`.
    #[must_use]
    pub const fn given(value: u8) -> Self {
        Self::Given(value)
    }

    /// Returns the cell's value, `None` for an unsolved variable.
    #[must_use]
    pub const fn value(&self) -> Option<u8> {
        match *self {
            Self::Given(value) => Some(value),
            Self::Variable { value, .. } => value,
        }
    }

    /// Returns `true` for a given clue.
    #[must_use]
    pub const fn is_given(&self) -> bool {
        matches!(self, Self::Given(_))
    }

    /// Returns `true` if the cell carries a definite value.
    ///
    /// A given is always solved. A variable is solved only when its value is
    /// set and its candidate set has collapsed to that single value.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        match *self {
            Self::Given(_) => true,
            Self::Variable { value, candidates } => value.is_some() && candidates.sole() == value,
        }
    }

    /// Returns the remaining candidates, `None` for a given cell.
    #[must_use]
    pub const fn candidates(&self) -> Option<CandidateSet> {
        match *self {
            Self::Given(_) => None,
            Self::Variable { candidates, .. } => Some(candidates),
        }
    }

    /// Removes a candidate from a variable cell, returning `true` if the set
    /// changed.
    ///
    /// Removing an absent candidate is a no-op, and a given cell never
    /// changes.
    pub fn remove_candidate(&mut self, value: u8) -> bool {
        match self {
            Self::Given(_) => false,
            Self::Variable { candidates, .. } => candidates.remove(value),
        }
    }

    /// Assigns `value` to a variable cell and collapses its candidate set to
    /// that single value.
    ///
    /// # Panics
    ///
    /// Panics on a given cell: a given's value is fixed at construction, and
    /// attempting to change it is a contract violation. The grid-level
    /// [`assign`](crate::Grid::assign) reports the same condition as a
    /// recoverable error instead.
    pub fn solve(&mut self, value: u8) {
        match self {
            Self::Given(_) => panic!("attempted to assign {value} to a given cell"),
            Self::Variable { value: slot, candidates } => {
                *slot = Some(value);
                *candidates = CandidateSet::from_iter([value]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_variable() {
        let cell = Cell::empty(4);
        assert_eq!(cell.value(), None);
        assert!(!cell.is_given());
        assert!(!cell.is_solved());
        assert_eq!(cell.candidates(), Some(CandidateSet::full(4)));
    }

    #[test]
    fn test_given_is_solved() {
        let cell = Cell::given(7);
        assert_eq!(cell.value(), Some(7));
        assert!(cell.is_given());
        assert!(cell.is_solved());
        assert_eq!(cell.candidates(), None);
    }

    #[test]
    fn test_solve_collapses_candidates() {
        let mut cell = Cell::empty(9);
        cell.solve(3);
        assert_eq!(cell.value(), Some(3));
        assert_eq!(cell.candidates(), Some(CandidateSet::from_iter([3])));
        assert!(cell.is_solved());
    }

    #[test]
    fn test_remove_candidate_idempotent() {
        let mut cell = Cell::empty(4);
        assert!(cell.remove_candidate(2));
        assert!(!cell.remove_candidate(2));
        assert_eq!(cell.candidates().unwrap().len(), 3);
    }

    #[test]
    fn test_remove_candidate_on_given_is_noop() {
        let mut cell = Cell::given(5);
        assert!(!cell.remove_candidate(5));
        assert_eq!(cell.value(), Some(5));
    }

    #[test]
    #[should_panic(expected = "given cell")]
    fn test_solve_given_panics() {
        let mut cell = Cell::given(1);
        cell.solve(2);
    }

    #[test]
    fn test_value_without_collapsed_set_is_not_solved() {
        // A variable whose value is set but whose candidates have not
        // collapsed does not count as solved.
        let cell = Cell::Variable {
            value: Some(2),
            candidates: CandidateSet::from_iter([2, 3]),
        };
        assert!(!cell.is_solved());
    }
}
