//! Candidate value sets for unsolved cells.
//!
//! [`CandidateSet`] is a bitset over the values `1..=32`: bit `v - 1`
//! represents the value `v`. Every operation is branch-free bit twiddling,
//! which keeps solver propagation cheap even though grids are generic over
//! their size.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::CandidateSet;
//!
//! let mut candidates = CandidateSet::full(9);
//! assert_eq!(candidates.len(), 9);
//!
//! candidates.remove(4);
//! candidates.remove(7);
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(4));
//! ```

use std::fmt::{self, Display};

/// A set of candidate values in the range `1..=32`.
///
/// Removal is idempotent: removing a value that is not present reports
/// "nothing changed" instead of failing.
///
/// # Examples
///
/// ```
/// use gridoku_core::CandidateSet;
///
/// let a = CandidateSet::from_iter([1, 2, 3]);
/// let b = CandidateSet::from_iter([2, 3, 4]);
///
/// assert_eq!(a.union(b), CandidateSet::from_iter([1, 2, 3, 4]));
/// assert_eq!(a.intersection(b), CandidateSet::from_iter([2, 3]));
/// assert_eq!(a.difference(b), CandidateSet::from_iter([1]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateSet(u32);

impl CandidateSet {
    /// The largest value a set can hold.
    pub const MAX_VALUE: u8 = 32;

    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Creates a set containing every value in `1..=size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not in the range `1..=32`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn full(size: u8) -> Self {
        assert!(
            (1..=Self::MAX_VALUE).contains(&size),
            "Set size must be between 1 and 32, got {size}"
        );
        Self(((1u64 << size) - 1) as u32)
    }

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    fn bit(value: u8) -> u32 {
        assert!(
            (1..=Self::MAX_VALUE).contains(&value),
            "Value must be between 1 and 32, got {value}"
        );
        1 << (value - 1)
    }

    /// Inserts a value, returning `true` if the set changed.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range `1..=32`.
    pub fn insert(&mut self, value: u8) -> bool {
        let before = self.0;
        self.0 |= Self::bit(value);
        self.0 != before
    }

    /// Removes a value, returning `true` if the set changed.
    ///
    /// Removing an absent value is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range `1..=32`.
    pub fn remove(&mut self, value: u8) -> bool {
        let before = self.0;
        self.0 &= !Self::bit(value);
        self.0 != before
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range `1..=32`.
    #[must_use]
    pub fn contains(self, value: u8) -> bool {
        self.0 & Self::bit(value) != 0
    }

    /// Returns the number of values in the set.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Returns `true` if the set holds no values.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the single remaining value, or `None` unless exactly one is left.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::CandidateSet;
    ///
    /// assert_eq!(CandidateSet::from_iter([7]).sole(), Some(7));
    /// assert_eq!(CandidateSet::from_iter([3, 7]).sole(), None);
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn sole(self) -> Option<u8> {
        if self.0.count_ones() == 1 {
            Some(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the values in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the values in ascending order.
    #[must_use]
    pub const fn iter(self) -> Candidates {
        Candidates(self.0)
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<u8> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl IntoIterator for CandidateSet {
    type Item = u8;
    type IntoIter = Candidates;

    fn into_iter(self) -> Candidates {
        self.iter()
    }
}

/// Renders the values as a pipe-delimited list, e.g. `1|3|5`.
impl Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in self.iter() {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "{value}")?;
            first = false;
        }
        Ok(())
    }
}

/// Iterator over the values of a [`CandidateSet`], ascending.
#[derive(Debug, Clone)]
pub struct Candidates(u32);

impl Iterator for Candidates {
    type Item = u8;

    #[expect(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        let low = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Some(low as u8 + 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Candidates {}
