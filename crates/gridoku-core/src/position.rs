//! Board coordinate type.

use std::fmt::{self, Display};

/// A `(row, column)` coordinate on a square grid.
///
/// Positions are plain values: equality and hashing consider only the
/// coordinates, so positions can serve as map and set keys. Bounds are
/// enforced by the grid that is indexed, not by the position itself.
///
/// # Examples
///
/// ```
/// use gridoku_core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 5);
/// assert_eq!(pos, Position::new(2, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from a row and a column index.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
