//! Error types for grid construction and access.

use crate::Position;

/// An error raised by grid construction or cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A coordinate lies outside the grid bounds.
    #[display("position {position} is outside a grid of size {size}")]
    InvalidPosition {
        /// The offending position.
        position: Position,
        /// The grid size the position was checked against.
        size: u8,
    },
    /// The input rows do not form a square array.
    #[display("grid values must form a square: got {rows} rows but row {row} has {cols} columns")]
    NotSquare {
        /// Number of rows in the input.
        rows: usize,
        /// Index of the first row with a mismatched length.
        row: usize,
        /// Length of that row.
        cols: usize,
    },
    /// The requested grid size cannot be represented.
    #[display("unsupported grid size {size}: sizes 1 through 32 are supported")]
    UnsupportedSize {
        /// The requested size.
        size: usize,
    },
    /// An attempt was made to assign a value to a given cell.
    #[display("the given cell at {position} cannot be assigned")]
    GivenCellMutation {
        /// The position of the given cell.
        position: Position,
    },
}
