//! Core data structures for N×N constraint-grid puzzles.
//!
//! This crate provides the grid and cell model shared by the gridoku solver
//! and generator:
//!
//! - [`position`]: the `(row, column)` coordinate value type
//! - [`candidates`]: bitset candidate tracking for unsolved cells
//! - [`cell`]: the given/variable cell model
//! - [`grid`]: the square grid with row, column, and region views over a
//!   single owned cell arena
//! - [`validator`]: pure structural-legality predicates
//! - [`error`]: construction and access errors
//!
//! Grids default to classic Sudoku semantics: a size-9 grid has 3×3
//! regions, and any perfect-square size gets the analogous partition. A
//! non-square size still works as a plain rows-and-columns puzzle.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::Grid;
//!
//! let grid = Grid::from_rows(&[
//!     vec![0, 2, 3, 4],
//!     vec![4, 3, 0, 1],
//!     vec![3, 0, 4, 2],
//!     vec![2, 4, 1, 0],
//! ])?;
//!
//! assert!(grid.is_valid());
//! assert!(!grid.is_complete());
//! # Ok::<(), gridoku_core::GridError>(())
//! ```

pub mod candidates;
pub mod cell;
pub mod error;
pub mod grid;
pub mod position;
pub mod validator;

pub use self::{
    candidates::{Candidates, CandidateSet},
    cell::Cell,
    error::GridError,
    grid::Grid,
    position::Position,
    validator::{BoxedValidator, Validator},
};
