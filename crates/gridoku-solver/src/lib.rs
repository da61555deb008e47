//! Puzzle solving for N×N constraint grids.
//!
//! The [`Solver`] combines deterministic constraint propagation with a
//! backtracking search that detects multiple solutions. See the type-level
//! documentation for the solving strategy and error contract.

pub use self::{error::SolveError, solver::Solver};

mod error;
mod solver;
