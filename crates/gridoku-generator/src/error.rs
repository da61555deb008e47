//! Generator error types.

use gridoku_core::GridError;
use gridoku_solver::SolveError;

/// An error raised by
/// [`PuzzleGenerator::generate`](crate::PuzzleGenerator::generate).
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GenerateError {
    /// No masking with a unique solution was found within the configured
    /// attempt cap.
    #[display("no uniquely solvable masking found after {attempts} attempts")]
    MaskAttemptsExhausted {
        /// The number of maskings that were tried.
        attempts: usize,
    },
    /// The solver gave up for a reason other than the masking itself, such
    /// as a configured guess budget running out.
    #[display("solver gave up during generation: {_0}")]
    Solver(#[from] SolveError),
    /// A grid operation failed.
    #[display("grid operation failed: {_0}")]
    Grid(#[from] GridError),
}
