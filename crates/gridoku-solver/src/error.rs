//! Solver error types.

use gridoku_core::{Grid, GridError, Position};

/// An error raised by [`Solver::solve`](crate::Solver::solve).
///
/// Propagation-phase contradictions and search-phase dead ends both surface
/// as [`Unsolvable`](SolveError::Unsolvable); the carried position is set
/// only when propagation emptied a specific cell's candidate set.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolveError {
    /// No assignment of the remaining cells completes the puzzle.
    ///
    /// Carries the grid state at the time of failure for diagnostics. When
    /// propagation emptied a candidate set, `position` names that cell.
    #[display("puzzle has no valid solution")]
    Unsolvable {
        /// The cell whose candidate set became empty, if propagation failed.
        position: Option<Position>,
        /// The grid state when the failure was detected.
        grid: Grid,
    },
    /// At least two distinct completions exist.
    ///
    /// The generator treats this as "retry with a different masking"; a
    /// caller solving an already-published puzzle should treat it as a
    /// correctness violation of that puzzle.
    #[display("puzzle has at least two distinct solutions")]
    MultipleSolutions {
        /// The original puzzle handed to the solver.
        grid: Grid,
        /// The first completion found.
        first: Grid,
        /// A second, value-distinct completion.
        second: Grid,
    },
    /// The configured guess budget ran out before the search completed.
    #[display("search budget of {limit} guesses was exhausted")]
    BudgetExhausted {
        /// The configured limit.
        limit: usize,
    },
    /// The grid rejected an access the solver attempted.
    #[display("grid access failed: {_0}")]
    Grid(#[from] GridError),
}
