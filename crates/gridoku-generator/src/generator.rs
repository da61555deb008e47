//! Puzzle generation by masking a random full solution.

use std::collections::HashSet;

use gridoku_core::{CandidateSet, Cell, Grid, GridError, Position};
use gridoku_solver::{SolveError, Solver};
use log::{debug, trace};
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::{GenerateError, GivenSelector, RandomGivenSelector};

/// A generated puzzle together with its unique solution.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPuzzle {
    /// The puzzle: selected given clues, everything else blank.
    pub puzzle: Grid,
    /// The unique solution of `puzzle`.
    pub solution: Grid,
}

/// Generates uniquely solvable puzzles.
///
/// Generation runs in two phases. First a complete solution grid is filled
/// cell by cell with random legal values, restarting from scratch whenever
/// a cell runs out of options. Then a [`GivenSelector`] picks the clue
/// positions and the rest of the grid is blanked; the masked grid is kept
/// only if the [`Solver`] confirms it has exactly one solution, otherwise a
/// fresh masking is tried.
///
/// All randomness comes from the caller-supplied RNG, so generation from a
/// fixed seed is fully reproducible.
///
/// # Examples
///
/// ```
/// use gridoku_generator::PuzzleGenerator;
/// use gridoku_solver::Solver;
///
/// let solver = Solver::new();
/// let generated = PuzzleGenerator::new(&solver).generate_from_seed(9, 1)?;
///
/// assert!(generated.puzzle.is_valid());
/// assert!(generated.solution.is_complete());
/// assert_eq!(solver.solve(&generated.puzzle)?, generated.solution);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<'a, S = RandomGivenSelector> {
    solver: &'a Solver,
    selector: S,
    max_mask_attempts: Option<usize>,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator using the default [`RandomGivenSelector`].
    #[must_use]
    pub const fn new(solver: &'a Solver) -> Self {
        Self::with_selector(solver, RandomGivenSelector::new())
    }
}

impl<'a, S: GivenSelector> PuzzleGenerator<'a, S> {
    /// Creates a generator with a custom clue selector.
    #[must_use]
    pub const fn with_selector(solver: &'a Solver, selector: S) -> Self {
        Self {
            solver,
            selector,
            max_mask_attempts: None,
        }
    }

    /// Caps the number of maskings tried before generation fails with
    /// [`GenerateError::MaskAttemptsExhausted`]. Unlimited by default.
    #[must_use]
    pub const fn with_max_mask_attempts(mut self, attempts: usize) -> Self {
        self.max_mask_attempts = Some(attempts);
        self
    }

    /// Generates a puzzle of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MaskAttemptsExhausted`] when a configured
    /// attempt cap runs out, [`GenerateError::Grid`] when `size` is
    /// unsupported, and [`GenerateError::Solver`] when the solver fails for
    /// a reason other than the masking under test (a guess budget, say).
    pub fn generate<R: Rng>(&self, size: u8, rng: &mut R) -> Result<GeneratedPuzzle, GenerateError> {
        let filled = fill(size, rng)?;

        let mut attempts = 0;
        loop {
            if let Some(limit) = self.max_mask_attempts
                && attempts >= limit
            {
                return Err(GenerateError::MaskAttemptsExhausted { attempts });
            }
            attempts += 1;

            let givens = self.selector.select(size, rng);
            let puzzle = mask(&filled, &givens)?;
            match self.solver.solve(&puzzle) {
                Ok(solution) => {
                    debug!("masking accepted after {attempts} attempt(s)");
                    return Ok(GeneratedPuzzle { puzzle, solution });
                }
                Err(SolveError::Unsolvable { .. }) => {
                    debug!("masking attempt {attempts} rejected: unsolvable");
                }
                Err(SolveError::MultipleSolutions { .. }) => {
                    debug!("masking attempt {attempts} rejected: not unique");
                }
                Err(other) => return Err(other.into()),
            }
        }
    }

    /// Generates a puzzle reproducibly from a seed.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`generate`](Self::generate).
    pub fn generate_from_seed(&self, size: u8, seed: u64) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        self.generate(size, &mut rng)
    }
}

/// Fills a fresh grid with random legal values, restarting whenever a cell
/// has no legal value left.
fn fill<R: Rng>(size: u8, rng: &mut R) -> Result<Grid, GenerateError> {
    let mut grid = Grid::new(size)?;
    let positions: Vec<Position> = grid.positions().collect();
    'restart: loop {
        for &position in &positions {
            let options: Vec<u8> = legal_values(&grid, position)?.iter().collect();
            if options.is_empty() {
                trace!("fill dead-ended at {position}, restarting");
                grid.clear();
                continue 'restart;
            }
            let value = options[rng.random_range(0..options.len())];
            grid.assign(position, value)?;
        }
        return Ok(grid);
    }
}

/// The values not yet taken by any row, column, or region peer.
fn legal_values(grid: &Grid, position: Position) -> Result<CandidateSet, GridError> {
    let mut used = CandidateSet::EMPTY;
    for peer in grid.row_positions(position.row()) {
        if let Some(value) = grid.get(peer)?.value() {
            used.insert(value);
        }
    }
    for peer in grid.column_positions(position.col()) {
        if let Some(value) = grid.get(peer)?.value() {
            used.insert(value);
        }
    }
    if let Some(region) = grid.region_of(position) {
        for peer in grid.region_positions(region) {
            if let Some(value) = grid.get(peer)?.value() {
                used.insert(value);
            }
        }
    }
    Ok(CandidateSet::full(grid.size()).difference(used))
}

/// Copies the selected positions of a full solution into a fresh grid as
/// given clues, leaving every other cell blank.
fn mask(filled: &Grid, givens: &HashSet<Position>) -> Result<Grid, GenerateError> {
    let mut puzzle = Grid::new(filled.size())?;
    for &position in givens {
        if let Some(value) = filled.get(position)?.value() {
            puzzle.put(position, Cell::given(value))?;
        }
    }
    Ok(puzzle)
}
