//! Constraint propagation plus backtracking search.

use gridoku_core::{CandidateSet, Cell, Grid, Position};

use crate::SolveError;

/// A hybrid constraint-propagation and backtracking solver.
///
/// Solving first narrows candidate sets deterministically (peer-value
/// exclusion, peer-candidate elimination, and region pointing) until a
/// fixed point, then falls back to depth-first guessing over independent
/// grid copies. The search detects a second, value-distinct solution as
/// soon as one exists and reports it as an error, which is what lets the
/// generator guarantee uniquely solvable puzzles cheaply.
///
/// The input grid is never mutated; a successful solve returns a new,
/// fully solved grid.
///
/// # Examples
///
/// ```
/// use gridoku_core::Grid;
/// use gridoku_solver::Solver;
///
/// let puzzle = Grid::from_rows(&[
///     vec![0, 2, 3, 4],
///     vec![4, 3, 0, 1],
///     vec![3, 0, 4, 2],
///     vec![2, 4, 1, 0],
/// ])?;
///
/// let solution = Solver::new().solve(&puzzle)?;
/// assert!(solution.is_complete());
/// assert_eq!(solution.value_at(0, 0)?, Some(1));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    max_guesses: Option<usize>,
}

/// Outcome of exploring one subtree of the search.
#[derive(Debug, Clone)]
enum Search {
    /// Every branch dead-ended.
    Exhausted,
    /// Exactly one completion was found so far.
    Unique(Grid),
    /// Two value-distinct completions were found.
    Ambiguous(Grid, Grid),
}

impl Solver {
    /// Creates a solver with an unbounded search.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_guesses: None }
    }

    /// Creates a solver that gives up after `limit` guesses.
    ///
    /// Pathological inputs (a near-empty large grid, say) make the search
    /// phase exponential; a budget turns runaway searches into
    /// [`SolveError::BudgetExhausted`] instead.
    #[must_use]
    pub const fn with_guess_budget(limit: usize) -> Self {
        Self {
            max_guesses: Some(limit),
        }
    }

    /// Solves the puzzle, returning a new fully solved grid.
    ///
    /// Candidate sets on the input need not be consistent with the given
    /// clues; the solver narrows them itself and never widens a set, so a
    /// pre-narrowed grid (as used by its own recursion) stays respected.
    ///
    /// # Errors
    ///
    /// - [`SolveError::Unsolvable`] when propagation empties a candidate
    ///   set or every search branch dead-ends.
    /// - [`SolveError::MultipleSolutions`] as soon as two value-distinct
    ///   completions are found anywhere in the search.
    /// - [`SolveError::BudgetExhausted`] when a configured guess budget
    ///   runs out.
    pub fn solve(&self, puzzle: &Grid) -> Result<Grid, SolveError> {
        let mut guesses = 0usize;
        let mut work = puzzle.clone();
        propagate(&mut work)?;
        let outcome = if work.is_complete() {
            Search::Unique(work)
        } else {
            self.search(&work, &mut guesses)?
        };
        match outcome {
            Search::Unique(solution) => Ok(solution),
            Search::Ambiguous(first, second) => Err(SolveError::MultipleSolutions {
                grid: puzzle.clone(),
                first,
                second,
            }),
            Search::Exhausted => Err(SolveError::Unsolvable {
                position: None,
                grid: puzzle.clone(),
            }),
        }
    }

    /// Guesses on the first unsolved cell in grid order, exploring each
    /// remaining candidate on an independent copy of the grid.
    fn search(&self, grid: &Grid, guesses: &mut usize) -> Result<Search, SolveError> {
        let Some((position, candidates)) = grid.iter().find_map(|(position, cell)| {
            if cell.is_solved() {
                None
            } else {
                cell.candidates().map(|candidates| (position, candidates))
            }
        }) else {
            return Ok(Search::Exhausted);
        };

        let mut found: Option<Grid> = None;
        for value in candidates {
            if let Some(limit) = self.max_guesses
                && *guesses >= limit
            {
                return Err(SolveError::BudgetExhausted { limit });
            }
            *guesses += 1;

            let mut branch = grid.clone();
            branch.assign(position, value)?;
            match self.resolve(branch, guesses)? {
                Search::Exhausted => {}
                Search::Unique(solution) => match &found {
                    None => found = Some(solution),
                    Some(first) if *first != solution => {
                        return Ok(Search::Ambiguous(first.clone(), solution));
                    }
                    Some(_) => {}
                },
                ambiguous @ Search::Ambiguous(..) => return Ok(ambiguous),
            }
        }

        Ok(match found {
            Some(solution) => Search::Unique(solution),
            None => Search::Exhausted,
        })
    }

    /// Runs the whole procedure (propagate, check, search) on an owned
    /// branch grid, mapping dead ends to [`Search::Exhausted`].
    fn resolve(&self, mut grid: Grid, guesses: &mut usize) -> Result<Search, SolveError> {
        match propagate(&mut grid) {
            Ok(()) => {}
            Err(SolveError::Unsolvable { .. }) => return Ok(Search::Exhausted),
            Err(other) => return Err(other),
        }
        if grid.is_complete() {
            return Ok(Search::Unique(grid));
        }
        self.search(&grid, guesses)
    }
}

/// Runs deterministic elimination until a full pass changes nothing.
fn propagate(grid: &mut Grid) -> Result<(), SolveError> {
    let positions: Vec<Position> = grid.positions().collect();
    loop {
        let mut changed = false;
        for &position in &positions {
            changed |= narrow_cell(grid, position)?;
        }
        if grid.has_regions() {
            for region in 0..grid.size() {
                changed |= point_region(grid, region)?;
            }
        }
        if !changed {
            return Ok(());
        }
    }
}

/// Narrows one cell against its row, column, and region peers.
///
/// Per unit: peers' definite values are removed outright, and a value no
/// peer can take (judged by both peer values and peer candidate sets) is
/// assigned when it is the unique survivor.
fn narrow_cell(grid: &mut Grid, position: Position) -> Result<bool, SolveError> {
    let mut changed = false;
    for unit in units_of(grid, position) {
        if grid.get(position)?.is_solved() {
            break;
        }

        let mut fixed = CandidateSet::EMPTY;
        let mut open = CandidateSet::EMPTY;
        for &peer in &unit {
            if peer == position {
                continue;
            }
            let cell = grid.get(peer)?;
            if let Some(value) = cell.value() {
                fixed.insert(value);
            } else if let Some(candidates) = cell.candidates() {
                open = open.union(candidates);
            }
        }

        let before = grid
            .get(position)?
            .candidates()
            .unwrap_or(CandidateSet::EMPTY);
        let trimmed = before.difference(fixed);
        if trimmed.is_empty() {
            if let Cell::Variable { candidates, .. } = grid.get_mut(position)? {
                *candidates = trimmed;
            }
            return Err(SolveError::Unsolvable {
                position: Some(position),
                grid: grid.clone(),
            });
        }

        // A lone survivor after discounting everything the peers can still
        // take is this cell's value. An empty survivor set is normal, not a
        // contradiction.
        let assignment = trimmed.sole().or_else(|| trimmed.difference(open).sole());
        if let Some(value) = assignment {
            grid.assign(position, value)?;
            changed = true;
        } else if trimmed != before {
            if let Cell::Variable { candidates, .. } = grid.get_mut(position)? {
                *candidates = trimmed;
            }
            changed = true;
        }
    }
    Ok(changed)
}

/// Applies region-pointing elimination for one region.
///
/// For each value not yet placed in the region, when every region cell
/// still holding it shares one row (or column), the value is removed from
/// that row (column) outside the region. Patterns spanning multiple rows
/// and columns are disqualified.
fn point_region(grid: &mut Grid, region: u8) -> Result<bool, SolveError> {
    let positions: Vec<Position> = grid.region_positions(region).collect();
    let mut fixed = CandidateSet::EMPTY;
    for &position in &positions {
        if let Some(value) = grid.get(position)?.value() {
            fixed.insert(value);
        }
    }
    let mut changed = false;
    for value in 1..=grid.size() {
        // A value already placed in the region has no remaining home here.
        // Cells narrowed earlier in the pass may still hold it as a stale
        // candidate; pointing on those would eliminate the value from cells
        // outside the region that genuinely need it.
        if fixed.contains(value) {
            continue;
        }
        let mut spots = Vec::new();
        for &position in &positions {
            let cell = grid.get(position)?;
            if !cell.is_solved() && cell.candidates().is_some_and(|c| c.contains(value)) {
                spots.push(position);
            }
        }
        let Some((&first, rest)) = spots.split_first() else {
            continue;
        };
        if rest.is_empty() {
            // Single-cell case is already covered by peer elimination.
            continue;
        }

        if rest.iter().all(|p| p.row() == first.row()) {
            let outside: Vec<Position> = grid
                .row_positions(first.row())
                .filter(|&p| grid.region_of(p) != Some(region))
                .collect();
            for position in outside {
                changed |= eliminate(grid, position, value)?;
            }
        } else if rest.iter().all(|p| p.col() == first.col()) {
            let outside: Vec<Position> = grid
                .column_positions(first.col())
                .filter(|&p| grid.region_of(p) != Some(region))
                .collect();
            for position in outside {
                changed |= eliminate(grid, position, value)?;
            }
        }
    }
    Ok(changed)
}

/// Removes a candidate from an unsolved variable, assigning the cell if
/// exactly one candidate remains.
fn eliminate(grid: &mut Grid, position: Position, value: u8) -> Result<bool, SolveError> {
    {
        let Cell::Variable {
            value: assigned,
            candidates,
        } = grid.get_mut(position)?
        else {
            return Ok(false);
        };
        if assigned.is_some() || !candidates.remove(value) {
            return Ok(false);
        }
    }

    let remaining = grid
        .get(position)?
        .candidates()
        .unwrap_or(CandidateSet::EMPTY);
    if remaining.is_empty() {
        return Err(SolveError::Unsolvable {
            position: Some(position),
            grid: grid.clone(),
        });
    }
    if let Some(sole) = remaining.sole() {
        grid.assign(position, sole)?;
    }
    Ok(true)
}

fn units_of(grid: &Grid, position: Position) -> Vec<Vec<Position>> {
    let mut units = vec![
        grid.row_positions(position.row()).collect(),
        grid.column_positions(position.col()).collect(),
    ];
    if let Some(region) = grid.region_of(position) {
        units.push(grid.region_positions(region).collect());
    }
    units
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const PUZZLE_9: [[u8; 9]; 9] = [
        [1, 0, 3, 0, 0, 0, 0, 6, 0],
        [9, 5, 0, 0, 0, 6, 2, 0, 0],
        [0, 0, 0, 5, 0, 0, 4, 0, 9],
        [0, 0, 5, 0, 6, 8, 0, 0, 0],
        [2, 0, 0, 3, 5, 0, 1, 0, 0],
        [8, 0, 0, 0, 9, 0, 0, 0, 7],
        [5, 0, 0, 1, 3, 0, 0, 0, 0],
        [0, 0, 0, 8, 7, 5, 0, 2, 0],
        [4, 0, 0, 0, 2, 9, 3, 5, 0],
    ];

    const SOLUTION_9: [[u8; 9]; 9] = [
        [1, 7, 3, 9, 4, 2, 8, 6, 5],
        [9, 5, 4, 7, 8, 6, 2, 1, 3],
        [6, 2, 8, 5, 1, 3, 4, 7, 9],
        [7, 1, 5, 4, 6, 8, 9, 3, 2],
        [2, 4, 9, 3, 5, 7, 1, 8, 6],
        [8, 3, 6, 2, 9, 1, 5, 4, 7],
        [5, 6, 2, 1, 3, 4, 7, 9, 8],
        [3, 9, 1, 8, 7, 5, 6, 2, 4],
        [4, 8, 7, 6, 2, 9, 3, 5, 1],
    ];

    fn grid_from(rows: &[[u8; 9]; 9]) -> Grid {
        let rows: Vec<Vec<u8>> = rows.iter().map(|row| row.to_vec()).collect();
        Grid::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_solve_size_four() {
        let puzzle = Grid::from_rows(&[
            vec![0, 2, 3, 4],
            vec![4, 3, 0, 1],
            vec![3, 0, 4, 2],
            vec![2, 4, 1, 0],
        ])
        .unwrap();
        let expected = Grid::from_rows(&[
            vec![1, 2, 3, 4],
            vec![4, 3, 2, 1],
            vec![3, 1, 4, 2],
            vec![2, 4, 1, 3],
        ])
        .unwrap();

        let solution = Solver::new().solve(&puzzle).unwrap();
        assert_eq!(solution, expected);
        assert!(solution.is_complete());
    }

    #[test]
    fn test_solve_size_four_with_more_blanks() {
        let puzzle = Grid::from_rows(&[
            vec![0, 0, 3, 0],
            vec![4, 3, 2, 0],
            vec![3, 1, 4, 2],
            vec![0, 0, 1, 3],
        ])
        .unwrap();
        let expected = Grid::from_rows(&[
            vec![1, 2, 3, 4],
            vec![4, 3, 2, 1],
            vec![3, 1, 4, 2],
            vec![2, 4, 1, 3],
        ])
        .unwrap();

        assert_eq!(Solver::new().solve(&puzzle).unwrap(), expected);
    }

    #[test]
    fn test_solve_size_nine() {
        let solution = Solver::new().solve(&grid_from(&PUZZLE_9)).unwrap();
        assert_eq!(solution, grid_from(&SOLUTION_9));
        assert!(solution.is_complete());
    }

    #[test]
    fn test_solve_does_not_mutate_input() {
        let puzzle = grid_from(&PUZZLE_9);
        let snapshot = puzzle.clone();
        let _ = Solver::new().solve(&puzzle).unwrap();
        assert_eq!(puzzle, snapshot);
        assert_eq!(puzzle.value_at(0, 1).unwrap(), None);
    }

    #[test]
    fn test_solve_is_identity_on_full_grid() {
        let full = grid_from(&SOLUTION_9);
        assert_eq!(Solver::new().solve(&full).unwrap(), full);
    }

    #[test]
    fn test_unsolvable_by_propagation() {
        // Column 0 fixes 1, 2, 4 and row 2 fixes 3, so (2, 0) has no
        // candidate left; propagation alone reaches the contradiction.
        let puzzle = Grid::from_rows(&[
            vec![1, 0, 0, 0],
            vec![2, 0, 0, 0],
            vec![0, 3, 0, 0],
            vec![4, 0, 0, 0],
        ])
        .unwrap();

        match Solver::new().solve(&puzzle) {
            Err(SolveError::Unsolvable { position, grid }) => {
                assert!(position.is_some());
                assert_eq!(grid.size(), 4);
            }
            other => panic!("expected Unsolvable, got {other:?}"),
        }
    }

    #[test]
    fn test_multiple_solutions_detected() {
        // An empty grid is as under-constrained as it gets.
        let puzzle = Grid::new(4).unwrap();

        match Solver::new().solve(&puzzle) {
            Err(SolveError::MultipleSolutions {
                grid,
                first,
                second,
            }) => {
                assert_eq!(grid, puzzle);
                assert_ne!(first, second);
                assert!(first.is_complete());
                assert!(second.is_complete());
            }
            other => panic!("expected MultipleSolutions, got {other:?}"),
        }
    }

    #[test]
    fn test_degraded_mode_without_regions() {
        // Size 5 has no regions; row/column constraints alone determine the
        // blanks of this cyclic latin square.
        let puzzle = Grid::from_rows(&[
            vec![0, 2, 3, 4, 5],
            vec![2, 3, 4, 5, 1],
            vec![3, 4, 0, 1, 2],
            vec![4, 5, 1, 2, 3],
            vec![5, 1, 2, 3, 0],
        ])
        .unwrap();
        assert!(!puzzle.has_regions());

        let solution = Solver::new().solve(&puzzle).unwrap();
        assert_eq!(solution.value_at(0, 0).unwrap(), Some(1));
        assert_eq!(solution.value_at(2, 2).unwrap(), Some(5));
        assert_eq!(solution.value_at(4, 4).unwrap(), Some(4));
    }

    #[test]
    fn test_guess_budget_exhausted() {
        let puzzle = Grid::new(9).unwrap();
        let solver = Solver::with_guess_budget(3);

        assert_eq!(
            solver.solve(&puzzle).unwrap_err(),
            SolveError::BudgetExhausted { limit: 3 }
        );
    }

    #[test]
    fn test_solution_passes_validators() {
        let solution = Solver::new().solve(&grid_from(&PUZZLE_9)).unwrap();
        for validator in gridoku_core::validator::all_validators() {
            if validator.name() == "given count" {
                continue; // the solved grid keeps its original givens
            }
            assert!(
                validator.is_valid(&solution),
                "{} validator rejected the solution",
                validator.name()
            );
        }
    }

    #[test]
    fn test_pointing_ignores_values_already_placed_in_region() {
        // These blanks make the first narrow pass assign 1 at (2,4), (5,5),
        // and (6,3) after (3,3) and (3,5) were already narrowed, so both
        // still hold 1 as a stale candidate aligned on row 3. Pointing for
        // the middle region must notice that 1 is already placed there
        // instead of stripping 1 from (3,1), whose value it is.
        let mut rows: Vec<Vec<u8>> = SOLUTION_9.iter().map(|row| row.to_vec()).collect();
        let blanks = [
            (2, 4),
            (3, 1),
            (3, 3),
            (3, 4),
            (3, 5),
            (3, 6),
            (4, 2),
            (5, 5),
            (6, 3),
            (7, 1),
        ];
        for (y, x) in blanks {
            rows[y][x] = 0;
        }
        let puzzle = Grid::from_rows(&rows).unwrap();

        let solution = Solver::new().solve(&puzzle).unwrap();
        assert_eq!(solution, grid_from(&SOLUTION_9));
        assert!(solution.is_complete());
        assert!(solution.is_valid());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_masked_solution_resolves_or_reports_ambiguity(
            mask in prop::collection::hash_set((0usize..9, 0usize..9), 0..40),
        ) {
            let mut rows: Vec<Vec<u8>> = SOLUTION_9.iter().map(|row| row.to_vec()).collect();
            for &(y, x) in &mask {
                rows[y][x] = 0;
            }
            let puzzle = Grid::from_rows(&rows).unwrap();

            // A masked valid solution is always solvable, so the only
            // legitimate outcomes are that exact solution or ambiguity.
            match Solver::new().solve(&puzzle) {
                Ok(solution) => prop_assert_eq!(solution, grid_from(&SOLUTION_9)),
                Err(SolveError::MultipleSolutions { first, second, .. }) => {
                    prop_assert!(first.is_complete());
                    prop_assert!(second.is_complete());
                    prop_assert_ne!(first, second);
                }
                Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
            }
        }
    }
}
