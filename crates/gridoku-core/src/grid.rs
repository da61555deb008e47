//! The square grid holding given and variable cells.

use std::fmt::{self, Display};

use crate::{CandidateSet, Cell, GridError, Position, validator};

/// A square grid of [`Cell`]s with row, column, and (when the size is a
/// perfect square) region views.
///
/// The grid owns a single flat arena of cells in row-major order; rows,
/// columns, and regions are index computations over that arena, so every
/// position is reachable through all views without any synchronization
/// between them. Every slot is materialized as an empty [`Cell::Variable`]
/// up front, so a read never observes an absent cell.
///
/// When `sqrt(size)` is not exact the grid has no region constraint and
/// behaves as a plain rows-and-columns puzzle.
///
/// Cloning a grid produces a deep, value-based snapshot: no candidate set
/// is shared between the copies.
///
/// # Examples
///
/// ```
/// use gridoku_core::Grid;
///
/// let grid = Grid::from_rows(&[
///     vec![0, 2, 3, 4],
///     vec![4, 3, 0, 1],
///     vec![3, 0, 4, 2],
///     vec![2, 4, 1, 0],
/// ])?;
///
/// assert_eq!(grid.size(), 4);
/// assert_eq!(grid.region_size(), Some(2));
/// assert_eq!(grid.value_at(0, 1)?, Some(2));
/// assert_eq!(grid.value_at(0, 0)?, None);
/// # Ok::<(), gridoku_core::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    size: u8,
    region_size: Option<u8>,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid of the requested size.
    ///
    /// Every cell starts as an unsolved variable with the full candidate
    /// range `1..=size`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnsupportedSize`] if `size` is zero or greater
    /// than 32.
    pub fn new(size: u8) -> Result<Self, GridError> {
        if size == 0 || size > CandidateSet::MAX_VALUE {
            return Err(GridError::UnsupportedSize {
                size: usize::from(size),
            });
        }
        let cell_count = usize::from(size) * usize::from(size);
        Ok(Self {
            size,
            region_size: exact_sqrt(size),
            cells: vec![Cell::empty(size); cell_count],
        })
    }

    /// Builds a grid from a square array of optional values.
    ///
    /// The parse is permissive: a value outside `[1, size]` is coerced to
    /// absent rather than rejected. In-range values become [`Cell::Given`]
    /// clues; absent slots stay empty variables.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NotSquare`] if any row's length differs from the
    /// number of rows, and [`GridError::UnsupportedSize`] for empty input or
    /// more than 32 rows.
    pub fn from_values(rows: &[Vec<Option<u8>>]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 || size > usize::from(CandidateSet::MAX_VALUE) {
            return Err(GridError::UnsupportedSize { size });
        }
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(GridError::NotSquare {
                    rows: size,
                    row,
                    cols: values.len(),
                });
            }
        }

        #[expect(clippy::cast_possible_truncation)]
        let mut grid = Self::new(size as u8)?;
        for (row, values) in rows.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                #[expect(clippy::cast_possible_truncation)]
                let position = Position::new(row as u8, col as u8);
                if let Some(value) = *value
                    && (1..=grid.size).contains(&value)
                {
                    grid.put(position, Cell::given(value))?;
                }
            }
        }
        Ok(grid)
    }

    /// Builds a grid from a square array of plain values, `0` (or any value
    /// outside `[1, size]`) meaning absent.
    ///
    /// # Errors
    ///
    /// Same as [`from_values`](Self::from_values).
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let values: Vec<Vec<Option<u8>>> = rows
            .iter()
            .map(|row| row.iter().map(|&value| Some(value)).collect())
            .collect();
        Self::from_values(&values)
    }

    /// Returns the grid size.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the region edge length, or `None` if the size is not a
    /// perfect square.
    #[must_use]
    pub const fn region_size(&self) -> Option<u8> {
        self.region_size
    }

    /// Returns `true` if the grid carries a region constraint.
    #[must_use]
    pub const fn has_regions(&self) -> bool {
        self.region_size.is_some()
    }

    fn index_of(&self, position: Position) -> Result<usize, GridError> {
        if position.row() >= self.size || position.col() >= self.size {
            return Err(GridError::InvalidPosition {
                position,
                size: self.size,
            });
        }
        Ok(usize::from(position.row()) * usize::from(self.size) + usize::from(position.col()))
    }

    /// Returns the cell at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if either coordinate is
    /// outside `[0, size)`.
    pub fn get(&self, position: Position) -> Result<&Cell, GridError> {
        let index = self.index_of(position)?;
        Ok(&self.cells[index])
    }

    /// Returns a mutable reference to the cell at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if either coordinate is
    /// outside `[0, size)`.
    pub fn get_mut(&mut self, position: Position) -> Result<&mut Cell, GridError> {
        let index = self.index_of(position)?;
        Ok(&mut self.cells[index])
    }

    /// Writes `cell` at `position` and returns the previous cell.
    ///
    /// The write is visible through the row, column, and region views alike.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if either coordinate is
    /// outside `[0, size)`.
    pub fn put(&mut self, position: Position, cell: Cell) -> Result<Cell, GridError> {
        let index = self.index_of(position)?;
        Ok(std::mem::replace(&mut self.cells[index], cell))
    }

    /// Resets the slot at `position` to a fresh empty variable and returns
    /// the previous cell.
    ///
    /// Removal never shrinks the grid; it only resets the slot.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if either coordinate is
    /// outside `[0, size)`.
    pub fn remove(&mut self, position: Position) -> Result<Cell, GridError> {
        let empty = Cell::empty(self.size);
        self.put(position, empty)
    }

    /// Assigns `value` to the variable cell at `position`, collapsing its
    /// candidate set.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] for out-of-bounds coordinates
    /// and [`GridError::GivenCellMutation`] if the cell is a given clue.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside `[1, size]`.
    pub fn assign(&mut self, position: Position, value: u8) -> Result<(), GridError> {
        assert!(
            (1..=self.size).contains(&value),
            "value {value} is outside the legal range 1..={}",
            self.size
        );
        let cell = self.get_mut(position)?;
        if cell.is_given() {
            return Err(GridError::GivenCellMutation { position });
        }
        cell.solve(value);
        Ok(())
    }

    /// Returns the value at `(row, col)`, `None` for an unsolved cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if either coordinate is
    /// outside `[0, size)`.
    pub fn value_at(&self, row: u8, col: u8) -> Result<Option<u8>, GridError> {
        Ok(self.get(Position::new(row, col))?.value())
    }

    /// Resets every cell to an empty variable, keeping the size and region
    /// structure.
    pub fn clear(&mut self) {
        let empty = Cell::empty(self.size);
        self.cells.fill(empty);
    }

    /// Returns the backing slice of row `y` (always `size` cells).
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in `[0, size)`.
    #[must_use]
    pub fn row(&self, y: u8) -> &[Cell] {
        assert!(y < self.size, "row {y} out of range for size {}", self.size);
        let start = usize::from(y) * usize::from(self.size);
        &self.cells[start..start + usize::from(self.size)]
    }

    /// Returns an iterator over the cells of column `x`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in `[0, size)`.
    pub fn column(&self, x: u8) -> impl Iterator<Item = &Cell> + '_ {
        self.column_positions(x).map(|position| {
            let index = usize::from(position.row()) * usize::from(self.size)
                + usize::from(position.col());
            &self.cells[index]
        })
    }

    /// Returns the positions of row `y`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in `[0, size)`.
    pub fn row_positions(&self, y: u8) -> impl Iterator<Item = Position> + '_ {
        assert!(y < self.size, "row {y} out of range for size {}", self.size);
        (0..self.size).map(move |x| Position::new(y, x))
    }

    /// Returns the positions of column `x`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in `[0, size)`.
    pub fn column_positions(&self, x: u8) -> impl Iterator<Item = Position> + '_ {
        assert!(
            x < self.size,
            "column {x} out of range for size {}",
            self.size
        );
        (0..self.size).map(move |y| Position::new(y, x))
    }

    /// Returns the region index containing `position`, or `None` if the grid
    /// has no regions.
    #[must_use]
    pub fn region_of(&self, position: Position) -> Option<u8> {
        self.region_size
            .map(|rs| (position.row() / rs) * rs + position.col() / rs)
    }

    /// Returns the positions of region `region` in slot order (row-major
    /// within the region).
    ///
    /// # Panics
    ///
    /// Panics if the grid has no regions or `region` is not in `[0, size)`.
    pub fn region_positions(&self, region: u8) -> impl Iterator<Item = Position> + '_ {
        let rs = self
            .region_size
            .expect("grid of a non-square size has no regions");
        assert!(
            region < self.size,
            "region {region} out of range for size {}",
            self.size
        );
        let row0 = (region / rs) * rs;
        let col0 = (region % rs) * rs;
        (0..self.size).map(move |slot| Position::new(row0 + slot / rs, col0 + slot % rs))
    }

    /// Returns an iterator over the cells of region `region`.
    ///
    /// # Panics
    ///
    /// Panics if the grid has no regions or `region` is not in `[0, size)`.
    pub fn region(&self, region: u8) -> impl Iterator<Item = &Cell> + '_ {
        self.region_positions(region).map(|position| {
            let index = usize::from(position.row()) * usize::from(self.size)
                + usize::from(position.col());
            &self.cells[index]
        })
    }

    /// Returns all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Returns a fresh iterator over `(position, cell)` pairs in row-major
    /// order; every position is visited exactly once.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            grid: self,
            index: 0,
        }
    }

    /// Returns `true` when every cell is solved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Cell::is_solved)
    }

    /// Returns `true` when every registered validator accepts this grid.
    ///
    /// See [`validator::all_validators`] for the registered set.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        validator::all_validators()
            .iter()
            .all(|validator| validator.is_valid(self))
    }

    /// Renders the grid with unsolved variables shown as their pipe-delimited
    /// candidate lists in brackets instead of `0`.
    #[must_use]
    pub fn to_candidates_string(&self) -> String {
        CandidatesDisplay(self).to_string()
    }
}

/// Display adapter behind [`Grid::to_candidates_string`].
struct CandidatesDisplay<'a>(&'a Grid);

impl Display for CandidatesDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.0;
        for y in 0..grid.size {
            write!(f, "{{")?;
            for (x, cell) in grid.row(y).iter().enumerate() {
                if x > 0 {
                    write!(f, ",")?;
                }
                match cell.value() {
                    Some(value) => write!(f, "{value}")?,
                    None => {
                        let candidates = cell.candidates().unwrap_or(CandidateSet::EMPTY);
                        write!(f, "[{candidates}]")?;
                    }
                }
            }
            write!(f, "}}")?;
            if y + 1 < grid.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Grids are equal when they have the same size and every corresponding
/// position holds the same value; candidate bookkeeping and the given vs.
/// variable distinction do not participate.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| a.value() == b.value())
    }
}

impl Eq for Grid {}

/// Renders rows wrapped in braces with comma-separated values, absent
/// values shown as `0`.
impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            write!(f, "{{")?;
            for (x, cell) in self.row(y).iter().enumerate() {
                if x > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", cell.value().unwrap_or(0))?;
            }
            write!(f, "}}")?;
            if y + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Row-major iterator over `(position, cell)` pairs of a [`Grid`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    grid: &'a Grid,
    index: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Position, &'a Cell);

    #[expect(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.grid.cells.get(self.index)?;
        let size = usize::from(self.grid.size);
        let position = Position::new((self.index / size) as u8, (self.index % size) as u8);
        self.index += 1;
        Some((position, cell))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.cells.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Position, &'a Cell);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

fn exact_sqrt(size: u8) -> Option<u8> {
    (1..=size).find(|root| root.checked_mul(*root) == Some(size))
}
