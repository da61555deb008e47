//! Puzzle generation for N×N constraint grids.
//!
//! [`PuzzleGenerator`] fills a random complete solution, masks it down to a
//! clue set chosen by a [`GivenSelector`], and keeps only maskings the
//! solver certifies as uniquely solvable. Seeded generation is
//! reproducible.

pub use self::{
    error::GenerateError,
    generator::{GeneratedPuzzle, PuzzleGenerator},
    selector::{GivenSelector, RandomGivenSelector},
};

mod error;
mod generator;
mod selector;
