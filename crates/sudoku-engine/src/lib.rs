//! Core Sudoku generation engine.
//!
//! A [`Generator`] fills an empty 9x9 board with randomized backtracking,
//! then carves clues out of the solved board while a bounded [`Solver`]
//! verifies after every removal that the puzzle still has exactly one
//! solution.

mod difficulty;
mod generator;
mod grid;
mod rng;
mod solver;

pub use difficulty::{ClueRange, Difficulty, ParseDifficultyError};
pub use generator::{GeneratedPuzzle, Generator};
pub use grid::{Grid, Position, BOX_SIZE, CELL_COUNT, GRID_SIZE};
pub use solver::Solver;
