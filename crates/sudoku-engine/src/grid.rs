use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the board.
pub const GRID_SIZE: usize = 9;

/// Side length of one of the nine boxes.
pub const BOX_SIZE: usize = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A (row, col) coordinate on the board, both in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Iterate over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Position::new(row, col)))
    }
}

/// A 9x9 Sudoku board. `0` marks an empty cell, `1..=9` a placed digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Get the digit at a position, or `None` if the cell is empty.
    pub fn get(&self, pos: Position) -> Option<u8> {
        match self.cells[pos.row][pos.col] {
            0 => None,
            value => Some(value),
        }
    }

    /// Place a digit (`1..=9`) at a position.
    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!((1..=9).contains(&value));
        self.cells[pos.row][pos.col] = value;
    }

    /// Empty the cell at a position.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = 0;
    }

    /// Whether placing `value` at `pos` violates no row, column, or box
    /// constraint against the grid's current contents. The target cell's own
    /// value is ignored, so the check is valid whether or not the cell is
    /// currently filled. This is the hot path of both search algorithms.
    pub fn is_safe(&self, pos: Position, value: u8) -> bool {
        for i in 0..GRID_SIZE {
            if i != pos.col && self.cells[pos.row][i] == value {
                return false;
            }
            if i != pos.row && self.cells[i][pos.col] == value {
                return false;
            }
        }

        let box_row = pos.row / BOX_SIZE * BOX_SIZE;
        let box_col = pos.col / BOX_SIZE * BOX_SIZE;
        for row in box_row..box_row + BOX_SIZE {
            for col in box_col..box_col + BOX_SIZE {
                if (row, col) != (pos.row, pos.col) && self.cells[row][col] == value {
                    return false;
                }
            }
        }

        true
    }

    /// First empty cell in row-major scan order, if any.
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.get(pos).is_none())
    }

    /// Number of filled cells.
    pub fn clue_count(&self) -> usize {
        Position::all().filter(|&pos| self.get(pos).is_some()).count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        CELL_COUNT - self.clue_count()
    }

    /// Whether every cell is filled.
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Whether the grid is a valid complete solution: every row, column, and
    /// box contains each digit 1-9 exactly once.
    pub fn is_valid_solution(&self) -> bool {
        for i in 0..GRID_SIZE {
            if !is_permutation((0..GRID_SIZE).map(|col| self.cells[i][col])) {
                return false;
            }
            if !is_permutation((0..GRID_SIZE).map(|row| self.cells[row][i])) {
                return false;
            }
        }

        for box_row in (0..GRID_SIZE).step_by(BOX_SIZE) {
            for box_col in (0..GRID_SIZE).step_by(BOX_SIZE) {
                let values = (0..BOX_SIZE).flat_map(|r| {
                    (0..BOX_SIZE).map(move |c| self.cells[box_row + r][box_col + c])
                });
                if !is_permutation(values) {
                    return false;
                }
            }
        }

        true
    }

    /// Parse a grid from an 81-character string in row-major order, where
    /// `1`-`9` are digits and `0` or `.` mark empty cells. Whitespace is
    /// ignored, so the output of [`Grid`]'s `Display` parses back.
    pub fn from_string(s: &str) -> Option<Self> {
        let mut grid = Self::new();
        let mut positions = Position::all();

        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let pos = positions.next()?;
            match ch {
                '.' | '0' => {}
                '1'..='9' => grid.set(pos, ch as u8 - b'0'),
                _ => return None,
            }
        }

        // Reject underfull input.
        if positions.next().is_some() {
            return None;
        }

        Some(grid)
    }
}

/// Whether the nine values are a permutation of 1..=9.
fn is_permutation(values: impl Iterator<Item = u8>) -> bool {
    let mut seen = [false; GRID_SIZE + 1];
    for value in values {
        if value == 0 || seen[value as usize] {
            return false;
        }
        seen[value as usize] = true;
    }
    true
}

impl fmt::Display for Grid {
    /// Nine space-separated rows, one per line, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &value) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match value {
                    0 => write!(f, ".")?,
                    _ => write!(f, "{}", value)?,
                }
            }
        }
        Ok(())
    }
}
