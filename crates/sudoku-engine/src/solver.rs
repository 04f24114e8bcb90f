//! Bounded solution counting.
//!
//! The counter exists to answer one question cheaply during carving: does
//! this partial grid still have exactly one completion? Capping the search
//! at a limit (2 in practice) turns "enumerate all solutions" into "prove
//! uniqueness or find a second solution", which is what keeps repeated
//! invocations tractable.

use crate::{Grid, GRID_SIZE};

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Count distinct complete valid assignments reachable from `grid`,
    /// stopping as soon as the count reaches `limit`. A grid with no empty
    /// cells counts as its own single solution.
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        let mut working = grid.clone();
        count_recursive(&mut working, limit)
    }

    /// Whether the grid has exactly one solution.
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }
}

/// Depth-first count with an explicit cutoff. Digits are tried in ascending
/// order; ordering does not affect the count, only which branches are
/// explored first. Every placement is undone before returning, so the grid
/// is back in its pre-call shape on every exit path.
fn count_recursive(grid: &mut Grid, limit: usize) -> usize {
    let Some(pos) = grid.first_empty() else {
        return 1;
    };

    let mut count = 0;
    for value in 1..=GRID_SIZE as u8 {
        if grid.is_safe(pos, value) {
            grid.set(pos, value);
            count += count_recursive(grid, limit - count);
            grid.clear(pos);
            if count >= limit {
                break;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    const CLASSIC_PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_complete_grid_counts_one_for_any_limit() {
        let grid = Grid::from_string(SOLVED).unwrap();
        let solver = Solver::new();
        for limit in 1..=5 {
            assert_eq!(solver.count_solutions(&grid, limit), 1);
        }
    }

    #[test]
    fn test_classic_puzzle_is_unique() {
        let puzzle = Grid::from_string(CLASSIC_PUZZLE).unwrap();
        let solver = Solver::new();
        assert_eq!(solver.count_solutions(&puzzle, 2), 1);
        assert!(solver.has_unique_solution(&puzzle));
    }

    #[test]
    fn test_single_removal_stays_unique() {
        // Removing one cell from a complete grid forces the missing digit.
        let mut grid = Grid::from_string(SOLVED).unwrap();
        grid.clear(Position::new(0, 0));
        assert!(Solver::new().has_unique_solution(&grid));
    }

    #[test]
    fn test_swappable_rectangle_is_ambiguous() {
        // Clearing four cells that hold an interchangeable digit pair
        // (1/3 at rows 3-4, columns 5 and 8) yields two completions.
        let mut grid = Grid::from_string(SOLVED).unwrap();
        for pos in [
            Position::new(3, 5),
            Position::new(4, 5),
            Position::new(3, 8),
            Position::new(4, 8),
        ] {
            grid.clear(pos);
        }

        let solver = Solver::new();
        assert_eq!(solver.count_solutions(&grid, 2), 2);
        assert!(!solver.has_unique_solution(&grid));
    }

    #[test]
    fn test_limit_caps_the_search() {
        // The empty grid has an astronomical number of completions; the
        // cutoff must stop the search at the limit.
        let grid = Grid::new();
        let solver = Solver::new();
        assert_eq!(solver.count_solutions(&grid, 1), 1);
        assert_eq!(solver.count_solutions(&grid, 2), 2);
        assert_eq!(solver.count_solutions(&grid, 3), 3);
    }

    #[test]
    fn test_unsolvable_partial_grid_counts_zero() {
        // Row 0 holds 1-8; the 9 needed at (0, 8) is blocked by the column.
        let mut grid = Grid::new();
        for col in 0..8 {
            grid.set(Position::new(0, col), col as u8 + 1);
        }
        grid.set(Position::new(1, 8), 9);
        assert_eq!(Solver::new().count_solutions(&grid, 2), 0);
    }
}
