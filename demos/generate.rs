//! Basic example of using the Sudoku engine

use sudoku_engine::{Difficulty, Generator, Solver};

fn main() {
    // Generate a puzzle
    println!("Generating a Hard difficulty puzzle...\n");
    let mut generator = Generator::new();
    let result = generator.generate(Difficulty::Hard);

    println!("Generated puzzle ({} clues):", result.clue_count());
    println!("{}\n", result.puzzle);

    // Verify uniqueness with the bounded counter
    let solver = Solver::new();
    println!(
        "Unique solution: {}",
        solver.has_unique_solution(&result.puzzle)
    );

    println!("\nSolution:");
    println!("{}", result.solution);
}
