use clap::Parser;
use std::process::ExitCode;
use sudoku_engine::{Difficulty, Generator};

/// Generate a Sudoku puzzle with a guaranteed unique solution.
#[derive(Parser)]
#[command(name = "sudoku-gen", version)]
struct Args {
    /// Difficulty level: easy, medium, hard, or expert (case-insensitive)
    difficulty: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Difficulty parsing stays out of clap's hands so the error message and
    // exit status are ours.
    let difficulty = match args.difficulty {
        Some(name) => match name.parse::<Difficulty>() {
            Ok(difficulty) => difficulty,
            Err(err) => {
                let valid: Vec<&str> = Difficulty::all_levels()
                    .iter()
                    .map(|level| level.name())
                    .collect();
                eprintln!("{err}");
                eprintln!("valid difficulties: {}", valid.join(", "));
                return ExitCode::FAILURE;
            }
        },
        None => Difficulty::default(),
    };

    let mut generator = Generator::new();
    let result = generator.generate(difficulty);

    println!("Difficulty: {difficulty}");
    println!("Clues: {}", result.clue_count());
    println!();
    println!("{}", result.puzzle);
    println!();
    println!("{}", result.solution);

    ExitCode::SUCCESS
}
