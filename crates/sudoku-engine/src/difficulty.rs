use crate::rng::SimpleRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty level of a generated puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub fn all_levels() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }

    /// Clue-count range targeted when carving at this difficulty. Fewer
    /// clues means more cells to deduce.
    pub fn clue_range(&self) -> ClueRange {
        match self {
            Difficulty::Easy => ClueRange::new(36, 45),
            Difficulty::Medium => ClueRange::new(32, 35),
            Difficulty::Hard => ClueRange::new(26, 31),
            Difficulty::Expert => ClueRange::new(17, 25),
        }
    }

    /// Lowercase name, the form accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::Expert => write!(f, "Expert"),
        }
    }
}

/// Error returned when a difficulty name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError {
    name: String,
}

impl ParseDifficultyError {
    /// The unrecognized name as given.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized difficulty '{}'", self.name)
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(ParseDifficultyError {
                name: s.to_string(),
            }),
        }
    }
}

/// Inclusive clue-count bounds for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRange {
    pub min: usize,
    pub max: usize,
}

impl ClueRange {
    /// Create a range. `min <= max` by configuration contract; an inverted
    /// range degenerates to `min` everywhere it is used.
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Draw a target clue count uniformly from `min..=max`.
    pub(crate) fn pick_target(&self, rng: &mut SimpleRng) -> usize {
        if self.max <= self.min {
            return self.min;
        }
        self.min + rng.next_usize(self.max - self.min + 1)
    }
}
