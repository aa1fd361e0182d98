use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::QuestionError;

/// Difficulty tier of a question.
///
/// The tier decides how much time a correct answer earns and how much a
/// wrong answer costs:
///
/// | tier   | correct | incorrect |
/// |--------|---------|-----------|
/// | easy   | +4      | -12       |
/// | medium | +8      | -8        |
/// | hard   | +12     | -4        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Signed number of seconds added to the time budget after an answer.
    #[must_use]
    pub const fn adjustment(self, is_correct: bool) -> i32 {
        match (self, is_correct) {
            (Difficulty::Easy, true) => 4,
            (Difficulty::Medium, true) => 8,
            (Difficulty::Hard, true) => 12,
            (Difficulty::Easy, false) => -12,
            (Difficulty::Medium, false) => -8,
            (Difficulty::Hard, false) => -4,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Capitalised name for badges ("Easy", "Medium", "Hard").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(QuestionError::UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjustment_table_is_exact() {
        let cases = [
            (Difficulty::Easy, true, 4),
            (Difficulty::Easy, false, -12),
            (Difficulty::Medium, true, 8),
            (Difficulty::Medium, false, -8),
            (Difficulty::Hard, true, 12),
            (Difficulty::Hard, false, -4),
        ];
        for (difficulty, correct, expected) in cases {
            assert_eq!(
                difficulty.adjustment(correct),
                expected,
                "{difficulty} correct={correct}"
            );
        }
    }

    #[test]
    fn harder_tiers_reward_more_and_punish_less() {
        assert!(Difficulty::Hard.adjustment(true) > Difficulty::Easy.adjustment(true));
        assert!(Difficulty::Hard.adjustment(false) > Difficulty::Easy.adjustment(false));
    }

    #[test]
    fn parses_level_strings() {
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
