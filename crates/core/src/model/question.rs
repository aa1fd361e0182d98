use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Difficulty, OptionKey};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("unknown option key: {0:?}")]
    UnknownOptionKey(String),

    #[error("unknown difficulty level: {0:?}")]
    UnknownDifficulty(String),

    #[error("question text cannot be empty")]
    EmptyText,
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question with four options.
///
/// Questions are immutable once built; the session only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    options: [String; 4],
    correct: OptionKey,
    explanation: String,
    difficulty: Difficulty,
}

impl Question {
    /// Build a question. `options` are given in `a, b, c, d` order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the question text is blank.
    pub fn new(
        text: impl Into<String>,
        options: [String; 4],
        correct: OptionKey,
        explanation: impl Into<String>,
        difficulty: Difficulty,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }

        Ok(Self {
            text,
            options,
            correct,
            explanation: explanation.into(),
            difficulty,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn option(&self, key: OptionKey) -> &str {
        &self.options[key.index()]
    }

    /// Iterate `(key, text)` pairs in display order.
    pub fn options(&self) -> impl Iterator<Item = (OptionKey, &str)> {
        OptionKey::ALL
            .into_iter()
            .map(move |key| (key, self.option(key)))
    }

    #[must_use]
    pub fn correct_option_key(&self) -> OptionKey {
        self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn is_correct(&self, key: OptionKey) -> bool {
        key == self.correct
    }

    /// Label used in the answer trail, e.g. `"(b) Paris"`.
    #[must_use]
    pub fn option_label(&self, key: OptionKey) -> String {
        format!("({key}) {}", self.option(key))
    }
}
