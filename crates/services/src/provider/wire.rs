use serde::{Deserialize, Serialize};

use quiz_core::{Difficulty, OptionKey, PresentationOrder, Question};

use crate::error::ProviderError;
use crate::provider::QuestionSet;

/// Body of `GET /questions/{type}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionsResponse {
    #[serde(default)]
    pub data: Vec<RawQuestion>,
    #[serde(default)]
    pub numbers: Vec<u32>,
}

/// One question row as served by the question API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQuestion {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Option_a")]
    pub option_a: String,
    #[serde(rename = "Option_b")]
    pub option_b: String,
    #[serde(rename = "Option_c")]
    pub option_c: String,
    #[serde(rename = "Option_d")]
    pub option_d: String,
    #[serde(rename = "Answer")]
    pub answer: String,
    #[serde(rename = "Level")]
    pub level: String,
    #[serde(rename = "Explanation", default)]
    pub explanation: String,
}

impl RawQuestion {
    fn into_question(self) -> Result<Question, quiz_core::QuestionError> {
        let correct: OptionKey = self.answer.parse()?;
        let difficulty: Difficulty = self.level.parse()?;
        Question::new(
            self.question,
            [self.option_a, self.option_b, self.option_c, self.option_d],
            correct,
            self.explanation,
            difficulty,
        )
    }
}

impl QuestionsResponse {
    /// Validate every row. One bad row rejects the whole set.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Malformed` naming the first invalid row.
    pub fn into_question_set(self) -> Result<QuestionSet, ProviderError> {
        let questions = self
            .data
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                raw.into_question()
                    .map_err(|source| ProviderError::Malformed { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QuestionSet::new(questions, PresentationOrder::new(self.numbers)))
    }
}
