use serde::{Deserialize, Serialize};

use crate::model::{OptionKey, Question};

/// Immutable record of one answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question_index: usize,
    pub question_text: String,
    pub user_answer_label: String,
    pub correct_answer_label: String,
    pub explanation: String,
    pub is_correct: bool,
    pub adjustment: i32,
}

impl AnsweredQuestion {
    #[must_use]
    pub fn record(question_index: usize, question: &Question, chosen: OptionKey) -> Self {
        let is_correct = question.is_correct(chosen);
        Self {
            question_index,
            question_text: question.text().to_string(),
            user_answer_label: question.option_label(chosen),
            correct_answer_label: question.option_label(question.correct_option_key()),
            explanation: question.explanation().to_string(),
            is_correct,
            adjustment: question.difficulty().adjustment(is_correct),
        }
    }

    /// 1-based number shown in the summary ("Question 3: ...").
    #[must_use]
    pub fn display_number(&self) -> usize {
        self.question_index + 1
    }
}
