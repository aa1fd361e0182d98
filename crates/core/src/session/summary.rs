use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::AnsweredQuestion;
use crate::session::{FinishReason, QuizSession};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("session has not finished yet")]
    NotFinished,
}

/// Scored result of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    reason: FinishReason,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    total_questions: usize,
    correct: usize,
    answers: Vec<AnsweredQuestion>,
}

impl QuizSummary {
    /// # Errors
    ///
    /// Returns `SummaryError::NotFinished` if the session is still running or loading.
    pub fn from_session(session: &QuizSession) -> Result<Self, SummaryError> {
        let (Some(reason), Some(finished_at)) = (session.finish_reason(), session.finished_at())
        else {
            return Err(SummaryError::NotFinished);
        };

        let answers = session.answers().to_vec();
        let correct = answers.iter().filter(|answer| answer.is_correct).count();

        Ok(Self {
            reason,
            started_at: session.started_at(),
            finished_at,
            total_questions: session.question_count(),
            correct,
            answers,
        })
    }

    #[must_use]
    pub fn reason(&self) -> FinishReason {
        self.reason
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.answers.len() - self.correct
    }

    /// Questions never reached before the session ended.
    #[must_use]
    pub fn unanswered(&self) -> usize {
        self.total_questions.saturating_sub(self.answers.len())
    }

    #[must_use]
    pub fn answers(&self) -> &[AnsweredQuestion] {
        &self.answers
    }

    /// `"correct / total"`, e.g. `"3 / 5"`.
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{} / {}", self.correct, self.total_questions)
    }
}
