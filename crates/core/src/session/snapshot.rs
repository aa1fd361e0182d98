use crate::model::{AnsweredQuestion, OptionKey, Question};
use crate::session::{FinishReason, QuizSession, SessionPhase};

/// Point-in-time copy of everything a rendering surface needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub remaining_time: f64,
    pub time_limit: f64,
    pub current_index: usize,
    pub question_count: usize,
    pub current_question: Option<Question>,
    pub selected_option: Option<OptionKey>,
    /// Correctness of `selected_option`, present only while it is shown.
    pub selected_is_correct: Option<bool>,
    pub last_adjustment: Option<i32>,
    pub answers: Vec<AnsweredQuestion>,
    pub finish_reason: Option<FinishReason>,
}

impl SessionSnapshot {
    pub(crate) fn capture(session: &QuizSession) -> Self {
        let current_question = session.current_question().cloned();
        let selected_option = session.selected_option();
        let selected_is_correct = selected_option
            .zip(current_question.as_ref())
            .map(|(key, question)| question.is_correct(key));

        Self {
            phase: session.phase(),
            remaining_time: session.remaining_time(),
            time_limit: session.budget().limit(),
            current_index: session.current_index(),
            question_count: session.question_count(),
            current_question,
            selected_option,
            selected_is_correct,
            last_adjustment: session.last_adjustment(),
            answers: session.answers().to_vec(),
            finish_reason: session.finish_reason(),
        }
    }

    /// Snapshot for a session that has no questions yet.
    #[must_use]
    pub fn loading() -> Self {
        QuizSession::from_questions(Vec::new()).snapshot()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    /// Remaining time as a fraction of the cap, in `[0, 1]`.
    #[must_use]
    pub fn time_fraction(&self) -> f64 {
        if self.time_limit <= 0.0 {
            return 0.0;
        }
        (self.remaining_time / self.time_limit).clamp(0.0, 1.0)
    }
}
