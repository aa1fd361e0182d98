use quiz_core::session::QuizSummary;
use quiz_core::{AnsweredQuestion, FinishReason, SessionSnapshot};

use crate::vm::time_fmt::{format_datetime, format_elapsed};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRowVm {
    pub heading: String,
    pub user_answer: String,
    /// Shown only for wrong answers.
    pub correct_answer: Option<String>,
    pub explanation: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub score_label: String,
    pub finished_at_str: Option<String>,
    pub elapsed_label: Option<String>,
    pub rows: Vec<SummaryRowVm>,
}

impl From<&AnsweredQuestion> for SummaryRowVm {
    fn from(answer: &AnsweredQuestion) -> Self {
        Self {
            heading: format!(
                "Question {}: {}",
                answer.display_number(),
                answer.question_text
            ),
            user_answer: format!("Your Answer: {}", answer.user_answer_label),
            correct_answer: (!answer.is_correct)
                .then(|| format!("Correct Answer: {}", answer.correct_answer_label)),
            explanation: answer.explanation.clone(),
            is_correct: answer.is_correct,
        }
    }
}

fn subtitle(reason: Option<FinishReason>) -> &'static str {
    match reason {
        Some(FinishReason::TimerExhausted) | None => "Time's up",
        Some(FinishReason::AllAnswered) => "All questions answered",
    }
}

fn rows(answers: &[AnsweredQuestion]) -> Vec<SummaryRowVm> {
    answers.iter().map(SummaryRowVm::from).collect()
}

/// Summary straight from the final snapshot (no timestamps).
#[must_use]
pub fn map_summary_from_snapshot(snapshot: &SessionSnapshot) -> SummaryVm {
    let correct = snapshot.answers.iter().filter(|a| a.is_correct).count();
    SummaryVm {
        title: "Quiz Finished",
        subtitle: subtitle(snapshot.finish_reason),
        score_label: format!("{correct} / {}", snapshot.question_count),
        finished_at_str: None,
        elapsed_label: None,
        rows: rows(&snapshot.answers),
    }
}

#[must_use]
pub fn map_summary(summary: &QuizSummary) -> SummaryVm {
    SummaryVm {
        title: "Quiz Finished",
        subtitle: subtitle(Some(summary.reason())),
        score_label: summary.score_label(),
        finished_at_str: Some(format_datetime(summary.finished_at())),
        elapsed_label: Some(format_elapsed(summary.finished_at() - summary.started_at())),
        rows: rows(summary.answers()),
    }
}
