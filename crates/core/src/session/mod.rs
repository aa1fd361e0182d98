//! Quiz session state machine.
//!
//! A session walks `Loading -> InProgress -> Finished`. Every mutation goes
//! through `tick`, `submit_answer` or `advance`, and none of them touch state
//! once the session has finished.

mod snapshot;
mod summary;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::model::{AnsweredQuestion, OptionKey, PresentationOrder, Question, TimeBudget};
use crate::time::Clock;

pub use snapshot::SessionSnapshot;
pub use summary::{QuizSummary, SummaryError};

//
// ─── STATES AND OUTCOMES ──────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No questions available yet (or the provider returned none).
    Loading,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    TimerExhausted,
    AllAnswered,
}

/// Token handed out when an answer is recorded. Redeem it with
/// [`QuizSession::advance`] once the feedback delay has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct PendingAdvance {
    question_index: usize,
}

impl PendingAdvance {
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Recorded {
        is_correct: bool,
        adjustment: i32,
        /// `None` when the adjustment emptied the budget and ended the session.
        advance: Option<PendingAdvance>,
    },
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// This tick emptied the budget; the timer should stop.
    Exhausted,
    /// Nothing to do: still loading, or already finished.
    Idle,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    budget: TimeBudget,
    current: usize,
    selected: Option<OptionKey>,
    last_adjustment: Option<i32>,
    answers: Vec<AnsweredQuestion>,
    finish: Option<FinishReason>,
    clock: Clock,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Build a session from the raw question list and its presentation order.
    ///
    /// Each 1-based index `i` in `order` picks `raw[i - 1]`. Indices outside
    /// the list are dropped. An empty result leaves the session in `Loading`.
    #[must_use]
    pub fn new(raw: &[Question], order: &PresentationOrder) -> Self {
        let (questions, skipped) = order.apply(raw);
        if !skipped.is_empty() {
            warn!(?skipped, raw_len = raw.len(), "presentation order references missing questions");
        }
        Self::from_questions(questions)
    }

    /// Build a session from questions that are already in presentation order.
    #[must_use]
    pub fn from_questions(questions: Vec<Question>) -> Self {
        let clock = Clock::default();
        Self {
            questions,
            budget: TimeBudget::default(),
            current: 0,
            selected: None,
            last_adjustment: None,
            answers: Vec::new(),
            finish: None,
            started_at: clock.now(),
            clock,
            finished_at: None,
        }
    }

    /// Replace the clock used for start/finish timestamps. Restamps `started_at`.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self.started_at = clock.now();
        self
    }

    /// Start from a full budget of `limit_secs` instead of the default 60.
    #[must_use]
    pub fn with_time_limit(mut self, limit_secs: f64) -> Self {
        self.budget = TimeBudget::full(limit_secs);
        self
    }

    /// Start from a specific remaining time (clamped to the current cap).
    #[must_use]
    pub fn with_remaining_time(mut self, remaining_secs: f64) -> Self {
        self.budget = TimeBudget::with_remaining(self.budget.limit(), remaining_secs);
        self
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.finish.is_some() {
            SessionPhase::Finished
        } else if self.questions.is_empty() {
            SessionPhase::Loading
        } else {
            SessionPhase::InProgress
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finish.is_some()
    }

    #[must_use]
    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finish
    }

    #[must_use]
    pub fn remaining_time(&self) -> f64 {
        self.budget.remaining()
    }

    #[must_use]
    pub fn budget(&self) -> TimeBudget {
        self.budget
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<OptionKey> {
        self.selected
    }

    #[must_use]
    pub fn last_adjustment(&self) -> Option<i32> {
        self.last_adjustment
    }

    #[must_use]
    pub fn answers(&self) -> &[AnsweredQuestion] {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// True when the current question has a recorded answer that has not been
    /// advanced past yet.
    #[must_use]
    pub fn is_awaiting_advance(&self) -> bool {
        !self.is_finished() && self.answers.len() > self.current
    }

    /// Decay the budget by `delta_secs` of elapsed time.
    pub fn tick(&mut self, delta_secs: f64) -> TickOutcome {
        if self.phase() != SessionPhase::InProgress {
            return TickOutcome::Idle;
        }
        if self.budget.decay(delta_secs) {
            self.finish_with(FinishReason::TimerExhausted);
            return TickOutcome::Exhausted;
        }
        TickOutcome::Running
    }

    /// Answer the current question with `key`.
    ///
    /// Ignored while loading, after finishing, or when the current question
    /// already has an answer waiting for its advance.
    pub fn submit_answer(&mut self, key: OptionKey) -> SubmitOutcome {
        if self.phase() != SessionPhase::InProgress || self.is_awaiting_advance() {
            return SubmitOutcome::Ignored;
        }
        let Some(question) = self.questions.get(self.current) else {
            return SubmitOutcome::Ignored;
        };

        let record = AnsweredQuestion::record(self.current, question, key);
        let is_correct = record.is_correct;
        let adjustment = record.adjustment;

        self.selected = Some(key);
        self.last_adjustment = Some(adjustment);
        self.answers.push(record);

        if self.budget.adjust(adjustment) {
            self.finish_with(FinishReason::TimerExhausted);
            return SubmitOutcome::Recorded {
                is_correct,
                adjustment,
                advance: None,
            };
        }

        SubmitOutcome::Recorded {
            is_correct,
            adjustment,
            advance: Some(PendingAdvance {
                question_index: self.current,
            }),
        }
    }

    /// Move past the answered question. Stale tokens and finished sessions are ignored.
    ///
    /// Returns the phase after the call.
    pub fn advance(&mut self, pending: PendingAdvance) -> SessionPhase {
        if self.is_finished() || pending.question_index != self.current {
            return self.phase();
        }

        let next = self.current + 1;
        if next >= self.questions.len() {
            self.finish_with(FinishReason::AllAnswered);
        } else {
            self.current = next;
            self.selected = None;
            self.last_adjustment = None;
        }
        self.phase()
    }

    /// Capture the observable state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }

    /// Build the scored summary of a finished session.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::NotFinished` if the session is still running.
    pub fn summary(&self) -> Result<QuizSummary, SummaryError> {
        QuizSummary::from_session(self)
    }

    fn finish_with(&mut self, reason: FinishReason) {
        if self.finish.is_none() {
            self.finish = Some(reason);
            self.finished_at = Some(self.clock.now());
        }
    }
}
