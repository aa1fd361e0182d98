use quiz_core::{SessionPhase, SessionSnapshot};

use crate::vm::{QuizScreenVm, SummaryVm, map_quiz_screen, map_summary_from_snapshot};

/// What the quiz page should show right now.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizViewState {
    /// The question fetch has not returned yet.
    Fetching,
    /// The fetch returned nothing usable; the session stays in `Loading`.
    Unavailable,
    InProgress(QuizScreenVm),
    Finished(SummaryVm),
}

impl QuizViewState {
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            QuizViewState::Fetching => Some("Loading..."),
            QuizViewState::Unavailable => Some("Questions are unavailable right now."),
            QuizViewState::InProgress(_) | QuizViewState::Finished(_) => None,
        }
    }
}

/// Pick the page state. A summary built from the finished session wins over
/// the snapshot-only one.
#[must_use]
pub fn quiz_view_state(
    fetched: bool,
    snapshot: &SessionSnapshot,
    summary: Option<&SummaryVm>,
) -> QuizViewState {
    match snapshot.phase {
        SessionPhase::Finished => QuizViewState::Finished(
            summary
                .cloned()
                .unwrap_or_else(|| map_summary_from_snapshot(snapshot)),
        ),
        SessionPhase::InProgress => match map_quiz_screen(snapshot) {
            Some(vm) => QuizViewState::InProgress(vm),
            None => QuizViewState::Unavailable,
        },
        SessionPhase::Loading if fetched => QuizViewState::Unavailable,
        SessionPhase::Loading => QuizViewState::Fetching,
    }
}
