use dioxus::prelude::*;

use quiz_core::{OptionKey, SessionSnapshot};
use services::{QuizHandle, QuizType, RunningQuiz};
use tracing::warn;

use crate::context::AppContext;
use crate::views::{QuestionPanel, QuizViewState, SummaryPanel, quiz_view_state};
use crate::vm::{SummaryVm, map_summary};

/// Shuts the session task down when the view's future is dropped.
struct ShutdownOnDrop(QuizHandle);

impl Drop for ShutdownOnDrop {
    fn drop(&mut self) {
        self.0.shutdown();
    }
}

#[component]
pub fn QuizView(quiz_type: String) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();

    let fetched = use_signal(|| false);
    let snapshot = use_signal(SessionSnapshot::loading);
    let summary = use_signal(|| None::<SummaryVm>);
    let handle = use_signal(|| None::<QuizHandle>);

    use_future(move || {
        let quiz_loop = quiz_loop.clone();
        let quiz_type = quiz_type.clone();
        let mut fetched = fetched;
        let mut snapshot = snapshot;
        let mut summary = summary;
        let mut handle = handle;

        async move {
            let kind = match QuizType::new(quiz_type) {
                Ok(kind) => kind,
                Err(err) => {
                    warn!(error = %err, "invalid quiz type in route");
                    fetched.set(true);
                    return;
                }
            };

            let RunningQuiz {
                handle: quiz_handle,
                task,
            } = quiz_loop.start_session(&kind).await;
            let _shutdown = ShutdownOnDrop(quiz_handle.clone());
            let mut updates = quiz_handle.subscribe();
            handle.set(Some(quiz_handle));
            fetched.set(true);

            loop {
                let latest = updates.borrow_and_update().clone();
                snapshot.set(latest);
                if updates.changed().await.is_err() {
                    break;
                }
            }

            if let Ok(final_state) = task.await {
                if let Ok(result) = final_state.summary() {
                    summary.set(Some(map_summary(&result)));
                }
            }
        }
    });

    let on_answer = move |key: OptionKey| {
        let current = handle.read().clone();
        if let Some(quiz) = current {
            quiz.submit(key);
        }
    };

    let full_summary = summary.read().clone();
    let state = quiz_view_state(fetched(), &snapshot.read(), full_summary.as_ref());
    let status = state.message().unwrap_or_default();

    rsx! {
        div { class: "page", id: "quiz-root",
            match state {
                QuizViewState::InProgress(vm) => rsx! {
                    QuestionPanel { vm, on_answer }
                },
                QuizViewState::Finished(vm) => rsx! {
                    SummaryPanel { vm }
                },
                QuizViewState::Fetching | QuizViewState::Unavailable => rsx! {
                    p { class: "quiz-status", "{status}" }
                },
            }
        }
    }
}
