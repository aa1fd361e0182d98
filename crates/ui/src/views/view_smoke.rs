use quiz_core::{Difficulty, OptionKey, Question, QuizSession, SubmitOutcome};
use services::{ProviderError, QuestionProvider, QuestionSet, QuizType};

use super::test_harness::{render_question, render_summary, setup_quiz_harness, static_provider};
use crate::vm::{map_quiz_screen, map_summary_from_snapshot};

fn question(text: &str, difficulty: Difficulty) -> Question {
    Question::new(
        text,
        ["Mercury", "Venus", "Earth", "Mars"].map(String::from),
        OptionKey::D,
        "It looks red because of iron oxide.",
        difficulty,
    )
    .unwrap()
}

#[test]
fn question_panel_renders_options_and_feedback() {
    let mut session = QuizSession::from_questions(vec![
        question("Which planet is red?", Difficulty::Medium),
        question("Closest to the sun?", Difficulty::Easy),
    ]);
    let _ = session.submit_answer(OptionKey::D);

    let html = render_question(map_quiz_screen(&session.snapshot()).unwrap());

    assert!(html.contains("Which planet is red?"), "missing question in {html}");
    assert!(html.contains("Medium"), "missing difficulty in {html}");
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(html.contains("option option-correct"), "missing feedback in {html}");
    assert!(html.contains("+8"), "missing adjustment in {html}");
    for option in ["Mercury", "Venus", "Earth", "Mars"] {
        assert!(html.contains(option), "missing {option} in {html}");
    }
}

#[test]
fn summary_panel_renders_rows() {
    let mut session = QuizSession::from_questions(vec![
        question("Which planet is red?", Difficulty::Hard),
        question("Second planet?", Difficulty::Hard),
    ]);
    for key in [OptionKey::D, OptionKey::A] {
        if let SubmitOutcome::Recorded {
            advance: Some(pending),
            ..
        } = session.submit_answer(key)
        {
            session.advance(pending);
        }
    }

    let html = render_summary(map_summary_from_snapshot(&session.snapshot()));

    assert!(html.contains("Quiz Finished"), "missing title in {html}");
    assert!(html.contains("Score: 1 / 2"), "missing score in {html}");
    assert!(html.contains("Question 2: Second planet?"), "missing row in {html}");
    assert!(html.contains("Correct Answer: (d) Mars"), "missing correction in {html}");
    assert!(html.contains("answer answer-wrong"), "missing styling in {html}");
}

struct StalledProvider;

#[async_trait::async_trait]
impl QuestionProvider for StalledProvider {
    async fn fetch(&self, _quiz_type: &QuizType) -> Result<QuestionSet, ProviderError> {
        std::future::pending::<()>().await;
        Ok(QuestionSet::empty())
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_shows_loading_while_fetch_is_pending() {
    let mut harness = setup_quiz_harness(StalledProvider);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Loading..."), "missing loading state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_reports_unavailable_for_empty_question_set() {
    let mut harness = setup_quiz_harness(static_provider(Vec::new()));
    harness.rebuild();

    let html = harness.drive_until("unavailable").await;
    assert!(html.contains("Questions are unavailable right now."), "missing unavailable in {html}");
    assert!(!html.contains("Quiz Finished"), "empty quiz must not finish: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_first_question() {
    let mut harness = setup_quiz_harness(static_provider(vec![question(
        "Which planet is red?",
        Difficulty::Easy,
    )]));
    harness.rebuild();

    let html = harness.drive_until("Which planet is red?").await;
    assert!(html.contains("Which planet is red?"), "missing question in {html}");
    assert!(html.contains("Easy"), "missing difficulty in {html}");
}
