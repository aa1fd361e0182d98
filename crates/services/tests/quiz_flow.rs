use std::sync::Arc;

use quiz_core::time::fixed_now;
use quiz_core::{Difficulty, FinishReason, OptionKey, Question, SessionPhase, SessionSnapshot};
use services::{Clock, QuizLoopService, QuizType, StaticQuestionProvider};
use tokio::sync::watch;

fn questions(count: usize, difficulty: Difficulty) -> Vec<Question> {
    (0..count)
        .map(|i| {
            Question::new(
                format!("Question {i}"),
                ["alpha", "beta", "gamma", "delta"].map(String::from),
                OptionKey::B,
                format!("Because {i}."),
                difficulty,
            )
            .unwrap()
        })
        .collect()
}

fn service(count: usize, difficulty: Difficulty) -> QuizLoopService {
    let provider = StaticQuestionProvider::from_questions(questions(count, difficulty));
    QuizLoopService::new(Clock::fixed(fixed_now()), Arc::new(provider))
}

async fn wait_for(
    rx: &mut watch::Receiver<SessionSnapshot>,
    done: impl Fn(&SessionSnapshot) -> bool,
) -> SessionSnapshot {
    loop {
        {
            let snapshot = rx.borrow_and_update();
            if done(&snapshot) {
                return snapshot.clone();
            }
        }
        if rx.changed().await.is_err() {
            return rx.borrow().clone();
        }
    }
}

#[tokio::test(start_paused = true)]
async fn answering_everything_correctly_finishes_by_completion() {
    let running = service(5, Difficulty::Medium)
        .start_session(&QuizType::default())
        .await;
    let mut rx = running.handle.subscribe();

    for index in 0..5 {
        wait_for(&mut rx, |s| s.current_index == index && s.answers.len() == index).await;
        assert!(running.handle.submit(OptionKey::B));
        let answered = wait_for(&mut rx, |s| s.answers.len() == index + 1).await;
        assert_eq!(answered.selected_is_correct, Some(true));
        assert_eq!(answered.last_adjustment, Some(8));
    }

    let finished = running.task.await.unwrap();
    assert_eq!(finished.finish_reason(), Some(FinishReason::AllAnswered));
    assert_eq!(finished.answers().len(), 5);
    assert_eq!(finished.current_index(), 4);

    let summary = finished.summary().unwrap();
    assert_eq!(summary.score_label(), "5 / 5");
    assert_eq!(summary.started_at(), fixed_now());
}

#[tokio::test(start_paused = true)]
async fn answer_record_is_published_before_next_question() {
    let running = service(3, Difficulty::Hard)
        .start_session(&QuizType::default())
        .await;
    let mut rx = running.handle.subscribe();

    for index in 0..3 {
        wait_for(&mut rx, |s| s.current_index == index && s.answers.len() == index).await;
        running.handle.submit(OptionKey::A);
        loop {
            let snapshot = wait_for(&mut rx, |_| true).await;
            assert!(
                snapshot.answers.len() >= snapshot.current_index,
                "question {} shown before record {}",
                snapshot.current_index,
                snapshot.answers.len()
            );
            if snapshot.answers.len() > index || snapshot.phase == SessionPhase::Finished {
                break;
            }
            if rx.changed().await.is_err() {
                break;
            }
        }
    }

    let finished = running.task.await.unwrap();
    assert_eq!(finished.answers().len(), 3);
    assert!(finished.answers().iter().all(|a| !a.is_correct));
}

#[tokio::test(start_paused = true)]
async fn repeated_wrong_easy_answers_run_out_the_clock() {
    let running = service(10, Difficulty::Easy)
        .start_session(&QuizType::default())
        .await;
    let mut rx = running.handle.subscribe();

    for index in 0..5 {
        let snapshot =
            wait_for(&mut rx, |s| s.is_finished() || (s.current_index == index && s.answers.len() == index))
                .await;
        if snapshot.is_finished() {
            break;
        }
        running.handle.submit(OptionKey::D);
        wait_for(&mut rx, |s| s.is_finished() || s.answers.len() == index + 1).await;
    }

    let finished = running.task.await.unwrap();
    assert_eq!(finished.finish_reason(), Some(FinishReason::TimerExhausted));
    assert_eq!(finished.answers().len(), 5);
    assert!(finished.remaining_time().abs() < f64::EPSILON);
    assert!(finished.answers().iter().all(|a| a.adjustment == -12));
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_pending_advance() {
    let running = service(3, Difficulty::Medium)
        .start_session(&QuizType::default())
        .await;
    let mut rx = running.handle.subscribe();

    running.handle.submit(OptionKey::B);
    wait_for(&mut rx, |s| s.answers.len() == 1).await;
    running.handle.shutdown();

    let state = running.task.await.unwrap();
    assert!(!state.is_finished());
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.answers().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn empty_provider_keeps_session_loading() {
    let provider = StaticQuestionProvider::from_questions(Vec::new());
    let service = QuizLoopService::new(Clock::fixed(fixed_now()), Arc::new(provider));
    let running = service.start_session(&QuizType::default()).await;

    tokio::time::sleep(std::time::Duration::from_secs(90)).await;
    for key in OptionKey::ALL {
        running.handle.submit(key);
    }
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;

    let snapshot = running.snapshot();
    assert_eq!(snapshot.phase, SessionPhase::Loading);
    assert!(snapshot.answers.is_empty());
    assert!(!running.handle.is_stopped());

    running.handle.shutdown();
    let state = running.task.await.unwrap();
    assert_eq!(state.phase(), SessionPhase::Loading);
}
