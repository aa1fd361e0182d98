use std::sync::Arc;

use tokio::task::JoinHandle;

use quiz_core::{QuizSession, SessionSnapshot};

use crate::Clock;
use crate::config::QuizConfig;
use crate::driver::{DriverConfig, QuizHandle, spawn_session};
use crate::provider::{QuestionProvider, QuizType, load_question_set};

/// A started session: the handle the view talks to and the task running it.
#[derive(Debug)]
pub struct RunningQuiz {
    pub handle: QuizHandle,
    pub task: JoinHandle<QuizSession>,
}

impl RunningQuiz {
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.handle.snapshot()
    }
}

/// Loads question sets and starts timed sessions for them.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    provider: Arc<dyn QuestionProvider>,
    driver: DriverConfig,
    time_limit_secs: f64,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, provider: Arc<dyn QuestionProvider>) -> Self {
        Self {
            clock,
            provider,
            driver: DriverConfig::default(),
            time_limit_secs: quiz_core::TimeBudget::DEFAULT_LIMIT_SECS,
        }
    }

    /// Apply the timing knobs from `config`.
    #[must_use]
    pub fn with_config(mut self, config: &QuizConfig) -> Self {
        self.driver = config.driver_config();
        self.time_limit_secs = config.time_limit_secs;
        self
    }

    #[must_use]
    pub fn with_driver_config(mut self, driver: DriverConfig) -> Self {
        self.driver = driver;
        self
    }

    /// Build a session for `quiz_type` without starting it.
    ///
    /// Provider failures yield an empty, `Loading` session.
    pub async fn prepare_session(&self, quiz_type: &QuizType) -> QuizSession {
        load_question_set(self.provider.as_ref(), quiz_type)
            .await
            .into_session()
            .with_time_limit(self.time_limit_secs)
            .with_clock(self.clock)
    }

    /// Load questions and start the countdown on the current runtime.
    pub async fn start_session(&self, quiz_type: &QuizType) -> RunningQuiz {
        let session = self.prepare_session(quiz_type).await;
        let (handle, task) = spawn_session(session, self.driver);
        RunningQuiz { handle, task }
    }
}
