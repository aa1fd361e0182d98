#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod error;
pub mod provider;
pub mod quiz_service;

pub use quiz_core::Clock;

pub use config::QuizConfig;
pub use driver::{DriverConfig, QuizHandle, spawn_session};
pub use error::{ConfigError, ProviderError};
pub use provider::{
    HttpQuestionProvider, QuestionProvider, QuestionSet, QuizType, StaticQuestionProvider,
    load_question_set,
};
pub use quiz_service::{QuizLoopService, RunningQuiz};
