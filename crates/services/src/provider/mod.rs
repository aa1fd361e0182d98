//! Question data providers.
//!
//! A provider turns a quiz type into a raw question list plus the order the
//! questions should be shown in. Callers that only want something renderable
//! go through [`load_question_set`], which never fails.

mod fixed;
mod http;
mod wire;

use std::fmt;

use async_trait::async_trait;
use tracing::{info, warn};

use quiz_core::{PresentationOrder, Question, QuizSession};

use crate::error::{ConfigError, ProviderError};

pub use fixed::StaticQuestionProvider;
pub use http::HttpQuestionProvider;
pub use wire::{QuestionsResponse, RawQuestion};

/// Identifier of a question set, used as the last path segment of the fetch url.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuizType(String);

impl QuizType {
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyQuizType` for blank identifiers.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(ConfigError::EmptyQuizType);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for QuizType {
    fn default() -> Self {
        Self("general".to_string())
    }
}

impl fmt::Display for QuizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw questions in storage order plus the order to present them in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
    pub order: PresentationOrder,
}

impl QuestionSet {
    #[must_use]
    pub fn new(questions: Vec<Question>, order: PresentationOrder) -> Self {
        Self { questions, order }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Reorder into a fresh session.
    #[must_use]
    pub fn into_session(self) -> QuizSession {
        QuizSession::new(&self.questions, &self.order)
    }
}

#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// Fetch the question set for `quiz_type`.
    async fn fetch(&self, quiz_type: &QuizType) -> Result<QuestionSet, ProviderError>;
}

/// Fetch a question set, degrading every failure to an empty set.
///
/// An empty set keeps the session in `Loading`, which the view renders as
/// "unavailable".
pub async fn load_question_set(provider: &dyn QuestionProvider, quiz_type: &QuizType) -> QuestionSet {
    match provider.fetch(quiz_type).await {
        Ok(set) => {
            info!(
                %quiz_type,
                questions = set.questions.len(),
                order = set.order.len(),
                "question set loaded"
            );
            set
        }
        Err(err) => {
            warn!(%quiz_type, error = %err, "question fetch failed; continuing without questions");
            QuestionSet::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingProvider;

    #[async_trait]
    impl QuestionProvider for FailingProvider {
        async fn fetch(&self, _quiz_type: &QuizType) -> Result<QuestionSet, ProviderError> {
            Err(ProviderError::InvalidBaseUrl("nowhere".to_string()))
        }
    }

    #[tokio::test]
    async fn failures_degrade_to_empty_set() {
        let set = load_question_set(&FailingProvider, &QuizType::default()).await;
        assert!(set.is_empty());
        assert!(set.order.is_empty());
        assert_eq!(set.into_session().phase(), quiz_core::SessionPhase::Loading);
    }

    #[test]
    fn quiz_type_trims_and_rejects_blank() {
        assert_eq!(QuizType::new(" math ").unwrap().as_str(), "math");
        assert!(matches!(QuizType::new(""), Err(ConfigError::EmptyQuizType)));
    }
}
