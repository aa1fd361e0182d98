use std::path::Path;

use async_trait::async_trait;
use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::{PresentationOrder, Question};

use crate::error::ProviderError;
use crate::provider::{QuestionProvider, QuestionSet, QuizType, QuestionsResponse};

/// Serves a fixed question set regardless of quiz type.
///
/// Used for offline runs (`--questions file.json`) and tests. When the set
/// carries no presentation order, every question is shown once, in storage
/// order or shuffled.
#[derive(Clone, Debug, Default)]
pub struct StaticQuestionProvider {
    set: QuestionSet,
    shuffle: bool,
}

impl StaticQuestionProvider {
    #[must_use]
    pub fn new(set: QuestionSet) -> Self {
        Self {
            set,
            shuffle: false,
        }
    }

    /// Questions shown in storage order.
    #[must_use]
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self::new(QuestionSet::new(questions, PresentationOrder::default()))
    }

    /// Load a file with the same shape as the question API body.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if the file cannot be read or decoded.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let raw = tokio::fs::read_to_string(path).await?;
        let body: QuestionsResponse = serde_json::from_str(&raw)?;
        Ok(Self::new(body.into_question_set()?))
    }

    /// Shuffle the generated order when the set has none.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    fn order(&self) -> PresentationOrder {
        if !self.set.order.is_empty() {
            return self.set.order.clone();
        }
        let mut order = PresentationOrder::sequential(self.set.questions.len());
        if self.shuffle {
            let mut indices = order.indices().to_vec();
            indices.as_mut_slice().shuffle(&mut rng());
            order = PresentationOrder::new(indices);
        }
        order
    }
}

#[async_trait]
impl QuestionProvider for StaticQuestionProvider {
    async fn fetch(&self, _quiz_type: &QuizType) -> Result<QuestionSet, ProviderError> {
        Ok(QuestionSet::new(self.set.questions.clone(), self.order()))
    }
}
