use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::ProviderError;
use crate::provider::{QuestionProvider, QuestionSet, QuizType, QuestionsResponse};

/// Fetches question sets from `{base_url}/questions/{type}`.
#[derive(Clone, Debug)]
pub struct HttpQuestionProvider {
    client: Client,
    base_url: Url,
}

impl HttpQuestionProvider {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Url of the question set for `quiz_type`, with the type escaped as a path segment.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidBaseUrl` for urls that cannot have a path (e.g. `mailto:`).
    pub fn questions_url(&self, quiz_type: &QuizType) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ProviderError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("questions")
            .push(quiz_type.as_str());
        Ok(url)
    }
}

#[async_trait]
impl QuestionProvider for HttpQuestionProvider {
    async fn fetch(&self, quiz_type: &QuizType) -> Result<QuestionSet, ProviderError> {
        let url = self.questions_url(quiz_type)?;
        debug!(%url, "fetching questions");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }

        let body: QuestionsResponse = response.json().await?;
        body.into_question_set()
    }
}
