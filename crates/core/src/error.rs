use thiserror::Error;

use crate::model::QuestionError;
use crate::session::SummaryError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
