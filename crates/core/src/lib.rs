#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;
pub mod time;

pub use error::Error;
pub use model::{
    AnsweredQuestion, Difficulty, OptionKey, PresentationOrder, Question, QuestionError,
    TimeBudget,
};
pub use session::{
    FinishReason, PendingAdvance, QuizSession, QuizSummary, SessionPhase, SessionSnapshot,
    SubmitOutcome, TickOutcome,
};
pub use time::Clock;
