mod answer;
mod budget;
mod difficulty;
mod option;
mod order;
mod question;

pub use answer::AnsweredQuestion;
pub use budget::TimeBudget;
pub use difficulty::Difficulty;
pub use option::OptionKey;
pub use order::PresentationOrder;
pub use question::{Question, QuestionError};
