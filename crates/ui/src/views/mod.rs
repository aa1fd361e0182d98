mod home;
mod question;
mod quiz;
mod state;
mod summary;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use question::QuestionPanel;
pub use quiz::QuizView;
pub use state::{QuizViewState, quiz_view_state};
pub use summary::SummaryPanel;
