use std::sync::Arc;

use services::{QuizLoopService, QuizType};

pub trait UiApp: Send + Sync {
    fn default_quiz_type(&self) -> QuizType;
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    default_quiz_type: QuizType,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            default_quiz_type: app.default_quiz_type(),
            quiz_loop: app.quiz_loop(),
        }
    }

    #[must_use]
    pub fn default_quiz_type(&self) -> &QuizType {
        &self.default_quiz_type
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
