use std::sync::Arc;

use oedipus_core::model::Content;
use services::{ChorusPicker, QuizTimer};

pub trait UiApp: Send + Sync {
    fn content(&self) -> Arc<Content>;
    fn quiz_timer(&self) -> QuizTimer;
    fn chorus(&self) -> ChorusPicker;
}

#[derive(Clone)]
pub struct AppContext {
    content: Arc<Content>,
    quiz_timer: QuizTimer,
    chorus: ChorusPicker,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            content: app.content(),
            quiz_timer: app.quiz_timer(),
            chorus: app.chorus(),
        }
    }

    #[must_use]
    pub fn content(&self) -> Arc<Content> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn quiz_timer(&self) -> QuizTimer {
        self.quiz_timer
    }

    #[must_use]
    pub fn chorus(&self) -> ChorusPicker {
        self.chorus
    }
}

// Provided once by the binary via `LaunchBuilder::with_context`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
