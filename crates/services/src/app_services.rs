use std::sync::Arc;
use std::time::Duration;

use oedipus_core::games::ChorusMode;
use oedipus_core::model::Content;
use tracing::info;

use crate::chorus::ChorusPicker;
use crate::content_service::{ContentSource, load_content};
use crate::error::AppServicesError;
use crate::quiz_timer::{DEFAULT_QUIZ_DELAY, QuizTimer};

/// Start-up knobs resolved by the binary from flags and environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub content: ContentSource,
    pub quiz_delay: Duration,
    pub chorus_mode: ChorusMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            content: ContentSource::Bundled,
            quiz_delay: DEFAULT_QUIZ_DELAY,
            chorus_mode: ChorusMode::AllowRepeats,
        }
    }
}

/// Assembles the read-only dataset and the helpers the UI needs.
#[derive(Clone)]
pub struct AppServices {
    content: Arc<Content>,
    quiz_timer: QuizTimer,
    chorus: ChorusPicker,
}

impl AppServices {
    /// Load content and build services from `config`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the content cannot be loaded.
    pub fn new(config: &AppConfig) -> Result<Self, AppServicesError> {
        let content = load_content(&config.content)?;
        info!(
            quiz_delay_ms = config.quiz_delay.as_millis() as u64,
            chorus_mode = ?config.chorus_mode,
            "app services ready"
        );
        Ok(Self::from_content(content, config))
    }

    /// Build services around an already loaded dataset.
    #[must_use]
    pub fn from_content(content: Arc<Content>, config: &AppConfig) -> Self {
        Self {
            content,
            quiz_timer: QuizTimer::new(config.quiz_delay),
            chorus: ChorusPicker::new(config.chorus_mode),
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
