use std::time::Duration;

use oedipus_core::games::PendingAdvance;
use tracing::debug;

/// How long the answer and explanation stay visible before the next question.
pub const DEFAULT_QUIZ_DELAY: Duration = Duration::from_secs(2);

/// Delays a quiz advance.
///
/// The returned future does nothing but wait; the caller owns the task it runs
/// in and drops or cancels it when the quiz is reset or torn down. A token that
/// outlives its quiz run is rejected by `QuizState::advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizTimer {
    delay: Duration,
}

impl Default for QuizTimer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIZ_DELAY)
    }
}

impl QuizTimer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the delay, then hand the token back for `QuizState::advance`.
    pub async fn wait(&self, pending: PendingAdvance) -> PendingAdvance {
        debug!(delay_ms = self.delay.as_millis() as u64, "quiz advance scheduled");
        tokio::time::sleep(self.delay).await;
        pending
    }
}
