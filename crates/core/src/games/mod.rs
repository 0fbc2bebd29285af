//! State machines behind the "Interactive" section.

mod chorus;
mod flip;
mod prophecy;
mod quiz;

pub use chorus::{ChorusMode, ChorusState};
pub use flip::FlipCards;
pub use prophecy::ProphecyState;
pub use quiz::{PendingAdvance, QuizPhase, QuizState};
