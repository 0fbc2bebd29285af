//! Small per-component state used by the content sections.

mod carousel;
mod expander;
mod poll;
mod story;

pub use carousel::Carousel;
pub use expander::{Expander, Selection};
pub use poll::Poll;
pub use story::StoryChoices;
