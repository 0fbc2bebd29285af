mod catalog;
pub mod content;
mod section;

pub use catalog::{CatalogEntry, Category, CategoryFilter, EntryId, ParseCategoryError};
pub use content::{
    Character, Content, ContentValidationError, QuizQuestion, Scenario, ScenarioChoice,
    StoryChapter,
};
pub use section::{ParseSectionError, SectionBounds, SectionId};
