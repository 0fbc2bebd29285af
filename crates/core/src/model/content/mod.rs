#[allow(clippy::module_inception)]
mod content;
mod pages;

#[cfg(test)]
pub(crate) use content::fixtures;

pub use content::{Content, ContentValidationError};
pub use pages::{
    Adaptation, AuthorContent, AuthorFact, Character, GamesContent, HeroContent,
    HistoricalEvent, HistoryContent, LifeEvent, Location, ModernConnection, ModernContent,
    PollContent, QuizQuestion, Quotation, Scenario, ScenarioChoice, StoryChapter, StoryChoice,
    StoryDecision, StructureTerm, Symbol, Theme, ThemesContent,
};
