use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::catalog::{CatalogEntry, EntryId};
use crate::model::content::pages::{
    AuthorContent, Character, GamesContent, HeroContent, HistoryContent, ModernContent,
    StoryChapter, ThemesContent,
};

//
// ─── CONTENT TYPES ─────────────────────────────────────────────────────────────
//

/// The whole read-only dataset rendered by the page.
///
/// Loaded once at start-up, validated, then shared behind an `Arc`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub hero: HeroContent,
    pub author: AuthorContent,
    pub story: Vec<StoryChapter>,
    pub characters: Vec<Character>,
    pub history: HistoryContent,
    pub themes: ThemesContent,
    pub games: GamesContent,
    pub modern: ModernContent,
    pub catalog: Vec<CatalogEntry>,
}

//
// ─── CONTENT VALIDATION ERRORS ─────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentValidationError {
    #[error("the quiz has no questions")]
    EmptyQuiz,

    #[error("quiz question {index} has no options")]
    QuizWithoutOptions { index: usize },

    #[error("quiz question {index} marks option {correct} correct but has {options} options")]
    CorrectAnswerOutOfRange {
        index: usize,
        correct: usize,
        options: usize,
    },

    #[error("the prophecy simulator has no scenarios")]
    EmptyProphecy,

    #[error("prophecy scenario {index} has no choices")]
    ScenarioWithoutChoices { index: usize },

    #[error("the chorus has no quotes")]
    EmptyChorus,

    #[error("story chapter {index} offers a decision without choices")]
    DecisionWithoutChoices { index: usize },

    #[error("the author timeline is empty")]
    EmptyAuthorTimeline,

    #[error("the opinion poll has no options")]
    EmptyPoll,

    #[error("duplicate catalog entry id {0}")]
    DuplicateEntryId(EntryId),

    #[error("duplicate character name: {0}")]
    DuplicateCharacter(String),
}

//
// ─── CONTENT IMPL ──────────────────────────────────────────────────────────────
//

impl Content {
    /// Check the structural invariants the interactive components rely on.
    ///
    /// # Errors
    ///
    /// Returns the first `ContentValidationError` found.
    pub fn validate(&self) -> Result<(), ContentValidationError> {
        self.validate_games()?;

        for (index, chapter) in self.story.iter().enumerate() {
            let empty_decision = chapter
                .decision
                .as_ref()
                .is_some_and(|decision| decision.choices.is_empty());
            if empty_decision {
                return Err(ContentValidationError::DecisionWithoutChoices { index });
            }
        }

        if self.author.timeline.is_empty() {
            return Err(ContentValidationError::EmptyAuthorTimeline);
        }
        if self.modern.poll.options.is_empty() {
            return Err(ContentValidationError::EmptyPoll);
        }

        let mut names = HashSet::new();
        for character in &self.characters {
            if !names.insert(character.name.as_str()) {
                return Err(ContentValidationError::DuplicateCharacter(
                    character.name.clone(),
                ));
            }
        }

        let mut ids = HashSet::new();
        for entry in &self.catalog {
            if !ids.insert(entry.id) {
                return Err(ContentValidationError::DuplicateEntryId(entry.id));
            }
        }

        Ok(())
    }

    fn validate_games(&self) -> Result<(), ContentValidationError> {
        let games = &self.games;
        if games.quiz.is_empty() {
            return Err(ContentValidationError::EmptyQuiz);
        }
        for (index, question) in games.quiz.iter().enumerate() {
            if question.options.is_empty() {
                return Err(ContentValidationError::QuizWithoutOptions { index });
            }
            if question.correct >= question.options.len() {
                return Err(ContentValidationError::CorrectAnswerOutOfRange {
                    index,
                    correct: question.correct,
                    options: question.options.len(),
                });
            }
        }

        if games.prophecy.is_empty() {
            return Err(ContentValidationError::EmptyProphecy);
        }
        if let Some(index) = games.prophecy.iter().position(|s| s.choices.is_empty()) {
            return Err(ContentValidationError::ScenarioWithoutChoices { index });
        }

        if games.chorus.is_empty() {
            return Err(ContentValidationError::EmptyChorus);
        }
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
