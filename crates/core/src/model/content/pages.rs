use serde::{Deserialize, Serialize};

//
// ─── HERO / AUTHOR ─────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub call_to_action: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorFact {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeEvent {
    pub year: String,
    pub event: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorContent {
    pub heading: String,
    pub intro: String,
    pub biography: Vec<String>,
    pub facts: Vec<AuthorFact>,
    pub did_you_know: Vec<String>,
    pub timeline: Vec<LifeEvent>,
}

//
// ─── STORY / CHARACTERS ────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryChoice {
    pub text: String,
    pub consequence: String,
}

/// An optional decision point at the end of a chapter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDecision {
    pub prompt: String,
    pub choices: Vec<StoryChoice>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryChapter {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub decision: Option<StoryDecision>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub role: String,
    pub traits: Vec<String>,
    pub symbolism: String,
    pub quote: String,
}

//
// ─── HISTORY / THEMES ──────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub description: String,
    pub significance: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureTerm {
    pub term: String,
    pub definition: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryContent {
    pub timeline: Vec<HistoricalEvent>,
    pub locations: Vec<Location>,
    pub structure: Vec<StructureTerm>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub title: String,
    pub description: String,
    pub explanation: String,
    pub examples: Vec<String>,
    pub question: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub title: String,
    pub meaning: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemesContent {
    pub themes: Vec<Theme>,
    pub symbols: Vec<Symbol>,
}

//
// ─── GAMES ─────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct: usize,
    pub explanation: String,
}

impl QuizQuestion {
    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioChoice {
    pub text: String,
    pub outcome: String,
    pub tragedy: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub situation: String,
    pub choices: Vec<ScenarioChoice>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamesContent {
    pub quiz: Vec<QuizQuestion>,
    pub prophecy: Vec<Scenario>,
    pub chorus: Vec<String>,
}

//
// ─── MODERN RELEVANCE ──────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModernConnection {
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adaptation {
    pub kind: String,
    pub title: String,
    pub creator: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollContent {
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotation {
    pub text: String,
    pub attribution: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModernContent {
    pub connections: Vec<ModernConnection>,
    pub adaptations: Vec<Adaptation>,
    pub poll: PollContent,
    pub closing_quote: Quotation,
}
