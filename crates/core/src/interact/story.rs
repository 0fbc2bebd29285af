use std::collections::HashMap;

use crate::model::StoryChapter;

/// The reader's pick for each chapter that offers a decision.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoryChoices {
    picks: HashMap<usize, usize>,
}

impl StoryChoices {
    #[must_use]
    pub fn pick(&self, chapter: usize) -> Option<usize> {
        self.picks.get(&chapter).copied()
    }

    /// Record `choice` for `chapter`, replacing any earlier pick.
    ///
    /// Ignored for chapters without a decision and for unknown choices.
    pub fn choose(&mut self, chapters: &[StoryChapter], chapter: usize, choice: usize) {
        let valid = chapters
            .get(chapter)
            .and_then(|c| c.decision.as_ref())
            .is_some_and(|decision| choice < decision.choices.len());
        if valid {
            self.picks.insert(chapter, choice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::content::{StoryChoice, StoryDecision};

    fn chapters() -> Vec<StoryChapter> {
        vec![
            StoryChapter {
                title: "The Prophecy".into(),
                content: String::new(),
                decision: Some(StoryDecision {
                    prompt: "What should they do?".into(),
                    choices: vec![
                        StoryChoice {
                            text: "Abandon".into(),
                            consequence: "...".into(),
                        },
                        StoryChoice {
                            text: "Defy".into(),
                            consequence: "...".into(),
                        },
                    ],
                }),
            },
            StoryChapter {
                title: "The Survivor".into(),
                content: String::new(),
                decision: None,
            },
        ]
    }

    #[test]
    fn later_choice_replaces_earlier() {
        let chapters = chapters();
        let mut choices = StoryChoices::default();
        choices.choose(&chapters, 0, 0);
        choices.choose(&chapters, 0, 1);
        assert_eq!(choices.pick(0), Some(1));
    }

    #[test]
    fn chapters_without_decision_accept_nothing() {
        let chapters = chapters();
        let mut choices = StoryChoices::default();
        choices.choose(&chapters, 1, 0);
        choices.choose(&chapters, 0, 9);
        choices.choose(&chapters, 5, 0);
        assert_eq!(choices, StoryChoices::default());
    }
}
