use crate::model::QuizQuestion;

/// Token for a scheduled advance to the next question.
///
/// An advance only applies to the exact question and quiz run it was issued
/// for; tokens from before a reset are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAdvance {
    run: u64,
    index: usize,
}

/// What the quiz panel should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for an answer to question `index`.
    Asking { index: usize },
    /// `selected` was picked for question `index`; the advance is pending.
    Revealed {
        index: usize,
        selected: usize,
        correct: bool,
    },
    /// Every question has been answered.
    Finished { score: usize, total: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizState {
    total: usize,
    index: usize,
    selected: Option<usize>,
    score: usize,
    run: u64,
}

impl QuizState {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            index: 0,
            selected: None,
            score: 0,
            run: 0,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.index >= self.total
    }

    /// True once at least one answer has been given in this run.
    #[must_use]
    pub fn has_answers(&self) -> bool {
        self.index > 0 || self.selected.is_some()
    }

    #[must_use]
    pub fn phase(&self, questions: &[QuizQuestion]) -> QuizPhase {
        if self.is_finished() {
            return QuizPhase::Finished {
                score: self.score,
                total: self.total,
            };
        }
        match self.selected {
            None => QuizPhase::Asking { index: self.index },
            Some(selected) => QuizPhase::Revealed {
                index: self.index,
                selected,
                correct: questions
                    .get(self.index)
                    .is_some_and(|question| question.is_correct(selected)),
            },
        }
    }

    /// Record an answer for the current question.
    ///
    /// The score is updated immediately. Returns the advance to schedule, or
    /// `None` when the click is ignored: the quiz is finished, an answer is
    /// already pending, or `option` is not one of the question's options.
    pub fn select(&mut self, questions: &[QuizQuestion], option: usize) -> Option<PendingAdvance> {
        if self.is_finished() || self.selected.is_some() {
            return None;
        }
        let question = questions.get(self.index)?;
        if option >= question.options.len() {
            return None;
        }

        self.selected = Some(option);
        if question.is_correct(option) {
            self.score += 1;
        }
        Some(PendingAdvance {
            run: self.run,
            index: self.index,
        })
    }

    /// Move past the answered question. Returns `false` for stale tokens.
    pub fn advance(&mut self, pending: PendingAdvance) -> bool {
        if pending.run != self.run || pending.index != self.index || self.selected.is_none() {
            return false;
        }
        self.index += 1;
        self.selected = None;
        true
    }

    /// Start over. Outstanding advances become stale.
    pub fn reset(&mut self) {
        self.index = 0;
        self.selected = None;
        self.score = 0;
        self.run = self.run.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<QuizQuestion> {
        (0..3)
            .map(|i| QuizQuestion {
                question: format!("Q{i}"),
                options: vec!["a".into(), "b".into(), "c".into()],
                correct: i,
                explanation: String::new(),
            })
            .collect()
    }

    #[test]
    fn correct_answer_scores_once() {
        let questions = questions();
        let mut quiz = QuizState::new(questions.len());

        let pending = quiz.select(&questions, 0).expect("accepted");
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.select(&questions, 0), None);
        assert_eq!(quiz.score(), 1);
        assert_eq!(
            quiz.phase(&questions),
            QuizPhase::Revealed {
                index: 0,
                selected: 0,
                correct: true,
            }
        );

        assert!(quiz.advance(pending));
        assert!(!quiz.advance(pending));
        assert_eq!(quiz.phase(&questions), QuizPhase::Asking { index: 1 });
    }

    #[test]
    fn wrong_answer_never_scores() {
        let questions = questions();
        let mut quiz = QuizState::new(questions.len());
        quiz.select(&questions, 2).expect("accepted");
        assert_eq!(quiz.score(), 0);
        assert!(quiz.has_answers());
    }

    #[test]
    fn last_answer_reaches_terminal_state() {
        let questions = questions();
        let mut quiz = QuizState::new(questions.len());
        for (index, answer) in [0, 0, 2].into_iter().enumerate() {
            assert_eq!(quiz.index(), index);
            let pending = quiz.select(&questions, answer).expect("accepted");
            assert!(quiz.advance(pending));
        }

        assert!(quiz.is_finished());
        assert_eq!(quiz.phase(&questions), QuizPhase::Finished { score: 2, total: 3 });
        assert_eq!(quiz.select(&questions, 0), None);
    }

    #[test]
    fn reset_invalidates_pending_advance() {
        let questions = questions();
        let mut quiz = QuizState::new(questions.len());
        let pending = quiz.select(&questions, 0).expect("accepted");

        quiz.reset();
        assert!(!quiz.advance(pending));
        assert_eq!(quiz, {
            let mut fresh = QuizState::new(questions.len());
            fresh.run = 1;
            fresh
        });
        assert!(!quiz.has_answers());
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let questions = questions();
        let mut quiz = QuizState::new(questions.len());
        assert_eq!(quiz.select(&questions, 7), None);
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn empty_quiz_starts_finished() {
        let quiz = QuizState::new(0);
        assert_eq!(quiz.phase(&[]), QuizPhase::Finished { score: 0, total: 0 });
    }
}
