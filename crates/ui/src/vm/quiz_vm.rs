use oedipus_core::games::{QuizPhase, QuizState};
use oedipus_core::model::QuizQuestion;

/// How an option button renders in the current phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOptionState {
    /// Clickable, nothing revealed yet.
    Open,
    /// The right answer, revealed.
    Correct,
    /// The player's wrong pick, revealed.
    Wrong,
    /// Any other option once revealed.
    Dimmed,
}

impl QuizOptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            QuizOptionState::Open => "quiz-option",
            QuizOptionState::Correct => "quiz-option quiz-option--correct",
            QuizOptionState::Wrong => "quiz-option quiz-option--wrong",
            QuizOptionState::Dimmed => "quiz-option quiz-option--dimmed",
        }
    }

    #[must_use]
    pub fn marker(self) -> Option<&'static str> {
        match self {
            QuizOptionState::Correct => Some("✓"),
            QuizOptionState::Wrong => Some("✗"),
            QuizOptionState::Open | QuizOptionState::Dimmed => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub index: usize,
    pub text: String,
    pub state: QuizOptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizVm {
    Question {
        progress_label: String,
        score_label: Option<String>,
        question: String,
        options: Vec<QuizOptionVm>,
        explanation: Option<String>,
    },
    Finished {
        score_label: String,
    },
}

#[must_use]
pub fn map_quiz(questions: &[QuizQuestion], state: &QuizState) -> QuizVm {
    let (index, revealed) = match state.phase(questions) {
        QuizPhase::Finished { score, total } => {
            return QuizVm::Finished {
                score_label: format!("Your score: {score} / {total}"),
            };
        }
        QuizPhase::Asking { index } => (index, None),
        QuizPhase::Revealed {
            index, selected, ..
        } => (index, Some(selected)),
    };

    let Some(question) = questions.get(index) else {
        return QuizVm::Finished {
            score_label: format!("Your score: {} / {}", state.score(), state.total()),
        };
    };

    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(option, text)| {
            let option_state = match revealed {
                None => QuizOptionState::Open,
                Some(_) if question.is_correct(option) => QuizOptionState::Correct,
                Some(selected) if selected == option => QuizOptionState::Wrong,
                Some(_) => QuizOptionState::Dimmed,
            };
            QuizOptionVm {
                index: option,
                text: text.clone(),
                state: option_state,
            }
        })
        .collect();

    QuizVm::Question {
        progress_label: format!("Question {} of {}", index + 1, questions.len()),
        score_label: state
            .has_answers()
            .then(|| format!("Score: {}", state.score())),
        question: question.question.clone(),
        options,
        explanation: revealed.map(|_| question.explanation.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<QuizQuestion> {
        vec![QuizQuestion {
            question: "What does the Sphinx symbolize?".into(),
            options: vec!["Evil".into(), "Power".into(), "Mystery and knowledge".into()],
            correct: 2,
            explanation: "The limits of human knowledge.".into(),
        }]
    }

    #[test]
    fn fresh_quiz_has_no_score_label() {
        let questions = questions();
        let vm = map_quiz(&questions, &QuizState::new(1));
        let QuizVm::Question {
            progress_label,
            score_label,
            options,
            explanation,
            ..
        } = vm
        else {
            panic!("expected question");
        };
        assert_eq!(progress_label, "Question 1 of 1");
        assert_eq!(score_label, None);
        assert!(options.iter().all(|o| o.state == QuizOptionState::Open));
        assert_eq!(explanation, None);
    }

    #[test]
    fn wrong_pick_reveals_correct_answer() {
        let questions = questions();
        let mut state = QuizState::new(1);
        state.select(&questions, 0).expect("accepted");
        let QuizVm::Question {
            options,
            explanation,
            score_label,
            ..
        } = map_quiz(&questions, &state)
        else {
            panic!("expected question");
        };
        assert_eq!(options[0].state, QuizOptionState::Wrong);
        assert_eq!(options[1].state, QuizOptionState::Dimmed);
        assert_eq!(options[2].state, QuizOptionState::Correct);
        assert_eq!(explanation.as_deref(), Some("The limits of human knowledge."));
        assert_eq!(score_label.as_deref(), Some("Score: 0"));
    }

    #[test]
    fn finished_quiz_shows_score() {
        let questions = questions();
        let mut state = QuizState::new(1);
        let pending = state.select(&questions, 2).expect("accepted");
        state.advance(pending);
        assert_eq!(
            map_quiz(&questions, &state),
            QuizVm::Finished {
                score_label: "Your score: 1 / 1".to_string()
            }
        );
    }
}
