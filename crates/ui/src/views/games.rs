use dioxus::prelude::*;
use dioxus::core::Task;
use oedipus_core::games::{ChorusState, ProphecyState, QuizState};
use oedipus_core::model::{QuizQuestion, SectionId};
use services::QuizTimer;
use tracing::debug;

use crate::context::AppContext;
use crate::views::CatalogExplorer;
use crate::vm::{QuizVm, map_quiz};

#[component]
pub fn GamesSection() -> Element {
    rsx! {
        section { id: SectionId::Games.as_str(), class: "section games",
            h2 { class: "section-title", "Interactive" }
            p { class: "section-intro", "Test your knowledge and step into the shoes of those bound by prophecy." }
            div { class: "games-grid",
                QuizPanel {}
                ProphecyPanel {}
                ChorusPanel {}
            }
            CatalogExplorer {}
        }
    }
}

/// Quiz state plus the task that will apply the pending advance.
#[derive(Clone, Copy)]
struct QuizControls {
    quiz: Signal<QuizState>,
    pending_task: Signal<Option<Task>>,
    timer: QuizTimer,
}

fn use_quiz_controls(total: usize, timer: QuizTimer) -> QuizControls {
    let quiz = use_signal(move || QuizState::new(total));
    let pending_task = use_signal(|| None::<Task>);
    QuizControls {
        quiz,
        pending_task,
        timer,
    }
}

impl QuizControls {
    fn has_pending(&self) -> bool {
        self.pending_task.read().is_some()
    }

    /// Record the answer and schedule the advance on the current scope.
    fn select(self, questions: &[QuizQuestion], option: usize) {
        let QuizControls {
            mut quiz,
            mut pending_task,
            timer,
        } = self;
        let Some(pending) = quiz.write().select(questions, option) else {
            return;
        };
        let task = spawn(async move {
            let pending = timer.wait(pending).await;
            if quiz.write().advance(pending) {
                debug!(index = quiz.peek().index(), "quiz advanced");
            }
            pending_task.set(None);
        });
        pending_task.set(Some(task));
    }

    fn reset(self) {
        let QuizControls {
            mut quiz,
            mut pending_task,
            ..
        } = self;
        if let Some(task) = pending_task.write().take() {
            task.cancel();
        }
        quiz.write().reset();
        debug!("quiz reset");
    }
}

#[component]
fn QuizPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();
    let controls = use_quiz_controls(content.games.quiz.len(), ctx.quiz_timer());

    let questions = content.clone();
    let on_select =
        use_callback(move |option: usize| controls.select(&questions.games.quiz, option));
    let on_reset = move |_| controls.reset();

    let vm = map_quiz(&content.games.quiz, &controls.quiz.read());

    rsx! {
        div { class: "game-card quiz",
            h3 { "Symbol Quiz" }
            match vm {
                QuizVm::Question { progress_label, score_label, question, options, explanation } => rsx! {
                    div { class: "quiz-meta",
                        span { "{progress_label}" }
                        if let Some(score) = score_label {
                            span { class: "quiz-score", "{score}" }
                        }
                    }
                    p { class: "quiz-question", "{question}" }
                    div { class: "quiz-options",
                        for option in options {
                            button {
                                key: "{option.index}",
                                class: option.state.class(),
                                r#type: "button",
                                onclick: move |_| on_select.call(option.index),
                                "{option.text}"
                                if let Some(marker) = option.state.marker() {
                                    span { class: "quiz-marker", " {marker}" }
                                }
                            }
                        }
                    }
                    if let Some(explanation) = explanation {
                        p { class: "quiz-explanation", "{explanation}" }
                    }
                },
                QuizVm::Finished { score_label } => rsx! {
                    div { class: "quiz-finished",
                        p { class: "quiz-final", "{score_label}" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: on_reset,
                            "Try Again"
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ProphecyPanel() -> Element {
    let content = use_context::<AppContext>().content();
    let count = content.games.prophecy.len();
    let mut prophecy = use_signal(move || ProphecyState::new(count));

    let state = *prophecy.read();
    let scenarios = content.clone();
    let Some(scenario) = state.current(&content.games.prophecy) else {
        return rsx! {};
    };
    let revealed = state.choice().and_then(|choice| scenario.choices.get(choice));

    rsx! {
        div { class: "game-card prophecy",
            h3 { "Prophecy Simulator" }
            span { class: "prophecy-progress", "Scenario {state.scenario() + 1} of {count}" }
            p { class: "prophecy-situation", "{scenario.situation}" }
            if let Some(choice) = revealed {
                div { class: "prophecy-outcome",
                    p { class: "prophecy-choice", "You chose: {choice.text}" }
                    p { "{choice.outcome}" }
                    p { class: "prophecy-tragedy", "{choice.tragedy}" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| prophecy.write().next(),
                        "Next Scenario"
                    }
                }
            } else {
                div { class: "prophecy-choices",
                    for (index, choice) in scenario.choices.iter().enumerate() {
                        button {
                            key: "{index}",
                            class: "choice",
                            r#type: "button",
                            onclick: {
                                let scenarios = scenarios.clone();
                                move |_| prophecy.write().choose(&scenarios.games.prophecy, index)
                            },
                            "{choice.text}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChorusPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();
    let picker = ctx.chorus();
    let count = content.games.chorus.len();
    let mut chorus = use_signal(move || ChorusState::new(count));

    let quote = content
        .games
        .chorus
        .get(chorus.read().current())
        .cloned()
        .unwrap_or_default();

    rsx! {
        div { class: "game-card chorus",
            h3 { "Greek Chorus" }
            blockquote { class: "chorus-quote", "“{quote}”" }
            button {
                class: "btn btn-ghost",
                r#type: "button",
                onclick: move |_| {
                    picker.speak(&mut chorus.write());
                    debug!(quote = chorus.peek().current(), "chorus spoke");
                },
                "Hear the Chorus"
            }
        }
    }
}
