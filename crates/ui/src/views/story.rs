use dioxus::prelude::*;
use oedipus_core::interact::StoryChoices;
use oedipus_core::model::SectionId;

use crate::context::AppContext;

#[component]
pub fn StorySection() -> Element {
    let content = use_context::<AppContext>().content();
    let mut picks = use_signal(StoryChoices::default);

    rsx! {
        section { id: SectionId::Story.as_str(), class: "section story",
            h2 { class: "section-title", "The Story" }
            p { class: "section-intro", "Follow the path of prophecy and choose what you would do." }

            ol { class: "chapters",
                for (index, chapter) in content.story.iter().enumerate() {
                    li { key: "{index}", class: "chapter",
                        span { class: "chapter-number", "Chapter {index + 1}" }
                        h3 { "{chapter.title}" }
                        p { "{chapter.content}" }
                        if let Some(decision) = chapter.decision.as_ref() {
                            div { class: "decision",
                                p { class: "decision-prompt", "{decision.prompt}" }
                                div { class: "decision-choices",
                                    for (choice, option) in decision.choices.iter().enumerate() {
                                        button {
                                            key: "{choice}",
                                            class: if picks.read().pick(index) == Some(choice) { "choice choice--picked" } else { "choice" },
                                            r#type: "button",
                                            onclick: {
                                                let content = content.clone();
                                                move |_| picks.write().choose(&content.story, index, choice)
                                            },
                                            "{option.text}"
                                        }
                                    }
                                }
                                if let Some(picked) = picks.read().pick(index).and_then(|choice| decision.choices.get(choice)) {
                                    p { class: "decision-consequence", "{picked.consequence}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
