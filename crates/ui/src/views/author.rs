use dioxus::prelude::*;
use oedipus_core::interact::Carousel;
use oedipus_core::model::SectionId;

use crate::context::AppContext;

#[component]
pub fn AuthorSection() -> Element {
    let content = use_context::<AppContext>().content();
    let author = &content.author;
    let timeline_len = author.timeline.len();
    let mut carousel = use_signal(move || Carousel::new(timeline_len));

    let current = carousel.read().current();
    let event = author.timeline.get(current);

    rsx! {
        section { id: SectionId::Author.as_str(), class: "section author",
            h2 { class: "section-title", "{author.heading}" }
            p { class: "section-intro", "{author.intro}" }

            div { class: "author-grid",
                div { class: "author-bio",
                    for paragraph in author.biography.iter() {
                        p { "{paragraph}" }
                    }
                }
                dl { class: "author-facts",
                    for fact in author.facts.iter() {
                        div { class: "author-fact",
                            dt { "{fact.label}" }
                            dd { "{fact.value}" }
                        }
                    }
                }
            }

            div { class: "timeline-carousel",
                h3 { "Life Timeline" }
                if let Some(event) = event {
                    div { class: "timeline-card",
                        span { class: "timeline-year", "{event.year}" }
                        p { class: "timeline-event", "{event.event}" }
                    }
                }
                div { class: "carousel-controls",
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        aria_label: "Previous event",
                        onclick: move |_| carousel.write().prev(),
                        "‹"
                    }
                    div { class: "carousel-dots",
                        for index in 0..timeline_len {
                            button {
                                key: "{index}",
                                class: if index == current { "carousel-dot carousel-dot--active" } else { "carousel-dot" },
                                r#type: "button",
                                aria_label: "Show event {index + 1}",
                                onclick: move |_| carousel.write().select(index),
                            }
                        }
                    }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        aria_label: "Next event",
                        onclick: move |_| carousel.write().next(),
                        "›"
                    }
                }
            }

            if !author.did_you_know.is_empty() {
                aside { class: "did-you-know",
                    h3 { "Did You Know?" }
                    ul {
                        for fact in author.did_you_know.iter() {
                            li { "{fact}" }
                        }
                    }
                }
            }
        }
    }
}
