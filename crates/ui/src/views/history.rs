use dioxus::prelude::*;
use oedipus_core::interact::Selection;
use oedipus_core::model::SectionId;

use crate::context::AppContext;

#[component]
pub fn HistorySection() -> Element {
    let content = use_context::<AppContext>().content();
    let history = &content.history;
    let mut location = use_signal(Selection::default);
    let selected = location
        .read()
        .selected()
        .and_then(|index| history.locations.get(index));

    rsx! {
        section { id: SectionId::History.as_str(), class: "section history",
            h2 { class: "section-title", "Historical Context" }

            ol { class: "history-timeline",
                for event in history.timeline.iter() {
                    li { class: "history-event",
                        span { class: "history-year", "{event.year}" }
                        h3 { "{event.title}" }
                        p { "{event.description}" }
                    }
                }
            }

            div { class: "locations",
                h3 { "Places of the Play" }
                div { class: "location-picker",
                    for (index, place) in history.locations.iter().enumerate() {
                        button {
                            key: "{place.name}",
                            class: if location.read().is_selected(index) { "location location--selected" } else { "location" },
                            r#type: "button",
                            onclick: move |_| location.write().select(index),
                            "{place.name}"
                        }
                    }
                }
                if let Some(place) = selected {
                    div { class: "location-detail",
                        h4 { "{place.name}" }
                        p { "{place.description}" }
                        p { class: "location-significance", "{place.significance}" }
                    }
                } else {
                    p { class: "muted", "Select a place to learn its role in the tragedy." }
                }
            }

            div { class: "structure",
                h3 { "Structure of Greek Tragedy" }
                dl {
                    for term in history.structure.iter() {
                        dt { "{term.term}" }
                        dd { "{term.definition}" }
                    }
                }
            }
        }
    }
}
