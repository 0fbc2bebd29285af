use dioxus::prelude::*;
use oedipus_core::interact::{Expander, Selection};
use oedipus_core::model::SectionId;

use crate::context::AppContext;

#[component]
pub fn ThemesSection() -> Element {
    let content = use_context::<AppContext>().content();
    let themes = &content.themes;
    let mut expander = use_signal(Expander::default);
    let mut hovered = use_signal(Selection::default);

    rsx! {
        section { id: SectionId::Themes.as_str(), class: "section themes",
            h2 { class: "section-title", "Themes & Symbols" }

            div { class: "theme-list",
                for (index, theme) in themes.themes.iter().enumerate() {
                    article {
                        key: "{theme.title}",
                        class: if expander.read().is_open(index) { "theme theme--open" } else { "theme" },
                        button {
                            class: "theme-header",
                            r#type: "button",
                            onclick: move |_| expander.write().toggle(index),
                            h3 { "{theme.title}" }
                            p { "{theme.description}" }
                        }
                        if expander.read().is_open(index) {
                            div { class: "theme-body",
                                p { "{theme.explanation}" }
                                ul {
                                    for example in theme.examples.iter() {
                                        li { "{example}" }
                                    }
                                }
                                p { class: "theme-question", "{theme.question}" }
                            }
                        }
                    }
                }
            }

            div { class: "symbol-grid",
                for (index, symbol) in themes.symbols.iter().enumerate() {
                    div {
                        key: "{symbol.title}",
                        class: if hovered.read().is_selected(index) { "symbol symbol--revealed" } else { "symbol" },
                        onmouseenter: move |_| hovered.write().select(index),
                        onmouseleave: move |_| hovered.write().clear(),
                        onclick: move |_| hovered.write().select(index),
                        h4 { "{symbol.title}" }
                        if hovered.read().is_selected(index) {
                            p { class: "symbol-meaning", "{symbol.meaning}" }
                        } else {
                            p { class: "symbol-hint muted", "Hover to reveal" }
                        }
                    }
                }
            }
        }
    }
}
