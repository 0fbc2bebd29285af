use dioxus::prelude::*;
use oedipus_core::games::FlipCards;
use oedipus_core::model::SectionId;

use crate::context::AppContext;

#[component]
pub fn CharactersSection() -> Element {
    let content = use_context::<AppContext>().content();
    let mut cards = use_signal(FlipCards::default);

    rsx! {
        section { id: SectionId::Characters.as_str(), class: "section characters",
            h2 { class: "section-title", "Characters" }
            p { class: "section-intro", "Click a card to reveal what each figure stands for." }

            div { class: "character-grid",
                for (index, character) in content.characters.iter().enumerate() {
                    div {
                        key: "{character.name}",
                        class: if cards.read().is_flipped(index) { "flip-card flip-card--flipped" } else { "flip-card" },
                        onclick: move |_| cards.write().toggle(index),
                        div { class: "flip-card-front",
                            h3 { "{character.name}" }
                            p { class: "character-role", "{character.role}" }
                            ul { class: "character-traits",
                                for trait_name in character.traits.iter() {
                                    li { "{trait_name}" }
                                }
                            }
                        }
                        div { class: "flip-card-back",
                            h4 { "Symbolism" }
                            p { "{character.symbolism}" }
                            blockquote { "“{character.quote}”" }
                        }
                    }
                }
            }
        }
    }
}
