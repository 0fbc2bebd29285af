use dioxus::prelude::*;
use oedipus_core::model::SectionId;

use crate::context::AppContext;

#[component]
pub fn HeroSection(on_start: EventHandler<()>) -> Element {
    let content = use_context::<AppContext>().content();
    let hero = &content.hero;

    rsx! {
        section { id: SectionId::Hero.as_str(), class: "section hero",
            div { class: "hero-inner",
                h1 { class: "hero-title", "{hero.title}" }
                p { class: "hero-subtitle", "{hero.subtitle}" }
                p { class: "hero-tagline", "{hero.tagline}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_start.call(()),
                    "{hero.call_to_action}"
                }
            }
        }
    }
}
