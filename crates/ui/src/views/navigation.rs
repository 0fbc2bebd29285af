use dioxus::prelude::*;
use oedipus_core::model::SectionId;

use crate::vm::map_nav_links;

#[component]
pub fn NavBar(
    active: SectionId,
    menu_open: bool,
    scrolled: bool,
    on_navigate: EventHandler<SectionId>,
    on_toggle_menu: EventHandler<()>,
) -> Element {
    let links = map_nav_links(active);
    let nav_class = if scrolled { "navbar navbar--scrolled" } else { "navbar" };
    let menu_class = if menu_open { "nav-links nav-links--open" } else { "nav-links" };
    let toggle_label = if menu_open { "✕" } else { "☰" };

    rsx! {
        nav { class: "{nav_class}",
            div { class: "nav-inner",
                button {
                    class: "nav-brand",
                    r#type: "button",
                    onclick: move |_| on_navigate.call(SectionId::FIRST),
                    "Oedipus Rex"
                }
                button {
                    class: "nav-toggle",
                    r#type: "button",
                    aria_label: "Toggle menu",
                    onclick: move |_| on_toggle_menu.call(()),
                    "{toggle_label}"
                }
                ul { class: "{menu_class}",
                    for link in links {
                        li { key: "{link.id}",
                            button {
                                class: link.class(),
                                r#type: "button",
                                onclick: move |_| on_navigate.call(link.id),
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
