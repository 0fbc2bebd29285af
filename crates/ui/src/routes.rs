use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::PageView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", PageView)] Page {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Outlet::<Route> {}
            footer { class: "site-footer",
                p { "A Journey Through Ancient Greek Tragedy" }
                p { "© 2025 Oedipus Rex" }
            }
        }
    }
}
