use dioxus::document::{EvalError, eval};
use dioxus::prelude::*;
use oedipus_core::model::SectionId;
use oedipus_core::navigation::{NavBarState, SectionTracker};
use tracing::{debug, warn};

use crate::bridge::LayoutSnapshot;
use crate::views::{
    AuthorSection, CharactersSection, GamesSection, HeroSection, HistorySection, ModernSection,
    NavBar, StorySection, ThemesSection,
};

mod scripts;

fn navigate(mut nav: Signal<NavBarState>, section: SectionId) {
    nav.write().link_followed();
    debug!(%section, "scrolling to section");
    let _ = eval(&scripts::scroll_into_view_script(section));
}

#[component]
pub fn PageView() -> Element {
    let mut tracker = use_signal(SectionTracker::new);
    let mut nav = use_signal(NavBarState::default);

    use_future(move || async move {
        let order = tracker.peek().order().to_vec();
        let mut bridge = eval(&scripts::scroll_bridge_script(&order));
        loop {
            let snapshot = match bridge.recv::<LayoutSnapshot>().await {
                Ok(snapshot) => snapshot,
                Err(EvalError::Serialization(err)) => {
                    debug!(error = %err, "ignoring malformed layout message");
                    continue;
                }
                Err(err) => {
                    warn!(error = ?err, "scroll bridge closed");
                    break;
                }
            };
            let viewport = snapshot.viewport();

            let mut next = tracker.peek().clone();
            if next.observe(viewport, &snapshot) {
                debug!(section = %next.active(), "active section changed");
                tracker.set(next);
            }
            if nav.peek().scrolled != viewport.is_scrolled() {
                nav.write().observe(viewport);
            }
        }
    });

    let active = tracker.read().active();
    let nav_state = *nav.read();

    rsx! {
        NavBar {
            active,
            menu_open: nav_state.menu_open,
            scrolled: nav_state.scrolled,
            on_navigate: move |section| navigate(nav, section),
            on_toggle_menu: move |_| nav.write().toggle_menu(),
        }
        main { class: "page",
            HeroSection { on_start: move |_| navigate(nav, SectionId::Author) }
            AuthorSection {}
            StorySection {}
            CharactersSection {}
            HistorySection {}
            ThemesSection {}
            GamesSection {}
            ModernSection {}
        }
    }
}
