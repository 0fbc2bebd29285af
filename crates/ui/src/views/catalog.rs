use dioxus::prelude::*;
use oedipus_core::catalog::{EntryExpander, FilterState};
use oedipus_core::model::{Category, CategoryFilter};

use crate::context::AppContext;
use crate::vm::map_catalog;

fn filter_value(filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => "all",
        CategoryFilter::Only(category) => category.as_str(),
    }
}

fn parse_filter(value: &str) -> CategoryFilter {
    value
        .parse::<Category>()
        .map_or(CategoryFilter::All, CategoryFilter::Only)
}

/// Searchable list of every catalog entry, with category filter.
#[component]
pub fn CatalogExplorer() -> Element {
    let content = use_context::<AppContext>().content();
    let mut filter = use_signal(FilterState::default);
    let mut expander = use_signal(EntryExpander::default);

    let current = filter.read().clone();
    let vm = map_catalog(&content.catalog, &current, *expander.read());

    rsx! {
        div { class: "catalog",
            h3 { "Explore the World of Oedipus" }
            div { class: "catalog-controls",
                input {
                    class: "catalog-search",
                    r#type: "search",
                    placeholder: "Search characters, themes, symbols...",
                    value: "{current.query}",
                    oninput: move |evt| filter.write().query = evt.value(),
                }
                select {
                    class: "catalog-category",
                    value: filter_value(current.category),
                    onchange: move |evt| filter.write().category = parse_filter(&evt.value()),
                    for choice in CategoryFilter::options() {
                        option { key: "{filter_value(choice)}", value: filter_value(choice), "{choice.label()}" }
                    }
                }
                if !current.is_cleared() {
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| filter.write().clear(),
                        "Clear Filters"
                    }
                }
            }
            p { class: "catalog-count", "{vm.results_label}" }
            if vm.is_empty {
                p { class: "catalog-empty", "No entries match your search." }
            } else {
                div { class: "catalog-list",
                    for entry in vm.entries {
                        article {
                            key: "{entry.id}",
                            class: if entry.expanded { "catalog-entry catalog-entry--open" } else { "catalog-entry" },
                            onclick: move |_| expander.write().toggle(entry.id),
                            div { class: "catalog-entry-header",
                                span { class: entry.badge_class, "{entry.category}" }
                                h4 { "{entry.title}" }
                                p { class: "catalog-subtitle", "{entry.subtitle}" }
                            }
                            if entry.expanded {
                                div { class: "catalog-entry-body",
                                    p { "{entry.content}" }
                                    ul { class: "catalog-tags",
                                        for tag in entry.tags.iter() {
                                            li { "{tag}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
