use oedipus_core::catalog::{EntryExpander, FilterState, filter_entries};
use oedipus_core::model::{CatalogEntry, Category, EntryId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntryVm {
    pub id: EntryId,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub tags: Vec<String>,
    pub category: &'static str,
    pub badge_class: String,
    pub expanded: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogVm {
    pub entries: Vec<CatalogEntryVm>,
    pub results_label: String,
    pub is_empty: bool,
}

fn badge_class(category: Category) -> String {
    format!("catalog-badge catalog-badge--{}", category.as_str())
}

#[must_use]
pub fn map_catalog(
    entries: &[CatalogEntry],
    filter: &FilterState,
    expander: EntryExpander,
) -> CatalogVm {
    let visible = filter_entries(entries, filter);
    let results_label = format!("Showing {} of {} entries", visible.len(), entries.len());
    let entries = visible
        .into_iter()
        .map(|entry| CatalogEntryVm {
            id: entry.id,
            title: entry.title.clone(),
            subtitle: entry.subtitle.clone(),
            content: entry.content.clone(),
            tags: entry.tags.clone(),
            category: entry.category.as_str(),
            badge_class: badge_class(entry.category),
            expanded: expander.is_expanded(entry.id),
        })
        .collect::<Vec<_>>();

    CatalogVm {
        is_empty: entries.is_empty(),
        entries,
        results_label,
    }
}
