//! Search and category filtering over the catalog entries.

use crate::model::{CatalogEntry, CategoryFilter, EntryId};

/// User-editable filter inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
}

impl FilterState {
    #[must_use]
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Back to `{ query: "", category: All }`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.query.is_empty() && self.category == CategoryFilter::All
    }

    #[must_use]
    pub fn admits(&self, entry: &CatalogEntry) -> bool {
        self.category.admits(entry.category) && matches_query(entry, &self.query)
    }
}

/// Case-insensitive substring match against title, content, or any tag.
///
/// An empty query matches every entry.
#[must_use]
pub fn matches_query(entry: &CatalogEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    entry.title.to_lowercase().contains(&needle)
        || entry.content.to_lowercase().contains(&needle)
        || entry
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// The visible subsequence of `entries`, in their original order.
#[must_use]
pub fn filter_entries<'a>(entries: &'a [CatalogEntry], filter: &FilterState) -> Vec<&'a CatalogEntry> {
    entries.iter().filter(|entry| filter.admits(entry)).collect()
}

/// At most one expanded entry at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntryExpander {
    expanded: Option<EntryId>,
}

impl EntryExpander {
    #[must_use]
    pub fn expanded(&self) -> Option<EntryId> {
        self.expanded
    }

    #[must_use]
    pub fn is_expanded(&self, id: EntryId) -> bool {
        self.expanded == Some(id)
    }

    /// Expands `id`, or collapses it when it is already the expanded entry.
    pub fn toggle(&mut self, id: EntryId) {
        self.expanded = if self.is_expanded(id) { None } else { Some(id) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn entry(id: u32, category: Category, title: &str, content: &str, tags: &[&str]) -> CatalogEntry {
        CatalogEntry {
            id: EntryId::new(id),
            category,
            title: title.to_string(),
            subtitle: String::new(),
            content: content.to_string(),
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        }
    }

    fn sample() -> Vec<CatalogEntry> {
        vec![
            entry(1, Category::Author, "Sophocles", "Ancient Greek tragedian.", &["Playwright"]),
            entry(4, Category::Characters, "Tiresias", "Blind, yet sees the truth.", &["Prophet", "Blind"]),
            entry(8, Category::Story, "The Sphinx", "Oedipus solves the riddle.", &["Riddle"]),
            entry(11, Category::Themes, "Fate vs. Free Will", "Can humans escape destiny?", &["Destiny"]),
        ]
    }

    fn ids(entries: &[&CatalogEntry]) -> Vec<u32> {
        entries.iter().map(|entry| entry.id.value()).collect()
    }

    #[test]
    fn cleared_filter_returns_everything() {
        let entries = sample();
        let visible = filter_entries(&entries, &FilterState::default());
        assert_eq!(ids(&visible), vec![1, 4, 8, 11]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let entries = sample();
        let by_title = filter_entries(&entries, &FilterState::new("tiresias", CategoryFilter::All));
        assert_eq!(ids(&by_title), vec![4]);

        let by_tag = filter_entries(&entries, &FilterState::new("PROPHET", CategoryFilter::All));
        assert_eq!(ids(&by_tag), vec![4]);

        let by_content = filter_entries(&entries, &FilterState::new("Riddle", CategoryFilter::All));
        assert_eq!(ids(&by_content), vec![8]);
    }

    #[test]
    fn category_and_query_are_conjunctive() {
        let entries = sample();
        let filter = FilterState::new("the", CategoryFilter::Only(Category::Story));
        assert_eq!(ids(&filter_entries(&entries, &filter)), vec![8]);

        let filter = FilterState::new("sphinx", CategoryFilter::Only(Category::Themes));
        assert!(filter_entries(&entries, &filter).is_empty());
    }

    #[test]
    fn subtitle_is_not_searched() {
        let mut entries = sample();
        entries[0].subtitle = "c. 497 BCE".to_string();
        let filter = FilterState::new("497", CategoryFilter::All);
        assert!(filter_entries(&entries, &filter).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let entries = sample();
        let filter = FilterState::new("e", CategoryFilter::All);
        let once = filter_entries(&entries, &filter);
        let owned: Vec<CatalogEntry> = once.iter().map(|entry| (*entry).clone()).collect();
        let twice = filter_entries(&owned, &filter);
        assert_eq!(ids(&once), ids(&twice));
        assert_eq!(ids(&once), ids(&filter_entries(&entries, &filter)));
    }

    #[test]
    fn clear_resets_both_inputs() {
        let mut filter = FilterState::new("fate", CategoryFilter::Only(Category::Themes));
        assert!(!filter.is_cleared());
        filter.clear();
        assert!(filter.is_cleared());
    }

    #[test]
    fn expander_keeps_one_entry_open() {
        let mut expander = EntryExpander::default();
        expander.toggle(EntryId::new(1));
        expander.toggle(EntryId::new(4));
        assert_eq!(expander.expanded(), Some(EntryId::new(4)));
        expander.toggle(EntryId::new(4));
        assert_eq!(expander.expanded(), None);
    }
}
