use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for a catalog entry
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u32);

impl EntryId {
    /// Creates a new `EntryId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryId({})", self.0)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Author,
    Characters,
    Story,
    Themes,
    History,
    Quotes,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Author,
        Category::Characters,
        Category::Story,
        Category::Themes,
        Category::History,
        Category::Quotes,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Author => "author",
            Category::Characters => "characters",
            Category::Story => "story",
            Category::Themes => "themes",
            Category::History => "history",
            Category::Quotes => "quotes",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Author => "Author",
            Category::Characters => "Characters",
            Category::Story => "Story",
            Category::Themes => "Themes",
            Category::History => "History",
            Category::Quotes => "Quotes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Category selector of the catalog filter: everything, or a single category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// All selectable filters in display order, starting with `All`.
    #[must_use]
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    #[must_use]
    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == category,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

/// One static record in the searchable catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub category: Category,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
