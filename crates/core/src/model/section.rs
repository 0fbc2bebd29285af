use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named, vertically stacked region of the page.
///
/// The declared order of [`SectionId::ALL`] is the page order and the order
/// in which the tracker resolves overlapping bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    Author,
    Story,
    Characters,
    History,
    Themes,
    Games,
    Modern,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Hero,
        SectionId::Author,
        SectionId::Story,
        SectionId::Characters,
        SectionId::History,
        SectionId::Themes,
        SectionId::Games,
        SectionId::Modern,
    ];

    /// The first section; the active section before any scroll event.
    pub const FIRST: SectionId = SectionId::Hero;

    /// Stable DOM id of the section element.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Author => "author",
            SectionId::Story => "story",
            SectionId::Characters => "characters",
            SectionId::History => "history",
            SectionId::Themes => "themes",
            SectionId::Games => "games",
            SectionId::Modern => "modern",
        }
    }

    /// Label shown in the navigation bar.
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Author => "Sophocles",
            SectionId::Story => "The Story",
            SectionId::Characters => "Characters",
            SectionId::History => "History",
            SectionId::Themes => "Themes",
            SectionId::Games => "Interactive",
            SectionId::Modern => "Modern Relevance",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown section id: {0}")]
pub struct ParseSectionError(pub String);

impl FromStr for SectionId {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// Vertical extent of a rendered section, in document pixels.
///
/// The interval is half-open: `[top, top + height)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_round_trip_through_dom_ids() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_dom_id_is_an_error() {
        let err = "database".parse::<SectionId>().unwrap_err();
        assert_eq!(err, ParseSectionError("database".to_string()));
    }

    #[test]
    fn bounds_are_half_open() {
        let bounds = SectionBounds::new(100.0, 150.0);
        assert!(bounds.contains(100.0));
        assert!(bounds.contains(249.9));
        assert!(!bounds.contains(250.0));
        assert!(!bounds.contains(99.9));
    }

    #[test]
    fn zero_height_bounds_contain_nothing() {
        let bounds = SectionBounds::new(10.0, 0.0);
        assert!(!bounds.contains(10.0));
    }
}
