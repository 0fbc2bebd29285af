//! Layout measurements reported by the webview.
//!
//! The scroll script posts one [`LayoutSnapshot`] per scroll or resize event.
//! The snapshot backs the tracker's [`BoundaryProvider`], so the matching
//! logic in `oedipus_core::navigation` never touches the DOM.

use oedipus_core::model::{SectionBounds, SectionId};
use oedipus_core::navigation::{BoundaryProvider, Viewport};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MeasuredSection {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LayoutSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    #[serde(default)]
    pub sections: Vec<MeasuredSection>,
}

impl LayoutSnapshot {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll_y, self.viewport_height)
    }
}

impl BoundaryProvider for LayoutSnapshot {
    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        self.sections
            .iter()
            .find(|measured| measured.id == section.as_str())
            .filter(|measured| measured.top.is_finite() && measured.height.is_finite())
            .map(|measured| SectionBounds::new(measured.top, measured.height))
    }
}
