//! Scroll-driven section tracking.
//!
//! The tracker never measures anything itself: bounds come from a
//! [`BoundaryProvider`], which the UI backs with the rendered layout and tests
//! back with fixed maps.

use std::collections::HashMap;

use crate::model::{SectionBounds, SectionId};

/// Scroll offset past which the navigation bar switches to its solid style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Supplies the current vertical bounds of rendered sections.
pub trait BoundaryProvider {
    /// Returns `None` when the section is not mounted or cannot be measured.
    fn bounds(&self, section: SectionId) -> Option<SectionBounds>;
}

impl BoundaryProvider for HashMap<SectionId, SectionBounds> {
    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        self.get(&section).copied()
    }
}

impl<P: BoundaryProvider + ?Sized> BoundaryProvider for &P {
    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        (**self).bounds(section)
    }
}

/// Viewport state sampled on a scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }

    /// The probe position: the vertical midpoint of the viewport.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.scroll_y + self.height / 2.0
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scroll_y > SCROLLED_THRESHOLD
    }
}

/// Returns the first section, in `order`, whose bounds contain `position`.
///
/// Sections the provider cannot measure are skipped.
#[must_use]
pub fn section_at<P: BoundaryProvider + ?Sized>(
    order: &[SectionId],
    provider: &P,
    position: f64,
) -> Option<SectionId> {
    order.iter().copied().find(|&section| {
        provider
            .bounds(section)
            .is_some_and(|bounds| bounds.contains(position))
    })
}

/// Holds the active section for the lifetime of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionTracker {
    order: Vec<SectionId>,
    active: SectionId,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTracker {
    /// Tracker over the page's declared section order, starting at the first section.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: SectionId::ALL.to_vec(),
            active: SectionId::FIRST,
        }
    }

    /// Tracker over a custom order. An empty order falls back to the page order.
    #[must_use]
    pub fn with_order(order: Vec<SectionId>) -> Self {
        if order.is_empty() {
            return Self::new();
        }
        let active = order[0];
        Self { order, active }
    }

    #[must_use]
    pub fn active(&self) -> SectionId {
        self.active
    }

    #[must_use]
    pub fn order(&self) -> &[SectionId] {
        &self.order
    }

    /// Re-evaluate the active section for a scroll sample.
    ///
    /// Returns `true` when the active section changed. When no section contains
    /// the viewport midpoint the previous active section is kept.
    pub fn observe<P: BoundaryProvider + ?Sized>(
        &mut self,
        viewport: Viewport,
        provider: &P,
    ) -> bool {
        match section_at(&self.order, provider, viewport.midpoint()) {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }
}

/// Navigation bar state: mobile menu and scrolled styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavBarState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavBarState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A navigation link was followed; the mobile menu closes.
    pub fn link_followed(&mut self) {
        self.menu_open = false;
    }

    pub fn observe(&mut self, viewport: Viewport) {
        self.scrolled = viewport.is_scrolled();
    }
}
