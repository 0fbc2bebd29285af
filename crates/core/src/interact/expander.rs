/// At most one open item; opening another closes the first, toggling the
/// open item closes it (theme cards).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Expander {
    open: Option<usize>,
}

impl Expander {
    #[must_use]
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

/// Single selection that does not toggle off on a repeat pick (history
/// locations, hovered symbol).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<usize>,
}

impl Selection {
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expander_toggles_single_item() {
        let mut expander = Expander::default();
        expander.toggle(1);
        assert!(expander.is_open(1));
        expander.toggle(3);
        assert!(!expander.is_open(1));
        assert!(expander.is_open(3));
        expander.toggle(3);
        assert_eq!(expander.open(), None);
    }

    #[test]
    fn selection_does_not_toggle_off() {
        let mut selection = Selection::default();
        selection.select(2);
        selection.select(2);
        assert!(selection.is_selected(2));
        selection.select(0);
        assert_eq!(selection.selected(), Some(0));
    }

    #[test]
    fn selection_clears() {
        let mut selection = Selection::default();
        selection.select(1);
        selection.clear();
        assert_eq!(selection.selected(), None);
        assert!(!selection.is_selected(1));
    }
}
