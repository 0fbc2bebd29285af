use std::collections::HashSet;

/// Front/back state of the character cards, keyed by card index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlipCards {
    flipped: HashSet<usize>,
}

impl FlipCards {
    #[must_use]
    pub fn is_flipped(&self, card: usize) -> bool {
        self.flipped.contains(&card)
    }

    pub fn toggle(&mut self, card: usize) {
        if !self.flipped.remove(&card) {
            self.flipped.insert(card);
        }
    }
}
