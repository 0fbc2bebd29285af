use oedipus_core::games::{ChorusMode, ChorusState};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Picks the next chorus quote uniformly from the eligible candidates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChorusPicker {
    mode: ChorusMode,
}

impl ChorusPicker {
    #[must_use]
    pub fn new(mode: ChorusMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> ChorusMode {
        self.mode
    }

    /// Returns `None` only when there are no quotes at all.
    pub fn pick_with<R: Rng + ?Sized>(&self, state: &ChorusState, rng: &mut R) -> Option<usize> {
        state.candidates(self.mode).choose(rng).copied()
    }

    /// Pick using the thread-local generator and apply it to `state`.
    pub fn speak(&self, state: &mut ChorusState) {
        if let Some(index) = self.pick_with(state, &mut rand::rng()) {
            state.show(index);
        }
    }
}
