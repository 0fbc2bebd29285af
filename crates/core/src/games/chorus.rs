/// Whether the chorus may repeat the quote currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChorusMode {
    #[default]
    AllowRepeats,
    NoImmediateRepeat,
}

/// Index of the chorus quote on display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChorusState {
    count: usize,
    current: usize,
}

impl ChorusState {
    /// Starts on the first quote.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count, current: 0 }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Quote indices eligible for the next pick.
    ///
    /// With `NoImmediateRepeat` the current quote is excluded, unless it is
    /// the only one.
    #[must_use]
    pub fn candidates(&self, mode: ChorusMode) -> Vec<usize> {
        let all = 0..self.count;
        match mode {
            ChorusMode::NoImmediateRepeat if self.count > 1 => {
                all.filter(|&index| index != self.current).collect()
            }
            _ => all.collect(),
        }
    }

    /// Show quote `index`. Out-of-range indices are ignored.
    pub fn show(&mut self, index: usize) {
        if index < self.count {
            self.current = index;
        }
    }
}
