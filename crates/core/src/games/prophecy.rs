use crate::model::Scenario;

/// Current scenario of the prophecy simulator and the revealed choice, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProphecyState {
    count: usize,
    scenario: usize,
    choice: Option<usize>,
}

impl ProphecyState {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count,
            scenario: 0,
            choice: None,
        }
    }

    #[must_use]
    pub fn scenario(&self) -> usize {
        self.scenario
    }

    #[must_use]
    pub fn choice(&self) -> Option<usize> {
        self.choice
    }

    #[must_use]
    pub fn current<'a>(&self, scenarios: &'a [Scenario]) -> Option<&'a Scenario> {
        scenarios.get(self.scenario)
    }

    /// Reveal the outcome of `choice`. Out-of-range choices are ignored.
    pub fn choose(&mut self, scenarios: &[Scenario], choice: usize) {
        let valid = self
            .current(scenarios)
            .is_some_and(|scenario| choice < scenario.choices.len());
        if valid {
            self.choice = Some(choice);
        }
    }

    /// Move to the next scenario, wrapping around, and clear the choice.
    pub fn next(&mut self) {
        if self.count > 0 {
            self.scenario = (self.scenario + 1) % self.count;
        }
        self.choice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScenarioChoice;

    fn scenarios(count: usize) -> Vec<Scenario> {
        (0..count)
            .map(|i| Scenario {
                situation: format!("S{i}"),
                choices: vec![
                    ScenarioChoice {
                        text: "a".into(),
                        outcome: "oa".into(),
                        tragedy: "ta".into(),
                    },
                    ScenarioChoice {
                        text: "b".into(),
                        outcome: "ob".into(),
                        tragedy: "tb".into(),
                    },
                ],
            })
            .collect()
    }

    #[test]
    fn next_cycles_back_to_start() {
        let scenarios = scenarios(3);
        let mut state = ProphecyState::new(scenarios.len());
        for _ in 0..scenarios.len() {
            state.next();
        }
        assert_eq!(state.scenario(), 0);
    }

    #[test]
    fn next_clears_choice() {
        let scenarios = scenarios(3);
        let mut state = ProphecyState::new(scenarios.len());
        state.choose(&scenarios, 1);
        assert_eq!(state.choice(), Some(1));
        state.next();
        assert_eq!(state.choice(), None);
        assert_eq!(state.current(&scenarios).map(|s| s.situation.as_str()), Some("S1"));
    }

    #[test]
    fn out_of_range_choice_is_ignored() {
        let scenarios = scenarios(1);
        let mut state = ProphecyState::new(scenarios.len());
        state.choose(&scenarios, 5);
        assert_eq!(state.choice(), None);
    }

    #[test]
    fn empty_simulator_stays_put() {
        let mut state = ProphecyState::new(0);
        state.next();
        assert_eq!(state.scenario(), 0);
        assert!(state.current(&[]).is_none());
    }
}
