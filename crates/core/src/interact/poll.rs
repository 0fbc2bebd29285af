/// One-vote-per-session opinion poll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poll {
    votes: Vec<u32>,
    voted: Option<usize>,
}

impl Poll {
    #[must_use]
    pub fn new(options: usize) -> Self {
        Self {
            votes: vec![0; options],
            voted: None,
        }
    }

    #[must_use]
    pub fn has_voted(&self) -> bool {
        self.voted.is_some()
    }

    #[must_use]
    pub fn voted_for(&self) -> Option<usize> {
        self.voted
    }

    #[must_use]
    pub fn votes(&self, option: usize) -> u32 {
        self.votes.get(option).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.votes.iter().sum()
    }

    /// Share of the vote for `option`, in percent. Zero when nobody voted.
    #[must_use]
    pub fn percentage(&self, option: usize) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.votes(option)) / f64::from(total) * 100.0
    }

    /// Cast a vote. Returns `false` if a vote was already cast or the option
    /// does not exist.
    pub fn vote(&mut self, option: usize) -> bool {
        if self.voted.is_some() {
            return false;
        }
        let Some(count) = self.votes.get_mut(option) else {
            return false;
        };
        *count += 1;
        self.voted = Some(option);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_vote_counts() {
        let mut poll = Poll::new(4);
        assert!(poll.vote(2));
        assert!(!poll.vote(1));
        assert_eq!(poll.total(), 1);
        assert_eq!(poll.voted_for(), Some(2));
        assert!((poll.percentage(2) - 100.0).abs() < f64::EPSILON);
        assert!(poll.percentage(1).abs() < f64::EPSILON);
    }

    #[test]
    fn no_votes_means_zero_percent() {
        let poll = Poll::new(2);
        assert!(poll.percentage(0).abs() < f64::EPSILON);
        assert!(!poll.has_voted());
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut poll = Poll::new(2);
        assert!(!poll.vote(5));
        assert!(!poll.has_voted());
    }
}
