use oedipus_core::interact::Poll;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollOptionVm {
    pub text: String,
    pub votes_label: Option<String>,
    pub percent_label: Option<String>,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollVm {
    pub options: Vec<PollOptionVm>,
    pub can_vote: bool,
    pub footer: String,
}

#[must_use]
pub fn map_poll(options: &[String], poll: &Poll) -> PollVm {
    let voted = poll.has_voted();
    let items = options
        .iter()
        .enumerate()
        .map(|(index, text)| PollOptionVm {
            text: text.clone(),
            votes_label: voted.then(|| format!("{} votes", poll.votes(index))),
            percent_label: voted.then(|| format!("{:.1}%", poll.percentage(index))),
            selected: poll.voted_for() == Some(index),
        })
        .collect();

    let footer = if voted {
        let total = poll.total();
        let plural = if total == 1 { "" } else { "s" };
        format!("Thank you for voting! {total} total vote{plural}.")
    } else {
        "Click an option to cast your vote".to_string()
    };

    PollVm {
        options: items,
        can_vote: !voted,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["Victim".into(), "Guilty".into()]
    }

    #[test]
    fn results_hidden_until_vote() {
        let vm = map_poll(&options(), &Poll::new(2));
        assert!(vm.can_vote);
        assert!(vm.options.iter().all(|o| o.percent_label.is_none()));
        assert_eq!(vm.footer, "Click an option to cast your vote");
    }

    #[test]
    fn results_after_vote() {
        let mut poll = Poll::new(2);
        poll.vote(1);
        let vm = map_poll(&options(), &poll);
        assert!(!vm.can_vote);
        assert_eq!(vm.options[1].percent_label.as_deref(), Some("100.0%"));
        assert_eq!(vm.options[0].votes_label.as_deref(), Some("0 votes"));
        assert!(vm.options[1].selected);
        assert_eq!(vm.footer, "Thank you for voting! 1 total vote.");
    }
}
