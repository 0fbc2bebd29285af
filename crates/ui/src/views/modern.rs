use dioxus::prelude::*;
use oedipus_core::interact::Poll;
use oedipus_core::model::SectionId;
use tracing::debug;

use crate::context::AppContext;
use crate::vm::map_poll;

#[component]
pub fn ModernSection() -> Element {
    let content = use_context::<AppContext>().content();
    let modern = &content.modern;

    rsx! {
        section { id: SectionId::Modern.as_str(), class: "section modern",
            h2 { class: "section-title", "Modern Relevance" }

            div { class: "connection-grid",
                for connection in modern.connections.iter() {
                    article { key: "{connection.title}", class: "connection",
                        h3 { "{connection.title}" }
                        p { "{connection.description}" }
                        ul {
                            for example in connection.examples.iter() {
                                li { "{example}" }
                            }
                        }
                    }
                }
            }

            div { class: "adaptations",
                h3 { "Adaptations" }
                ul {
                    for adaptation in modern.adaptations.iter() {
                        li { key: "{adaptation.title}", class: "adaptation",
                            span { class: "adaptation-kind", "{adaptation.kind}" }
                            strong { "{adaptation.title}" }
                            span { class: "adaptation-creator", " by {adaptation.creator}" }
                            p { "{adaptation.description}" }
                        }
                    }
                }
            }

            PollPanel {}

            blockquote { class: "closing-quote",
                p { "“{modern.closing_quote.text}”" }
                cite { "{modern.closing_quote.attribution}" }
            }
        }
    }
}

#[component]
fn PollPanel() -> Element {
    let content = use_context::<AppContext>().content();
    let poll_content = &content.modern.poll;
    let option_count = poll_content.options.len();
    let mut poll = use_signal(move || Poll::new(option_count));
    let vm = map_poll(&poll_content.options, &poll.read());

    rsx! {
        div { class: "poll",
            h3 { "{poll_content.question}" }
            div { class: "poll-options",
                for (index, option) in vm.options.into_iter().enumerate() {
                    button {
                        key: "{index}",
                        class: if option.selected { "poll-option poll-option--selected" } else { "poll-option" },
                        r#type: "button",
                        disabled: !vm.can_vote,
                        onclick: move |_| {
                            if poll.write().vote(index) {
                                debug!(option = index, "poll vote recorded");
                            }
                        },
                        span { class: "poll-text", "{option.text}" }
                        if let Some(percent) = option.percent_label {
                            span { class: "poll-result", "{percent}" }
                        }
                        if let Some(votes) = option.votes_label {
                            span { class: "poll-votes", "{votes}" }
                        }
                    }
                }
            }
            p { class: "poll-footer", "{vm.footer}" }
        }
    }
}
