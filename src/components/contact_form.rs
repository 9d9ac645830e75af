//! Contact section with the submission form.
//!
//! Local validation runs first; only a valid message goes to the endpoint.
//! The outcome notice clears itself after a few seconds.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::{ContactMessage, PortfolioError};

use crate::context::*;

const NOTICE_LINGER: Duration = Duration::from_secs(3);

#[derive(Clone, PartialEq)]
enum Notice {
    Success,
    Error(String),
}

#[component]
pub fn ContactForm() -> Element {
    let client = use_contact_client();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut notice = use_signal(|| None::<Notice>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }
        let client = client.clone();
        let message = ContactMessage {
            name: name(),
            email: email(),
            subject: subject(),
            body: body(),
        };
        spawn(async move {
            sending.set(true);
            let outcome = client.submit(&message).await;
            sending.set(false);
            match outcome {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    body.set(String::new());
                    notice.set(Some(Notice::Success));
                }
                Err(PortfolioError::InvalidContact(reason)) => {
                    notice.set(Some(Notice::Error(reason)));
                }
                Err(error) => {
                    tracing::error!(%error, "contact submission failed");
                    notice.set(Some(Notice::Error(
                        "Something went wrong sending your message. Please try again.".into(),
                    )));
                }
            }
            tokio::time::sleep(NOTICE_LINGER).await;
            notice.set(None);
        });
    };

    let notice_line = match notice() {
        Some(Notice::Success) => rsx! {
            div { class: "form-notice success", "Thanks! Your message is on its way." }
        },
        Some(Notice::Error(reason)) => rsx! {
            div { class: "form-notice error", "{reason}" }
        },
        None => rsx! {},
    };

    rsx! {
        section { id: "contact",
            h2 { "Get in Touch" }
            form { class: "contact-form", onsubmit: onsubmit,
                input {
                    placeholder: "Name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    placeholder: "Subject (optional)",
                    value: "{subject}",
                    oninput: move |evt| subject.set(evt.value()),
                }
                textarea {
                    placeholder: "Your message",
                    value: "{body}",
                    oninput: move |evt| body.set(evt.value()),
                }
                {notice_line}
                button {
                    class: "submit",
                    r#type: "submit",
                    disabled: sending(),
                    if sending() { "Sending…" } else { "Send message" }
                }
            }
        }
    }
}
