use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;

use crate::config;

/// Relay reply, see the backend's `AjaxResponse`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AjaxResponse {
    pub response: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub json: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

const MISSING_FIELDS_TEXT: &str = "Please fill in your email address and a message.";
const SEND_FAILED_TEXT: &str = "Sorry, your message could not be sent. Please try again later.";

pub fn status_from_response(reply: &AjaxResponse) -> FormStatus {
    if reply.response {
        return FormStatus::Sent;
    }
    match reply.message.as_deref() {
        Some("MISSING_REQUIRED_FIELDS") => FormStatus::Failed(MISSING_FIELDS_TEXT.to_string()),
        _ => FormStatus::Failed(SEND_FAILED_TEXT.to_string()),
    }
}

pub fn encode_form(email: &str, content: &str) -> String {
    format!(
        "email={}&emailcontent={}",
        urlencoding::encode(email),
        urlencoding::encode(content)
    )
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let email = use_state(String::new);
    let content = use_state(String::new);
    let status = use_state(|| FormStatus::Idle);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_content = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            content.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let content = content.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if email.trim().is_empty() || content.trim().is_empty() {
                status.set(FormStatus::Failed(MISSING_FIELDS_TEXT.to_string()));
                return;
            }
            status.set(FormStatus::Sending);

            let body = encode_form(&email, &content);
            let status = status.clone();
            let email = email.clone();
            let content = content.clone();
            spawn_local(async move {
                let result = Request::post(&config::contact_endpoint())
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(body)
                    .send()
                    .await;

                match result {
                    Ok(response) => match response.json::<AjaxResponse>().await {
                        Ok(reply) => {
                            let next = status_from_response(&reply);
                            if next == FormStatus::Sent {
                                email.set(String::new());
                                content.set(String::new());
                            } else {
                                log::warn!("Contact relay refused message: {:?}", reply.message);
                            }
                            status.set(next);
                        }
                        Err(e) => {
                            log::error!("Unreadable contact relay reply: {}", e);
                            status.set(FormStatus::Failed(SEND_FAILED_TEXT.to_string()));
                        }
                    },
                    Err(e) => {
                        log::error!("Contact relay request failed: {}", e);
                        status.set(FormStatus::Failed(SEND_FAILED_TEXT.to_string()));
                    }
                }
            });
        })
    };

    let sending = *status == FormStatus::Sending;

    html! {
        <section id="contact" class="m-contact">
            <h2>{"Request a demo"}</h2>
            <form class="m-contact-form" {onsubmit}>
                <input
                    type="email"
                    name="email"
                    placeholder="Your email"
                    value={(*email).clone()}
                    oninput={on_email}
                />
                <textarea
                    name="emailcontent"
                    placeholder="How can we help?"
                    value={(*content).clone()}
                    oninput={on_content}
                />
                <button type="submit" disabled={sending}>
                    { if sending { "Sending..." } else { "Send" } }
                </button>
            </form>
            {
                match &*status {
                    FormStatus::Sent => html! {
                        <p class="m-contact-status is-success">{"Thank you! We will get back to you soon."}</p>
                    },
                    FormStatus::Failed(text) => html! {
                        <p class="m-contact-status is-error">{ text.clone() }</p>
                    },
                    _ => html! {},
                }
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(json: &str) -> AjaxResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn success_reply_marks_sent() {
        assert_eq!(status_from_response(&reply(r#"{"response":true}"#)), FormStatus::Sent);
    }

    #[test]
    fn missing_fields_reply_asks_for_input() {
        let status = status_from_response(&reply(
            r#"{"response":false,"message":"MISSING_REQUIRED_FIELDS","json":{"error_message":"x"}}"#,
        ));
        assert_eq!(status, FormStatus::Failed(MISSING_FIELDS_TEXT.to_string()));
    }

    #[test]
    fn relay_failures_show_generic_error() {
        for code in ["RECIPIENT_IS_NOT_SET", "ERROR_AT_PHPMAIL"] {
            let json = format!(r#"{{"response":false,"message":"{}"}}"#, code);
            assert_eq!(
                status_from_response(&reply(&json)),
                FormStatus::Failed(SEND_FAILED_TEXT.to_string())
            );
        }
    }

    #[test]
    fn form_body_is_url_encoded() {
        assert_eq!(
            encode_form("jane+demo@example.com", "<p>Hi & bye</p>"),
            "email=jane%2Bdemo%40example.com&emailcontent=%3Cp%3EHi%20%26%20bye%3C%2Fp%3E"
        );
    }
}
