use gloo_console::log;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Presence check first, then email shape. Rejection means nothing gets
/// scheduled and the form stays idle.
pub fn validate_submission(name: &str, email: &str, message: &str) -> Result<(), FormError> {
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(FormError::MissingField);
    }
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Severity::Error => "form-message error",
            Severity::Success => "form-message success",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

/// Contact form with client-side validation and a simulated send.
///
/// Submitting disables the button and swaps its label for 1.5s, then the
/// fields clear and a success message shows. Status messages auto-hide after
/// five seconds; a newer message replaces the pending hide timer, so it always
/// gets the full window.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let submitting = use_state(|| false);
    let status = use_state(|| None::<StatusMessage>);
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    let show_status = {
        let status = status.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |msg: StatusMessage| {
            status.set(Some(msg));
            let status = status.clone();
            *hide_timer.borrow_mut() = Some(Timeout::new(config::MESSAGE_HIDE_MS, move || {
                status.set(None);
            }));
        })
    };

    let oninput_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let oninput_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        let show_status = show_status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            if let Err(err) = validate_submission(&name, &email, &message) {
                log!("contact form rejected:", err.to_string());
                show_status.emit(StatusMessage {
                    text: err.to_string(),
                    severity: Severity::Error,
                });
                return;
            }

            submitting.set(true);
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let show_status = show_status.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                show_status.emit(StatusMessage {
                    text: "Thank you! Your message has been sent successfully.".to_string(),
                    severity: Severity::Success,
                });
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                submitting.set(false);
            });
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="form-group">
                <input
                    type="text"
                    name="name"
                    placeholder="Your name"
                    value={(*name).clone()}
                    oninput={oninput_name}
                />
            </div>
            <div class="form-group">
                <input
                    type="text"
                    name="email"
                    placeholder="Your email"
                    value={(*email).clone()}
                    oninput={oninput_email}
                />
            </div>
            <div class="form-group">
                <textarea
                    name="message"
                    placeholder="Tell us about your project"
                    rows="5"
                    value={(*message).clone()}
                    oninput={oninput_message}
                />
            </div>
            {
                if let Some(msg) = (*status).as_ref() {
                    html! {
                        <div id="form-message" class={msg.severity.class()}>
                            { &msg.text }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <button type="submit" class="submit-button" disabled={*submitting}>
                { if *submitting { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jo@example.com"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["a@b", "a.com", "@b.com", "a @b.com"] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn any_empty_field_blocks_submission() {
        let err = Err(FormError::MissingField);
        assert_eq!(validate_submission("", "jo@example.com", "hi"), err);
        assert_eq!(validate_submission("Jo", "", "hi"), err);
        assert_eq!(validate_submission("Jo", "jo@example.com", ""), err);
    }

    #[test]
    fn missing_field_is_reported_before_email_shape() {
        assert_eq!(
            validate_submission("", "not-an-email", ""),
            Err(FormError::MissingField)
        );
    }

    #[test]
    fn malformed_email_blocks_submission() {
        assert_eq!(
            validate_submission("Jo", "jo@example", "hi"),
            Err(FormError::InvalidEmail)
        );
    }

    #[test]
    fn complete_valid_input_passes() {
        assert_eq!(validate_submission("Jo", "jo@example.com", "hi"), Ok(()));
    }

    #[test]
    fn error_text_matches_user_copy() {
        assert_eq!(
            FormError::MissingField.to_string(),
            "Please fill in all fields."
        );
        assert_eq!(
            FormError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn severity_maps_to_styling_class() {
        assert_eq!(Severity::Error.class(), "form-message error");
        assert_eq!(Severity::Success.class(), "form-message success");
    }
}
