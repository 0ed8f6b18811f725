use thiserror::Error;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::i18n::use_i18n;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("email is required")]
    EmptyEmail,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("terms were not accepted")]
    TermsNotAccepted,
}

impl SignupError {
    pub fn message_key(&self) -> &'static str {
        match self {
            SignupError::EmptyEmail => "newsletter.error.empty",
            SignupError::InvalidEmail => "newsletter.error.invalid",
            SignupError::TermsNotAccepted => "newsletter.error.terms",
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// Checks the signup form and returns the normalized address.
pub fn validate_signup(email: &str, accepted_terms: bool) -> Result<String, SignupError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(SignupError::EmptyEmail);
    }
    if !looks_like_email(email) {
        return Err(SignupError::InvalidEmail);
    }
    if !accepted_terms {
        return Err(SignupError::TermsNotAccepted);
    }
    Ok(email.to_ascii_lowercase())
}

#[derive(Clone, PartialEq)]
enum FormStatus {
    Idle,
    Rejected(SignupError),
    Subscribed(String),
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let i18n = use_i18n();
    let email = use_state(String::new);
    let accepted = use_state(|| false);
    let status = use_state(|| FormStatus::Idle);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_accept = {
        let accepted = accepted.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            accepted.set(input.checked());
        })
    };

    let on_submit = {
        let email = email.clone();
        let accepted = accepted.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_signup(&email, *accepted) {
                Ok(address) => {
                    log::info!("newsletter signup accepted");
                    email.set(String::new());
                    status.set(FormStatus::Subscribed(address));
                }
                Err(err) => {
                    log::debug!("newsletter signup rejected: {}", err);
                    status.set(FormStatus::Rejected(err));
                }
            }
        })
    };

    html! {
        <div class="newsletter">
            <h3>{ i18n.t("newsletter.heading") }</h3>
            <form class="newsletter-form" onsubmit={on_submit} novalidate={true}>
                <input
                    type="email"
                    placeholder="your@email.com"
                    value={(*email).clone()}
                    oninput={on_email}
                    aria-label={i18n.t("newsletter.email_label")}
                />
                <button type="submit" aria-label={i18n.t("newsletter.submit")}>{"→"}</button>
            </form>
            <label class="newsletter-terms">
                <input type="checkbox" checked={*accepted} onchange={on_accept} />
                <span>{ i18n.t("newsletter.terms") }</span>
            </label>
            {
                match &*status {
                    FormStatus::Idle => html! {},
                    FormStatus::Rejected(err) => html! {
                        <p class="form-error" role="alert">{ i18n.t(err.message_key()) }</p>
                    },
                    FormStatus::Subscribed(address) => html! {
                        <p class="form-success">{ i18n.t("newsletter.thanks") }{" "}<span dir="ltr">{ address }</span></p>
                    },
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_and_normalizes() {
        assert_eq!(
            validate_signup("  Someone@Example.COM ", true),
            Ok("someone@example.com".to_string())
        );
    }

    #[test]
    fn empty_email_comes_first() {
        assert_eq!(validate_signup("   ", false), Err(SignupError::EmptyEmail));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["plain", "@example.com", "a@b", "a@.com", "a@b.", "a@@b.com", "a b@c.com", "a@b..com"] {
            assert_eq!(validate_signup(bad, true), Err(SignupError::InvalidEmail), "{}", bad);
        }
    }

    #[test]
    fn terms_must_be_accepted() {
        assert_eq!(
            validate_signup("info@falconscapital.com", false),
            Err(SignupError::TermsNotAccepted)
        );
    }
}
