//! Contact form validation and submission.

use crate::state::ContactForm;
use crate::util::s;

/// Generic failure text when the server gives us nothing better.
const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Success text when the server omits a message.
const DEFAULT_SUCCESS: &str = "Message sent! We'll get back to you soon.";

/// What: Check whether a string contains something shaped like an email
/// address (`nonspace@nonspace.nonspace`).
///
/// Inputs:
/// - `text`: Candidate email text.
///
/// Output:
/// - `true` when an address-shaped token appears anywhere in the input.
#[must_use]
pub fn looks_like_email(text: &str) -> bool {
    for (i, c) in text.char_indices() {
        if c != '@' {
            continue;
        }
        // At least one non-whitespace char immediately before the '@'.
        let has_local = text[..i]
            .chars()
            .next_back()
            .is_some_and(|p| !p.is_whitespace());
        if !has_local {
            continue;
        }
        // After the '@': a contiguous non-whitespace run containing a dot
        // that is neither its first nor its last character.
        let run: &str = text[i + 1..]
            .split_whitespace()
            .next()
            .filter(|r| text[i + 1..].starts_with(r))
            .unwrap_or("");
        let chars: Vec<char> = run.chars().collect();
        if chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.') {
            return true;
        }
    }
    false
}

/// What: Client-side validation gate run before any submission.
///
/// Inputs:
/// - `form`: Current form contents.
///
/// Output:
/// - `Some(message)` describing the first failed rule; `None` when the form
///   may be submitted.
///
/// Details:
/// - Rules and messages match the public site: name at least 2 chars, an
///   address-shaped email, message at least 10 chars.
#[must_use]
pub fn validate(form: &ContactForm) -> Option<&'static str> {
    if form.name.trim().is_empty() || form.name.len() < 2 {
        return Some("Name is required (min 2 chars)");
    }
    if form.email.trim().is_empty() || !looks_like_email(&form.email) {
        return Some("Valid email required");
    }
    if form.message.trim().is_empty() || form.message.len() < 10 {
        return Some("Message is required (min 10 chars)");
    }
    None
}

/// What: Submit the contact form.
///
/// Inputs:
/// - `base`: API base URL without trailing slash.
/// - `form`: Validated form contents.
///
/// Output:
/// - `Ok(message)` with the server's (or a default) success text;
///   `Err(message)` with the server-reported error (`error` preferred over
///   `message`) or a generic fallback.
///
/// Details:
/// - One shot, no retry. Callers must run [`validate`] first; the server
///   remains the authority and its rejections are surfaced verbatim.
pub async fn submit_contact(base: &str, form: &ContactForm) -> Result<String, String> {
    let url = format!("{base}/api/contacts/");
    let resp = match super::client().post(&url).json(form).send().await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "contact submission failed to send");
            return Err(GENERIC_ERROR.to_owned());
        }
    };
    let status = resp.status();
    let body = resp.json::<serde_json::Value>().await.unwrap_or_default();
    if status.is_success() {
        let msg = s(&body, "message");
        return Ok(if msg.is_empty() {
            DEFAULT_SUCCESS.to_owned()
        } else {
            msg
        });
    }
    tracing::warn!(status = %status, "contact submission rejected");
    let err = s(&body, "error");
    if !err.is_empty() {
        return Err(err);
    }
    let msg = s(&body, "message");
    if !msg.is_empty() {
        return Err(msg);
    }
    Err(GENERIC_ERROR.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jordan".into(),
            email: "jordan@example.com".into(),
            subject: "Service booking".into(),
            message: "Looking to book a full detail next week.".into(),
            phone: String::new(),
            company: String::new(),
        }
    }

    #[test]
    /// What: Email shape check accepts addresses and rejects near-misses
    ///
    /// - Input: Plain address, embedded address, and malformed strings
    /// - Output: Accepts the first two, rejects the rest
    fn email_shapes() {
        assert!(looks_like_email("a@b.c"));
        assert!(looks_like_email("reach me at a@b.co thanks"));
        assert!(!looks_like_email("bad"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.c"));
        assert!(!looks_like_email("a@.c"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a @b.c"));
    }

    #[test]
    /// What: A typical bad submission is blocked before any send
    ///
    /// - Input: `{name: "Jo", email: "bad", message: "short"}`; name passes
    ///   at exactly 2 chars, so the email rule fires first
    /// - Output: "Valid email required"
    fn bad_submission_blocked() {
        let form = ContactForm {
            name: "Jo".into(),
            email: "bad".into(),
            message: "short".into(),
            ..ContactForm::default()
        };
        assert_eq!(validate(&form), Some("Valid email required"));
    }

    #[test]
    /// What: Each rule fires in order with its exact message
    ///
    /// - Input: Forms failing name, then email, then message rules
    /// - Output: Matching message per failure; None when fully valid
    fn validation_rules_in_order() {
        let mut form = valid_form();
        form.name = "J".into();
        assert_eq!(validate(&form), Some("Name is required (min 2 chars)"));
        form = valid_form();
        form.email = "nope".into();
        assert_eq!(validate(&form), Some("Valid email required"));
        form = valid_form();
        form.message = "too short".into();
        assert_eq!(validate(&form), Some("Message is required (min 10 chars)"));
        assert_eq!(validate(&valid_form()), None);
    }
}
