/// Contact form submission payload
use crate::constants::{DEFAULT_SUBJECT, SUBJECT_PREFIX};
use crate::error::ContactflowError;
use serde::Deserialize;

/// A single contact-form submission. Constructed per invocation from the
/// request body and discarded after the response.
///
/// Fields default to empty rather than failing deserialization, so only a
/// syntactically malformed body is a parse error. Missing required fields
/// are reported through [`SubmissionRequest::validate`] instead.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    /// Optional subject, sent as `sub` on the wire
    #[serde(default, rename = "sub")]
    pub subject: Option<String>,
    /// Opaque reCAPTCHA token proving a human completed the challenge
    #[serde(default)]
    pub token: String,
}

impl SubmissionRequest {
    /// Checks that all required fields are present. Whitespace-only values
    /// count as missing.
    ///
    /// No email format validation is performed; any non-blank string passes.
    pub fn validate(&self) -> Result<(), ContactflowError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(ContactflowError::MissingFields);
        }
        Ok(())
    }

    /// Subject for the submission, falling back to the fixed default
    pub fn subject_or_default(&self) -> &str {
        self.subject
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SUBJECT)
    }

    /// Subject line for the dispatched email
    pub fn subject_line(&self) -> String {
        format!("{}{}", SUBJECT_PREFIX, self.subject_or_default())
    }

    /// Plain-text email body interpolating all submitted fields
    pub fn body_text(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nSubject: {}\n\n{}",
            self.name,
            self.email,
            self.subject_or_default(),
            self.message
        )
    }
}
