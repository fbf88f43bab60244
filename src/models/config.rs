/// Runtime configuration - loaded from environment variables
use crate::error::ContactflowError;

/// Process-wide configuration. Loaded once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verified SES identity used as the From address
    pub source_email: String,
    /// Mailbox that receives contact submissions
    pub dest_email: String,
    /// Server-side reCAPTCHA secret
    pub recaptcha_secret: String,
}

impl AppConfig {
    /// Loads configuration from the environment. There are no defaults;
    /// a missing variable is a fatal configuration error.
    pub fn from_env() -> Result<Self, ContactflowError> {
        Ok(Self {
            source_email: require_var("SOURCE_EMAIL")?,
            dest_email: require_var("DEST_EMAIL")?,
            recaptcha_secret: require_var("RECAPTCHA_SECRET")?,
        })
    }
}

fn require_var(name: &str) -> Result<String, ContactflowError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ContactflowError::Config(format!(
            "Missing {} env var",
            name
        ))),
    }
}
