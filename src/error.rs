/// Error types for Contactflow
use crate::constants::{MSG_MISSING_FIELDS, MSG_SERVER_ERROR, MSG_VERIFICATION_FAILED};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactflowError {
    #[error("reCAPTCHA verification failed")]
    Verification,

    #[error("Missing required fields")]
    MissingFields,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Email dispatch error: {0}")]
    Email(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContactflowError {
    /// HTTP status for the response
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Verification | Self::MissingFields => 400,
            Self::Config(_) | Self::Email(_) | Self::Internal(_) => 500,
        }
    }

    /// Message safe to cross the trust boundary. Internal variants collapse
    /// to a generic message; their detail is logged, never echoed.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Verification => MSG_VERIFICATION_FAILED,
            Self::MissingFields => MSG_MISSING_FIELDS,
            Self::Config(_) | Self::Email(_) | Self::Internal(_) => MSG_SERVER_ERROR,
        }
    }

    /// Determines if the client can correct the request and retry
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Verification | Self::MissingFields)
    }
}

// Implement conversions for common error types
impl From<serde_json::Error> for ContactflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<std::env::VarError> for ContactflowError {
    fn from(err: std::env::VarError) -> Self {
        Self::Config(err.to_string())
    }
}
