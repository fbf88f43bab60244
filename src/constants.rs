/// Application constants
///
/// This module contains all hardcoded values used throughout the application.
// ============================================================================
// Email Format Constants
// ============================================================================
/// Prefix prepended to the user-supplied subject line
pub const SUBJECT_PREFIX: &str = "Contact Form: ";

/// Subject used when the submission carries none
pub const DEFAULT_SUBJECT: &str = "No subject";

/// Charset for SES subject and body content
pub const EMAIL_CHARSET: &str = "UTF-8";

// ============================================================================
// Response Messages
// ============================================================================

/// Returned when the reCAPTCHA token is absent or fails verification
pub const MSG_VERIFICATION_FAILED: &str = "reCAPTCHA verification failed";

/// Returned when name, email, or message is empty
pub const MSG_MISSING_FIELDS: &str = "Missing required fields";

/// Returned after a successful SES dispatch
pub const MSG_EMAIL_SENT: &str = "Email sent successfully";

/// Generic message for all internal failures. Detail goes to logs only.
pub const MSG_SERVER_ERROR: &str = "Server error";

// ============================================================================
// External Endpoints
// ============================================================================

/// Google reCAPTCHA server-side verification endpoint
pub const RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";
