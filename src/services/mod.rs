/// External service clients
pub mod captcha;
pub mod ses;

// Re-export service traits
pub use captcha::CaptchaVerifier;
pub use ses::EmailSender;
