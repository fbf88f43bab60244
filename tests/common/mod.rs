//! Common test utilities and service mocks for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use contactflow::error::ContactflowError;
use contactflow::handlers::submission::SubmissionContext;
use contactflow::models::AppConfig;
use contactflow::services::{CaptchaVerifier, EmailSender};
use std::sync::{Arc, Mutex};

pub const TEST_SOURCE_EMAIL: &str = "noreply@acme.com";
pub const TEST_DEST_EMAIL: &str = "owner@acme.com";

pub fn test_config() -> AppConfig {
    AppConfig {
        source_email: TEST_SOURCE_EMAIL.to_string(),
        dest_email: TEST_DEST_EMAIL.to_string(),
        recaptcha_secret: "test-secret".to_string(),
    }
}

/// Mock captcha verifier with a scripted outcome
#[derive(Clone)]
pub struct MockCaptcha {
    outcome: bool,
    pub tokens_seen: Arc<Mutex<Vec<String>>>,
}

impl MockCaptcha {
    pub fn passing() -> Self {
        Self {
            outcome: true,
            tokens_seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            outcome: false,
            tokens_seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.tokens_seen.lock().unwrap().len()
    }
}

#[async_trait]
impl CaptchaVerifier for MockCaptcha {
    async fn verify(&self, token: &str) -> bool {
        self.tokens_seen.lock().unwrap().push(token.to_string());
        self.outcome
    }
}

/// Email captured by the mock sender
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub source: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mock email sender recording dispatched emails, with an optional fault
#[derive(Clone)]
pub struct MockSes {
    pub sent_emails: Arc<Mutex<Vec<SentEmail>>>,
    fail: bool,
}

impl MockSes {
    pub fn new() -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent_emails.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> Option<SentEmail> {
        self.sent_emails.lock().unwrap().last().cloned()
    }
}

impl Default for MockSes {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSender for MockSes {
    async fn send_email(
        &self,
        source: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, ContactflowError> {
        if self.fail {
            return Err(ContactflowError::Email("simulated SES outage".to_string()));
        }

        self.sent_emails.lock().unwrap().push(SentEmail {
            source: source.to_string(),
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });

        Ok(format!("mock-msg-{}", self.sent_count()))
    }
}

/// Builds a submission context wired to the given mocks
pub fn test_context(captcha: MockCaptcha, ses: MockSes) -> SubmissionContext {
    SubmissionContext::with_services(test_config(), Arc::new(captcha), Arc::new(ses))
}

/// JSON body for a complete, well-formed submission
pub fn submission_body(token: &str) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "name": "Alice",
        "email": "alice@example.com",
        "message": "I would like to know more about your product.",
        "sub": "Product question",
        "token": token,
    }))
    .unwrap()
}
