/// reCAPTCHA token verification using the siteverify endpoint
use crate::constants::RECAPTCHA_VERIFY_URL;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, warn};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    /// Verifies a client-supplied token. Fail-closed: any transport or
    /// parsing failure yields `false`, never an error to the caller.
    async fn verify(&self, token: &str) -> bool;
}

/// Verifier backed by Google's siteverify endpoint
pub struct RecaptchaVerifier {
    client: reqwest::Client,
    secret: String,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct SiteverifyResponse {
    #[serde(default)]
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

impl RecaptchaVerifier {
    pub fn new(secret: String) -> Self {
        Self::with_endpoint(secret, RECAPTCHA_VERIFY_URL.to_string())
    }

    /// Verifier against a custom endpoint, used by tests
    pub fn with_endpoint(secret: String, endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret,
            endpoint,
        }
    }

    async fn siteverify(&self, token: &str) -> Result<SiteverifyResponse, reqwest::Error> {
        self.client
            .post(&self.endpoint)
            .form(&[("secret", self.secret.as_str()), ("response", token)])
            .send()
            .await?
            .error_for_status()?
            .json::<SiteverifyResponse>()
            .await
    }
}

#[async_trait]
impl CaptchaVerifier for RecaptchaVerifier {
    async fn verify(&self, token: &str) -> bool {
        match self.siteverify(token).await {
            Ok(result) => {
                if !result.success {
                    warn!(
                        "reCAPTCHA verification rejected token - error_codes: {:?}",
                        result.error_codes
                    );
                }
                result.success
            }
            Err(e) => {
                // Fail closed: an unreachable or misbehaving verification
                // service never lets a submission through.
                error!("reCAPTCHA verification request failed: {}", e);
                false
            }
        }
    }
}
