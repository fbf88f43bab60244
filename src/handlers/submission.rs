/// Contact submission pipeline: parse, verify token, validate fields, send
use crate::error::ContactflowError;
use crate::models::{AppConfig, SubmissionRequest};
use crate::services::captcha::RecaptchaVerifier;
use crate::services::ses::SesEmailSender;
use crate::services::{CaptchaVerifier, EmailSender};
use crate::utils::logging::{redact_body, redact_email};
use std::sync::Arc;
use tracing::info;

/// Submission handler context
pub struct SubmissionContext {
    config: AppConfig,
    verifier: Arc<dyn CaptchaVerifier>,
    sender: Arc<dyn EmailSender>,
}

impl SubmissionContext {
    pub async fn new() -> Result<Self, ContactflowError> {
        let config = AppConfig::from_env()?;

        let aws_config = aws_config::load_from_env().await;
        let ses_client = aws_sdk_ses::Client::new(&aws_config);

        let verifier = RecaptchaVerifier::new(config.recaptcha_secret.clone());

        Ok(Self {
            verifier: Arc::new(verifier),
            sender: Arc::new(SesEmailSender::new(ses_client)),
            config,
        })
    }

    /// Context with injected services, for tests
    pub fn with_services(
        config: AppConfig,
        verifier: Arc<dyn CaptchaVerifier>,
        sender: Arc<dyn EmailSender>,
    ) -> Self {
        Self {
            config,
            verifier,
            sender,
        }
    }
}

/// Parses the raw request body and runs the submission pipeline
pub async fn handle(ctx: &SubmissionContext, body: &[u8]) -> Result<(), ContactflowError> {
    let request: SubmissionRequest = serde_json::from_slice(body)
        .map_err(|e| ContactflowError::Internal(format!("Malformed request body: {}", e)))?;

    process(ctx, &request).await
}

#[tracing::instrument(name = "submission.process", skip(ctx, request))]
pub async fn process(
    ctx: &SubmissionContext,
    request: &SubmissionRequest,
) -> Result<(), ContactflowError> {
    info!(
        "Processing contact submission - from: {}, message: {}",
        redact_email(&request.email),
        redact_body(&request.message)
    );

    // An absent token fails verification without a round trip
    if request.token.is_empty() {
        info!("Submission carried no reCAPTCHA token");
        return Err(ContactflowError::Verification);
    }

    if !ctx.verifier.verify(&request.token).await {
        return Err(ContactflowError::Verification);
    }

    request.validate()?;

    let message_id = ctx
        .sender
        .send_email(
            &ctx.config.source_email,
            &ctx.config.dest_email,
            &request.subject_line(),
            &request.body_text(),
        )
        .await?;

    info!(
        "Contact email dispatched - message_id: {}, submitter: {}",
        message_id,
        redact_email(&request.email)
    );

    Ok(())
}
