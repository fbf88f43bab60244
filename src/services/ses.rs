/// SES email dispatch
use crate::constants::EMAIL_CHARSET;
use crate::error::ContactflowError;
use async_trait::async_trait;
use aws_sdk_ses::Client as SesClient;
use aws_sdk_ses::types::{Body, Content, Destination, Message};
use tracing::debug;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends a plain-text email, returning the provider message id
    async fn send_email(
        &self,
        source: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, ContactflowError>;
}

pub struct SesEmailSender {
    client: SesClient,
}

impl SesEmailSender {
    pub fn new(client: SesClient) -> Self {
        Self { client }
    }

    fn content(data: &str) -> Result<Content, ContactflowError> {
        Content::builder()
            .data(data)
            .charset(EMAIL_CHARSET)
            .build()
            .map_err(|e| ContactflowError::Email(format!("Invalid email content: {}", e)))
    }
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send_email(
        &self,
        source: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, ContactflowError> {
        let message = Message::builder()
            .subject(Self::content(subject)?)
            .body(Body::builder().text(Self::content(body)?).build())
            .build();

        let output = self
            .client
            .send_email()
            .source(source)
            .destination(Destination::builder().to_addresses(to).build())
            .message(message)
            .send()
            .await
            .map_err(|e| ContactflowError::Email(format!("SES send failed: {}", e)))?;

        debug!(message_id = %output.message_id(), "SES accepted email");

        Ok(output.message_id().to_string())
    }
}
