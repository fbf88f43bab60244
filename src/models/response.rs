/// Response body returned to the form client
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub message: String,
}

impl SubmissionResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
