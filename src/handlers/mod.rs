/// Lambda HTTP handlers
pub mod submission;

use crate::constants::MSG_EMAIL_SENT;
use crate::error::ContactflowError;
use crate::models::SubmissionResponse;
use lambda_http::http::StatusCode;
use lambda_http::{Body, Error, Request, Response};
use submission::SubmissionContext;
use tokio::sync::OnceCell;
use tracing::{error, info};

// Process-wide context: SES and HTTP clients plus configuration, initialized
// lazily on the first invocation and read-only afterwards. Initialization
// failure is not cached, so a fixed environment recovers on the next call.
static CONTEXT: OnceCell<SubmissionContext> = OnceCell::const_new();

/// Main Lambda handler - validates a contact submission and dispatches it
pub async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let ctx = match CONTEXT.get_or_try_init(SubmissionContext::new).await {
        Ok(ctx) => ctx,
        Err(e) => return into_response(Err(e)),
    };

    let result = submission::handle(ctx, event.body()).await;
    into_response(result)
}

/// Maps the submission outcome to an HTTP response. Internal error detail
/// is logged here and never included in the response body.
pub(crate) fn into_response(
    result: Result<(), ContactflowError>,
) -> Result<Response<Body>, Error> {
    let (status, message) = match &result {
        Ok(()) => (StatusCode::OK, MSG_EMAIL_SENT),
        Err(e) => {
            if e.is_user_correctable() {
                info!("Submission rejected: {}", e);
            } else {
                error!("Submission failed: {}", e);
            }
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, e.public_message())
        }
    };

    let body = serde_json::to_string(&SubmissionResponse::new(message))?;

    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?)
}
