use contactflow::handler;
use lambda_http::{Error, run, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Structured JSON logs for CloudWatch, level taken from RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    info!(version = contactflow::VERSION, "Starting Contactflow Lambda");

    run(service_fn(handler)).await
}
