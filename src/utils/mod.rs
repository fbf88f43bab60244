/// Shared utilities
pub mod logging;
