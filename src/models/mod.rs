/// Data models for Contactflow
pub mod config;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use config::*;
pub use request::*;
pub use response::*;
