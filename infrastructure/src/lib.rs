//! Infrastructure layer for coaching-contact
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the axum inquiry endpoint, the reqwest
//! submission transport, and configuration file loading.

pub mod config;
pub mod server;
pub mod transport;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileClientConfig, FileConfig, FileServerConfig,
    Severity,
};
pub use server::{ServerError, inquiry_router};
pub use transport::HttpInquiryTransport;
