//! Inquiry transport port
//!
//! Defines how the submission client delivers an inquiry to the endpoint.

use async_trait::async_trait;
use coaching_domain::{Acknowledgement, Inquiry};
use thiserror::Error;

/// Errors that can occur while delivering an inquiry
///
/// The visitor sees the same failure notice for every variant; the
/// distinction only matters for diagnostics.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Endpoint rejected the inquiry ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

impl TransportError {
    /// HTTP status of a rejection, if the endpoint answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Transport for inquiry submissions
///
/// This port defines how the application layer reaches the inquiry endpoint.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait InquiryTransport: Send + Sync {
    /// Send one inquiry and wait for the endpoint's acknowledgement.
    ///
    /// Only a 2xx answer is `Ok`.
    async fn send(&self, inquiry: &Inquiry) -> Result<Acknowledgement, TransportError>;
}
