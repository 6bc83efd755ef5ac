//! Accept Inquiry use case.
//!
//! Server-side half of the contact form: decode the body, re-run the
//! validation schema (the client is never trusted), and log the inquiry for
//! operator visibility. Nothing is stored and nothing is forwarded.

use crate::config::EndpointBehavior;
use coaching_domain::{Acknowledgement, DomainError, Inquiry, InquiryPayload};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while accepting an inquiry.
#[derive(Error, Debug)]
pub enum AcceptInquiryError {
    #[error("Invalid form data: {0}")]
    InvalidFormData(#[from] DomainError),
}

impl AcceptInquiryError {
    /// Body answered to the caller. Field detail is not exposed.
    pub fn acknowledgement(&self) -> Acknowledgement {
        Acknowledgement::rejected()
    }
}

/// Use case for accepting an inquiry at the endpoint.
#[derive(Debug, Clone, Default)]
pub struct AcceptInquiryUseCase {
    behavior: EndpointBehavior,
}

impl AcceptInquiryUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behavior(mut self, behavior: EndpointBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn behavior(&self) -> &EndpointBehavior {
        &self.behavior
    }

    /// Decode, validate and log one payload.
    pub async fn accept(&self, payload: InquiryPayload) -> Result<Inquiry, AcceptInquiryError> {
        let inquiry = payload.into_inquiry().inspect_err(|e| {
            warn!("Contact form error: {}", e);
        })?;

        info!(
            first_name = inquiry.first_name(),
            last_name = inquiry.last_name(),
            email = inquiry.email(),
            phone = inquiry.phone().unwrap_or(""),
            message = inquiry.message(),
            "Contact form submission"
        );

        if let Some(delay) = self.behavior.processing_delay {
            tokio::time::sleep(delay).await;
        }

        Ok(inquiry)
    }
}
