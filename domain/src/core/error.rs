//! Domain error types

use crate::inquiry::schema::ValidationErrors;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    InvalidInquiry(#[from] ValidationErrors),
}

impl DomainError {
    /// Check if this error came from decoding rather than field rules
    pub fn is_malformed(&self) -> bool {
        matches!(self, DomainError::MalformedPayload(_))
    }

    /// Field-level errors, when the payload decoded but failed validation
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            DomainError::InvalidInquiry(errors) => Some(errors),
            DomainError::MalformedPayload(_) => None,
        }
    }
}
