//! Application layer for coaching-contact
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::EndpointBehavior;
pub use ports::{
    inquiry_transport::{InquiryTransport, TransportError},
    submission_notifier::{NoSubmissionNotifier, SubmissionNotifier},
};
pub use use_cases::accept_inquiry::{AcceptInquiryError, AcceptInquiryUseCase};
pub use use_cases::submit_inquiry::{SubmitInquiryUseCase, SubmitOutcome};
