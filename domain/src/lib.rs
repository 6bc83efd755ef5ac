//! Domain layer for coaching-contact
//!
//! This crate contains the contact inquiry entity, its validation schema,
//! and the value objects describing a submission's lifecycle.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Inquiry
//!
//! A visitor's contact request. It only exists once it has passed
//! [`InquirySchema`]; while the visitor types it is an [`InquiryDraft`].
//!
//! ## Submission
//!
//! The browser-side lifecycle of one inquiry: `Idle → Pending →
//! (Success | Error) → Idle`, and the [`Acknowledgement`] the endpoint
//! answers with.

pub mod core;
pub mod inquiry;
pub mod submission;

// Re-export commonly used types
pub use core::error::DomainError;
pub use inquiry::{
    email::is_valid_email,
    entities::{Inquiry, InquiryDraft, InquiryField},
    payload::InquiryPayload,
    schema::{FieldError, FieldRule, INQUIRY_RULES, InquirySchema, ValidationErrors, Violation},
};
pub use submission::{
    acknowledgement::{ACCEPTED_MESSAGE, Acknowledgement, REJECTED_MESSAGE},
    notice::{Notice, NoticeKind},
    phase::SubmissionPhase,
};
