//! Contact inquiry subdomain.
//!
//! - [`entities::Inquiry`]: a validated contact-form payload
//! - [`entities::InquiryDraft`]: the editable, unvalidated form contents
//! - [`payload::InquiryPayload`]: a request body awaiting decoding
//! - [`schema::InquirySchema`]: the shared validation rule set

pub mod email;
pub mod entities;
pub mod payload;
pub mod schema;
