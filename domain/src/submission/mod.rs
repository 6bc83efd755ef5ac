//! Submission lifecycle value objects shared by the client and the endpoint.

pub mod acknowledgement;
pub mod notice;
pub mod phase;
