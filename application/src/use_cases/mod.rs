//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod accept_inquiry;
pub mod submit_inquiry;
