//! Submission progress notifiers

pub mod reporter;
