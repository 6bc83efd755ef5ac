//! Presentation layer for coaching-contact
//!
//! This crate contains the CLI definition, the contact form binding,
//! console formatting, and submission progress notifiers.

pub mod cli;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, InquiryArgs};
pub use form::{ContactForm, FormSubmitResult};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{SimpleSubmissionProgress, SubmissionReporter};
