//! Contact form state for interactive shells

pub mod binding;

pub use binding::{ContactForm, FormSubmitResult};
