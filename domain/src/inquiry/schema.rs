//! Validation schema for contact inquiries.
//!
//! The rule table [`INQUIRY_RULES`] is the single definition of what a valid
//! [`Inquiry`] looks like. Both the form binding (before anything is sent)
//! and the HTTP endpoint (on every request) go through [`InquirySchema`], so
//! inline errors and server-side rejections cannot drift apart.
//!
//! # Examples
//!
//! ```
//! use coaching_domain::{InquiryDraft, InquiryField, InquirySchema, Violation};
//!
//! let draft = InquiryDraft::new()
//!     .with(InquiryField::LastName, "Lovelace")
//!     .with(InquiryField::Email, "ada@example.com")
//!     .with(InquiryField::Message, "too short");
//!
//! let errors = InquirySchema::validate(&draft).unwrap_err();
//! assert_eq!(errors.violations(InquiryField::FirstName), vec![Violation::Required]);
//! assert_eq!(errors.violations(InquiryField::Message), vec![Violation::TooShort { min: 10 }]);
//! ```

use super::email::is_valid_email;
use super::entities::{Inquiry, InquiryDraft, InquiryField};
use serde_json::Value;
use thiserror::Error;

/// A single constraint applied to a field value (after trimming).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Value must be present and non-empty. Later rules are skipped when this fails.
    Required,
    /// Value may be absent or empty. Later rules only apply to non-empty values.
    Optional,
    /// Value must contain at least this many characters.
    MinLength(usize),
    /// Value must be a syntactically valid email address.
    Email,
}

/// Constraints for every field, in form order.
pub const INQUIRY_RULES: &[(InquiryField, &[FieldRule])] = &[
    (InquiryField::FirstName, &[FieldRule::Required]),
    (InquiryField::LastName, &[FieldRule::Required]),
    (InquiryField::Email, &[FieldRule::Required, FieldRule::Email]),
    (InquiryField::Phone, &[FieldRule::Optional]),
    (
        InquiryField::Message,
        &[FieldRule::Required, FieldRule::MinLength(10)],
    ),
];

/// Why a field value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    TooShort { min: usize },
    InvalidEmail,
    /// The value was present but not text (structured payloads only)
    InvalidType,
}

impl Violation {
    /// Message shown next to the offending field
    pub fn message(&self, field: InquiryField) -> String {
        match self {
            Violation::Required => format!("{} is required", field.label()),
            Violation::TooShort { min } => {
                format!("{} must be at least {} characters", field.label(), min)
            }
            Violation::InvalidEmail => "Please enter a valid email address".to_string(),
            Violation::InvalidType => format!("{} must be text", field.label()),
        }
    }
}

/// A violation attached to the field it was found on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: InquiryField,
    pub violation: Violation,
}

impl FieldError {
    pub fn message(&self) -> String {
        self.violation.message(self.field)
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

/// Field-level errors, one per violated constraint
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("invalid inquiry: {}", summarize(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    fn push(&mut self, field: InquiryField, violation: Violation) {
        self.errors.push(FieldError { field, violation });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Violations recorded for `field`, in rule order
    pub fn violations(&self, field: InquiryField) -> Vec<Violation> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.violation)
            .collect()
    }

    /// First message for `field`, suitable for inline display
    pub fn first_message(&self, field: InquiryField) -> Option<String> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(FieldError::message)
    }

    /// Distinct fields with at least one error, in form order
    pub fn fields(&self) -> Vec<InquiryField> {
        InquiryField::ALL
            .into_iter()
            .filter(|f| self.errors.iter().any(|e| e.field == *f))
            .collect()
    }
}

/// Entry point for validating inquiries
pub struct InquirySchema;

impl InquirySchema {
    /// Rules that apply to `field`
    pub fn rules(field: InquiryField) -> &'static [FieldRule] {
        INQUIRY_RULES
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rules)| *rules)
            .unwrap_or(&[])
    }

    /// Validate a draft from the form.
    pub fn validate(draft: &InquiryDraft) -> Result<Inquiry, ValidationErrors> {
        Self::build(|field| Ok(Some(draft.get(field))))
    }

    /// Validate a decoded JSON payload.
    ///
    /// Missing and `null` values count as absent, non-string values as
    /// [`Violation::InvalidType`]. Unknown keys are ignored. A payload that
    /// is not an object fails every required field with `InvalidType`.
    pub fn validate_value(value: &Value) -> Result<Inquiry, ValidationErrors> {
        let Value::Object(map) = value else {
            let mut errors = ValidationErrors::default();
            for (field, rules) in INQUIRY_RULES {
                if rules.contains(&FieldRule::Required) {
                    errors.push(*field, Violation::InvalidType);
                }
            }
            return Err(errors);
        };

        Self::build(|field| match map.get(field.wire_name()) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(Violation::InvalidType),
        })
    }

    /// Check one field value in isolation (inline form feedback).
    pub fn validate_field(field: InquiryField, value: &str) -> Vec<Violation> {
        let mut errors = ValidationErrors::default();
        check(field, Some(value), &mut errors);
        errors.violations(field)
    }

    fn build<'a, F>(mut raw: F) -> Result<Inquiry, ValidationErrors>
    where
        F: FnMut(InquiryField) -> Result<Option<&'a str>, Violation>,
    {
        let mut errors = ValidationErrors::default();
        let mut value = |field: InquiryField, errors: &mut ValidationErrors| match raw(field) {
            Ok(v) => check(field, v, errors),
            Err(violation) => {
                errors.push(field, violation);
                None
            }
        };

        let first_name = value(InquiryField::FirstName, &mut errors);
        let last_name = value(InquiryField::LastName, &mut errors);
        let email = value(InquiryField::Email, &mut errors);
        let phone = value(InquiryField::Phone, &mut errors);
        let message = value(InquiryField::Message, &mut errors);

        match (first_name, last_name, email, message) {
            (Some(first_name), Some(last_name), Some(email), Some(message)) if errors.is_empty() => {
                Ok(Inquiry::from_validated(
                    first_name, last_name, email, phone, message,
                ))
            }
            _ => Err(errors),
        }
    }
}

/// Apply the rules for `field` to `raw`, recording violations.
///
/// Returns the trimmed value when it is present and passed, `None` otherwise
/// (including an absent optional value).
fn check(field: InquiryField, raw: Option<&str>, errors: &mut ValidationErrors) -> Option<String> {
    let value = raw.map(str::trim).unwrap_or("");
    let before = errors.len();

    for rule in InquirySchema::rules(field) {
        match rule {
            FieldRule::Required if value.is_empty() => {
                errors.push(field, Violation::Required);
                return None;
            }
            FieldRule::Optional if value.is_empty() => return None,
            FieldRule::MinLength(min) if value.chars().count() < *min => {
                errors.push(field, Violation::TooShort { min: *min });
            }
            FieldRule::Email if !is_valid_email(value) => {
                errors.push(field, Violation::InvalidEmail);
            }
            _ => {}
        }
    }

    (errors.len() == before).then(|| value.to_string())
}
