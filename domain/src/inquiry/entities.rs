//! Inquiry entities

use serde::{Deserialize, Serialize};

/// A field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InquiryField {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl InquiryField {
    /// All fields in form order
    pub const ALL: [InquiryField; 5] = [
        InquiryField::FirstName,
        InquiryField::LastName,
        InquiryField::Email,
        InquiryField::Phone,
        InquiryField::Message,
    ];

    /// Key used on the wire (camelCase JSON)
    pub fn wire_name(&self) -> &'static str {
        match self {
            InquiryField::FirstName => "firstName",
            InquiryField::LastName => "lastName",
            InquiryField::Email => "email",
            InquiryField::Phone => "phone",
            InquiryField::Message => "message",
        }
    }

    /// Human-readable label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            InquiryField::FirstName => "First name",
            InquiryField::LastName => "Last name",
            InquiryField::Email => "Email",
            InquiryField::Phone => "Phone",
            InquiryField::Message => "Message",
        }
    }
}

impl std::fmt::Display for InquiryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Unvalidated contact form contents, edited while the visitor types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InquiryDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl InquiryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::FirstName => &self.first_name,
            InquiryField::LastName => &self.last_name,
            InquiryField::Email => &self.email,
            InquiryField::Phone => &self.phone,
            InquiryField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: InquiryField, value: impl Into<String>) {
        let value = value.into();
        match field {
            InquiryField::FirstName => self.first_name = value,
            InquiryField::LastName => self.last_name = value,
            InquiryField::Email => self.email = value,
            InquiryField::Phone => self.phone = value,
            InquiryField::Message => self.message = value,
        }
    }

    /// Builder-style setter
    pub fn with(mut self, field: InquiryField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        InquiryField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// A contact inquiry that has passed the validation schema (Entity)
///
/// Values are trimmed. Construct one through
/// [`InquirySchema`](super::schema::InquirySchema); there is no public
/// constructor that skips validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    first_name: String,
    last_name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    message: String,
}

impl Inquiry {
    pub(crate) fn from_validated(
        first_name: String,
        last_name: String,
        email: String,
        phone: Option<String>,
        message: String,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            phone,
            message,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Convert back into an editable draft (used to resubmit)
    pub fn to_draft(&self) -> InquiryDraft {
        InquiryDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone().unwrap_or_default(),
            message: self.message.clone(),
        }
    }
}
