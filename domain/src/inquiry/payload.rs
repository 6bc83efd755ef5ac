//! Raw request bodies carrying an inquiry

use super::entities::Inquiry;
use super::schema::InquirySchema;
use crate::core::error::DomainError;
use serde_json::Value;

/// An inquiry as received at the boundary, before decoding.
///
/// Some hosting runtimes hand the handler an already-parsed object, others
/// the raw text. Both are accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum InquiryPayload {
    Structured(Value),
    Text(String),
}

impl InquiryPayload {
    /// Wrap a raw request body. Bodies that are not UTF-8 are kept as
    /// lossy text so they fail decoding like any other garbage.
    pub fn from_body(body: &[u8]) -> Self {
        InquiryPayload::Text(String::from_utf8_lossy(body).into_owned())
    }

    /// Decode into a JSON value.
    ///
    /// A JSON string whose content is itself JSON (a double-encoded body) is
    /// unwrapped once.
    pub fn decode(self) -> Result<Value, DomainError> {
        let value = match self {
            InquiryPayload::Structured(value) => value,
            InquiryPayload::Text(text) => parse(&text)?,
        };

        match value {
            Value::String(inner) => parse(&inner),
            other => Ok(other),
        }
    }

    /// Decode and run the validation schema.
    pub fn into_inquiry(self) -> Result<Inquiry, DomainError> {
        let value = self.decode()?;
        Ok(InquirySchema::validate_value(&value)?)
    }
}

fn parse(text: &str) -> Result<Value, DomainError> {
    serde_json::from_str(text).map_err(|e| DomainError::MalformedPayload(e.to_string()))
}
