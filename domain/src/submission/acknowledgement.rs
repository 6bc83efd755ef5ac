//! Endpoint acknowledgement body

use serde::{Deserialize, Serialize};

/// Message returned for an accepted inquiry
pub const ACCEPTED_MESSAGE: &str = "Contact form submitted successfully";

/// Message returned for a rejected or undecodable inquiry
pub const REJECTED_MESSAGE: &str = "Invalid form data";

/// JSON body answered by the inquiry endpoint for a `POST`
///
/// `{ "success": true, "message": "Contact form submitted successfully" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

impl Acknowledgement {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: ACCEPTED_MESSAGE.to_string(),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            message: REJECTED_MESSAGE.to_string(),
        }
    }
}
