//! Submission phase

use serde::{Deserialize, Serialize};

/// Phase of a contact form submission
///
/// `Idle → Pending → (Success | Error) → Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    /// Nothing in flight
    #[default]
    Idle,
    /// A request has been issued and has not completed
    Pending,
    /// The endpoint acknowledged the inquiry
    Success,
    /// The request failed or was rejected
    Error,
}

impl SubmissionPhase {
    pub fn as_str(&self) -> &str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Pending => "pending",
            SubmissionPhase::Success => "success",
            SubmissionPhase::Error => "error",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionPhase::Pending)
    }

    /// Whether the submission has completed, successfully or not
    pub fn is_settled(&self) -> bool {
        matches!(self, SubmissionPhase::Success | SubmissionPhase::Error)
    }
}

impl std::fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
