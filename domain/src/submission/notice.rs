//! Notices shown to the visitor once a submission settles

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Confirmation,
    Failure,
}

/// Toast-style message for the presentation shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    /// Shown after the endpoint acknowledged the inquiry
    pub fn confirmation() -> Self {
        Self {
            kind: NoticeKind::Confirmation,
            title: "Message sent!".to_string(),
            description: "Thank you for your inquiry. We'll get back to you within 24 hours."
                .to_string(),
        }
    }

    /// Shown after any failure (transport error or rejection alike)
    pub fn failure() -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: "Error".to_string(),
            description: "Something went wrong. Please try again or contact us directly."
                .to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == NoticeKind::Failure
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.title, self.description)
    }
}
