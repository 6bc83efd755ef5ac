//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the endpoint's processing delay.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Endpoint behavior configuration.
///
/// Controls how [`AcceptInquiryUseCase`](crate::use_cases::accept_inquiry::AcceptInquiryUseCase)
/// paces its acknowledgements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointBehavior {
    /// Pause before acknowledging an accepted inquiry.
    pub processing_delay: Option<Duration>,
}

impl EndpointBehavior {
    /// Creates an EndpointBehavior from a delay in milliseconds.
    ///
    /// A delay of zero disables the pause.
    pub fn from_delay_millis(millis: u64) -> Self {
        Self {
            processing_delay: (millis > 0).then(|| Duration::from_millis(millis)),
        }
    }
}
