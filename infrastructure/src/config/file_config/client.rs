//! Submission client configuration from TOML (`[client]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw submission client configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// URL of the inquiry endpoint
    pub endpoint: String,
    /// Request timeout in seconds (unset = transport default)
    pub timeout_secs: Option<u64>,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:3000/api/contact".to_string(),
            timeout_secs: None,
        }
    }
}

impl FileClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
