//! Endpoint configuration from TOML (`[server]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//! path = "/api/contact"
//! response_delay_ms = 0
//! ```

use coaching_application::EndpointBehavior;
use serde::{Deserialize, Serialize};

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Route of the inquiry endpoint
    pub path: String,
    /// Pause before acknowledging an accepted inquiry (0 = none)
    pub response_delay_ms: u64,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            path: "/api/contact".to_string(),
            response_delay_ms: 0,
        }
    }
}

impl FileServerConfig {
    /// `host:port` string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Convert to application-layer endpoint behavior
    pub fn to_endpoint_behavior(&self) -> EndpointBehavior {
        EndpointBehavior::from_delay_millis(self.response_delay_ms)
    }
}
