//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types where needed.

mod client;
mod server;

pub use client::FileClientConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `server.path` cannot be mounted as a route.
    InvalidRoute { path: String },
    /// `server.port` is 0: the OS picks a port nobody can find.
    EphemeralPort,
    /// `client.endpoint` is not an absolute http(s) URL.
    InvalidEndpoint { endpoint: String },
    /// `client.timeout_secs` is 0.
    ZeroTimeout,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Inquiry endpoint settings
    pub server: FileServerConfig,
    /// Submission client settings
    pub client: FileClientConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Some(problem) = route_problem(&self.server.path) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidRoute {
                    path: self.server.path.clone(),
                },
                message: format!("server.path: '{}' {}", self.server.path, problem),
            });
        }

        if self.server.port == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::EphemeralPort,
                message: "server.port: 0 binds a random port".to_string(),
            });
        }

        let endpoint_ok = reqwest::Url::parse(&self.client.endpoint)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !endpoint_ok {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidEndpoint {
                    endpoint: self.client.endpoint.clone(),
                },
                message: format!(
                    "client.endpoint: '{}' is not an http(s) URL",
                    self.client.endpoint
                ),
            });
        }

        if self.client.timeout_secs == Some(0) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ZeroTimeout,
                message: "client.timeout_secs: 0 fails every request immediately".to_string(),
            });
        }

        issues
    }

    /// Whether any issue prevents the configuration from working
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

/// Why `path` cannot be mounted as the inquiry route, if it cannot
fn route_problem(path: &str) -> Option<&'static str> {
    if !path.starts_with('/') {
        return Some("must start with '/'");
    }
    // The router treats these as captures or wildcards
    if path.contains(['{', '}', '*']) {
        return Some("must not contain '{', '}' or '*'");
    }
    if path.split('/').any(|segment| segment.starts_with(':')) {
        return Some("must not have a segment starting with ':'");
    }
    if path == crate::server::health::HEALTH_PATH {
        return Some("is reserved for the health check");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
host = "127.0.0.1"
port = 8080
path = "/contact"
response_delay_ms = 250

[client]
endpoint = "https://oxford-coaching.example/api/contact"
timeout_secs = 10
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.server.path, "/contact");
        assert_eq!(config.server.response_delay_ms, 250);
        assert_eq!(
            config.client.endpoint,
            "https://oxford-coaching.example/api/contact"
        );
        assert_eq!(config.client.timeout_secs, Some(10));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[client]
timeout_secs = 5
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert_eq!(config.server, FileServerConfig::default());
        assert_eq!(config.client.endpoint, "http://127.0.0.1:3000/api/contact");
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_bad_route_and_endpoint() {
        let mut config = FileConfig::default();
        config.server.path = "api/contact".to_string();
        config.client.endpoint = "ftp://example.com/contact".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(FileConfig::has_errors(&issues));
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::InvalidRoute { .. }
        ));
        assert!(matches!(
            issues[1].code,
            ConfigIssueCode::InvalidEndpoint { .. }
        ));
    }

    #[test]
    fn test_validate_warnings_are_not_errors() {
        let mut config = FileConfig::default();
        config.server.port = 0;
        config.client.timeout_secs = Some(0);

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(!FileConfig::has_errors(&issues));
    }

    #[test]
    fn test_validate_rejects_unroutable_paths() {
        for path in [
            "",
            "/api/{contact",
            "/api/contact}",
            "/api/{id}",
            "/api/*rest",
            "/api/:contact",
            "/health",
        ] {
            let mut config = FileConfig::default();
            config.server.path = path.to_string();

            let issues = config.validate();
            assert_eq!(issues.len(), 1, "{path:?}");
            assert_eq!(
                issues[0].code,
                ConfigIssueCode::InvalidRoute {
                    path: path.to_string()
                }
            );
            assert_eq!(issues[0].severity, Severity::Error);
        }
    }
}
