//! Client configuration.

use std::time::Duration;

/// Configuration for the backend API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API, including the `/api` prefix
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("JOBWIRE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string()),
            timeout: Duration::from_secs(
                std::env::var("JOBWIRE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            connect_timeout: Duration::from_secs(
                std::env::var("JOBWIRE_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }
}
