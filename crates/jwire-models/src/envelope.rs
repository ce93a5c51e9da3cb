//! The uniform response wrapper every backend endpoint returns.

use serde::{Deserialize, Serialize};

/// Server response wrapper carrying a business status alongside the payload.
///
/// The `status_code` field is the sole success predicate: a 200 transport
/// response can still carry a business-level failure code in the envelope,
/// so the transport status is necessary but never sufficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Business status code; 200..=299 means success
    pub status_code: i32,
    /// Human-readable message, doubling as the failure reason
    #[serde(default)]
    pub message: String,
    /// Machine-oriented error tag, present on some failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Typed payload; may be absent even on success (void operations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Request path echoed by the server
    #[serde(default)]
    pub path: String,
    /// Server-side timestamp string
    #[serde(default)]
    pub timestamp: String,
}

impl<T> Envelope<T> {
    /// Whether the business status code is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status_code)
    }

    /// The failure reason: the server message, or `fallback` when the
    /// message is absent.
    pub fn failure_reason(&self, fallback: &str) -> String {
        if self.message.is_empty() {
            fallback.to_string()
        } else {
            self.message.clone()
        }
    }
}
