//! The locally persisted session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jwire_models::Role;

/// Fixed session lifetime in seconds (24 hours), computed client-side at
/// save time. The server does not advertise its token lifetime; whether
/// this matches the actual backend token TTL is a product decision to
/// confirm, not something the client can observe.
pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// The persisted session record: identity plus bearer token and the
/// client-computed expiry instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub email: String,
    pub name: String,
    /// Wire role string as received at login, e.g. "ROLE_EMPLOYEE".
    pub role: String,
    #[serde(default)]
    pub avatar_url: String,
    pub token: String,
    /// Absolute expiry instant, persisted as epoch milliseconds.
    #[serde(rename = "expiresAtEpochMillis", with = "chrono::serde::ts_milliseconds")]
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    /// True while a bearer token is present and the expiry is in the future.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.token.is_empty() && now < self.expires_at
    }

    /// The parsed account role, if recognizable.
    pub fn parsed_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// Subset overwrite applied after profile or avatar edits.
///
/// Only the supplied fields change; applying an update recomputes the
/// session expiry from now, so a fresh edit extends the session.
#[derive(Debug, Clone, Default)]
pub struct CredentialUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub token: Option<String>,
}

/// Login state derived from the stored credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus {
    NotLoggedIn,
    Employee,
    Recruiter,
}
