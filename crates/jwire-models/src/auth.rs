//! Authentication wire types and the account role.

use serde::{Deserialize, Serialize};

/// Account role as understood by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Employee,
    Recruiter,
}

impl Role {
    /// Parse the wire role string, tolerating the `ROLE_` prefix the
    /// backend uses in auth responses ("ROLE_EMPLOYEE" and "EMPLOYEE" are
    /// the same role).
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_uppercase();
        match normalized.strip_prefix("ROLE_").unwrap_or(&normalized) {
            "EMPLOYEE" => Some(Role::Employee),
            "RECRUITER" => Some(Role::Recruiter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::Recruiter => "RECRUITER",
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The backend takes the login identifier under `username`.
    #[serde(rename = "username")]
    pub identifier: String,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub role: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub email: String,
    pub name: String,
    /// Wire role string, e.g. "ROLE_EMPLOYEE"; parse with [`Role::parse`].
    pub role: String,
    #[serde(default)]
    pub image_url: String,
    pub token: String,
}

/// Change-password request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current: String,
    pub new_password: String,
    pub confirm_password: String,
}
