//! Session state for the JobWire client.
//!
//! Holds the single source of truth for "is the user authenticated": the
//! credential record written on login and the store that persists it
//! between process runs.

pub mod credential;
pub mod error;
pub mod store;

pub use credential::{Credential, CredentialUpdate, LoginStatus, SESSION_TTL_SECS};
pub use error::{SessionError, SessionResult};
pub use store::CredentialStore;
