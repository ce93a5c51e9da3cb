//! Authenticated HTTP access layer for the JobWire backend.
//!
//! This crate provides:
//! - A bearer-authenticated transport over the backend REST API
//! - Envelope decoding into the uniform [`Outcome`] result type
//! - Typed repositories per resource (auth, jobs, profiles, notifications, CVs)
//! - An optimistic save-toggle controller with a single-flight guard
//!
//! [`Outcome`]: jwire_models::Outcome

pub mod auth;
pub mod config;
pub mod envelope;
pub mod error;
pub mod repos;
pub mod toggle;
pub mod transport;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use repos::{
    AuthRepository, EmployeeRepository, JobRepository, NotificationRepository, RecruiterRepository,
};
pub use toggle::{
    JobListSource, RollbackPolicy, SaveToggleController, ToggleOutcome, ToggleState,
};
pub use transport::ApiClient;
