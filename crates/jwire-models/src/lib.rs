//! Shared wire types for the JobWire client.
//!
//! This crate provides Serde-serializable types for:
//! - The uniform response envelope every backend endpoint returns
//! - The `Outcome` result union returned by every repository operation
//! - Request/response payloads for auth, jobs, profiles, notifications and CVs

pub mod auth;
pub mod cv;
pub mod envelope;
pub mod job;
pub mod notification;
pub mod outcome;
pub mod profile;

// Re-export common types
pub use auth::{AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest, Role};
pub use cv::CvRecord;
pub use envelope::Envelope;
pub use job::{
    ApplyJobRequest, JobDetail, JobFilter, JobPostRequest, JobSummary, SaveJobRequest,
    SaveJobStatus, SavedJob,
};
pub use notification::Notification;
pub use outcome::Outcome;
pub use profile::{
    ChangeAvatarRequest, DateOfBirth, EmployeeProfile, JobIntro, ProfileUpdate, RecruiterInfo,
    RecruiterProfile,
};
