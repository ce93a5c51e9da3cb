//! Job-board wire types: listings, detail, saving, applying, searching.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One job row in a listing (home, recent, search results).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    pub job_position: String,
    pub job_type: String,
    pub salary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Whether the current user has saved this job.
    #[serde(default)]
    pub saved: bool,
}

/// Full job posting as shown on the detail screen.
///
/// `Default` (all fields empty) is the decode fallback when a success
/// envelope arrives without a payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub recruiter_name: String,
    #[serde(default)]
    pub recruiter_mail: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirement: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub salary: String,
}

/// One row on the saved-jobs screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedJob {
    pub id: i64,
    #[serde(default)]
    pub image_url: String,
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    pub job_position: String,
    pub job_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub salary: String,
}

/// Search filter; unset fields are omitted from the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
}

/// Save/unsave toggle request; the server flips the flag and answers with
/// the confirmed state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveJobRequest {
    pub job_id: i64,
}

/// Server-confirmed saved flag after a toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveJobStatus {
    pub is_job_saved: bool,
}

/// Job application request; the CV is referenced by its upload URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyJobRequest {
    pub job_id: i64,
    pub cv_url: String,
}

/// Recruiter-side job creation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostRequest {
    pub title: String,
    pub description: String,
    pub requirement: String,
    pub position: String,
    pub qualification: String,
    pub experience: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub workplace_type: String,
    pub salary: String,
    #[serde(rename = "expirateAt")]
    pub expires_at: DateTime<Utc>,
}
