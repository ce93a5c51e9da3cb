//! Employee and recruiter profile wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Calendar date of birth as three numeric fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

/// Employee profile as read and written on the profile screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub date_of_birth: DateOfBirth,
    pub gender: String,
    pub location: String,
}

/// Profile-update response; carries a re-issued bearer token because the
/// login identifier may have changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub date_of_birth: DateOfBirth,
    pub gender: String,
    pub location: String,
    pub token: String,
}

/// Avatar replacement request; the image is uploaded elsewhere and
/// referenced here by URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeAvatarRequest {
    pub image_url: String,
}

/// Recruiter company profile; all-None is the decode fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecruiterProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

/// Public recruiter page: company info plus its open positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterInfo {
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub recruiter_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub since: String,
    #[serde(default, rename = "jobIntroDTOs")]
    pub job_intros: Vec<JobIntro>,
}

/// Job teaser row on the recruiter page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobIntro {
    pub id: i64,
    pub title: String,
    pub salary: String,
    pub position: String,
    pub job_type: String,
    #[serde(default, rename = "createAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_saved: bool,
}
