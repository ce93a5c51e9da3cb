//! Candidate CV wire types (recruiter review side).

use serde::{Deserialize, Serialize};

/// One submitted CV attached to a job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvRecord {
    #[serde(rename = "idCV")]
    pub id: i64,
    #[serde(rename = "nameEmployee")]
    pub employee_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub cv_link: String,
}
