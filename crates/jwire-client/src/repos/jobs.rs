//! Job-board operations: listings, detail, saving, applying, searching.

use jwire_models::{
    ApplyJobRequest, JobDetail, JobFilter, JobPostRequest, JobSummary, Outcome, SaveJobRequest,
    SaveJobStatus, SavedJob,
};

use crate::envelope;
use crate::transport::ApiClient;

/// Repository for job postings and the current user's interactions with them.
#[derive(Clone)]
pub struct JobRepository {
    client: ApiClient,
}

impl JobRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create a job posting (recruiter side).
    pub async fn create(&self, request: &JobPostRequest) -> Outcome<()> {
        let response = match self.client.post("jobpost/create", request).await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_unit(response, "Failed to create job post").await
    }

    /// All job postings.
    pub async fn list(&self) -> Outcome<Vec<JobSummary>> {
        let response = match self.client.get("jobpost/list").await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_or_default(response, "Failed to fetch job posts").await
    }

    /// Recently posted jobs.
    pub async fn list_recent(&self) -> Outcome<Vec<JobSummary>> {
        let response = match self.client.get("jobpost/list-recent").await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_or_default(response, "Failed to fetch recent job posts").await
    }

    /// Newest jobs for the home screen.
    pub async fn newest(&self) -> Outcome<Vec<JobSummary>> {
        let response = match self.client.get("jobpost/newest-jobs").await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_or_default(response, "Failed to fetch newest job posts").await
    }

    /// Full posting detail; an all-empty detail is the missing-data fallback.
    pub async fn detail(&self, id: i64) -> Outcome<JobDetail> {
        let response = match self.client.get_query("jobpost/detail", &[("id", id)]).await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_or_default(response, "Failed to fetch job post detail").await
    }

    /// Flip the saved flag server-side; the answer carries the confirmed
    /// state, not the requested one.
    pub async fn save_job(&self, job_id: i64) -> Outcome<SaveJobStatus> {
        let request = SaveJobRequest { job_id };
        let response = match self.client.post("jobpost/save-job", &request).await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_or_default(response, "Failed to save job").await
    }

    /// Jobs the current user has saved.
    pub async fn saved_jobs(&self) -> Outcome<Vec<SavedJob>> {
        let response = match self.client.get("jobpost/saved-jobs").await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_or_default(response, "Failed to fetch saved jobs").await
    }

    /// Apply with an already-uploaded CV.
    pub async fn apply(&self, job_id: i64, cv_url: &str) -> Outcome<()> {
        let request = ApplyJobRequest {
            job_id,
            cv_url: cv_url.to_string(),
        };
        let response = match self.client.post("jobpost/apply", &request).await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_unit(response, "Failed to apply job").await
    }

    /// Filtered search.
    pub async fn search(&self, filter: &JobFilter) -> Outcome<Vec<JobSummary>> {
        let response = match self.client.post("jobpost/search", filter).await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_or_default(response, "Failed to search jobs").await
    }
}
