//! Recruiter profile and CV review operations.

use jwire_models::{
    ChangeAvatarRequest, ChangePasswordRequest, CvRecord, Outcome, RecruiterInfo, RecruiterProfile,
};
use jwire_session::CredentialUpdate;

use crate::envelope;
use crate::transport::ApiClient;

/// Repository for the recruiter's company profile and submitted CVs.
#[derive(Clone)]
pub struct RecruiterRepository {
    client: ApiClient,
}

impl RecruiterRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The recruiter's own company profile; all-None when not yet filled in.
    pub async fn profile(&self) -> Outcome<RecruiterProfile> {
        let response = match self.client.get("recruiter/get/profile").await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_or_default(response, "Failed to fetch recruiter profile").await
    }

    /// Update the company profile.
    pub async fn update_profile(&self, profile: &RecruiterProfile) -> Outcome<()> {
        let response = match self.client.post("recruiter/update/profile", profile).await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_unit(response, "Failed to update recruiter profile").await
    }

    /// Public recruiter page for a company, looked up by account email.
    pub async fn info(&self, email: &str) -> Outcome<RecruiterInfo> {
        let response = match self
            .client
            .get_query("recruiter/get/info", &[("email", email)])
            .await
        {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_or_default(response, "Failed to fetch recruiter info").await
    }

    /// CVs submitted against one of the recruiter's postings.
    pub async fn cvs(&self, job_id: i64) -> Outcome<Vec<CvRecord>> {
        let response = match self
            .client
            .get_query("recruiter/get/cv", &[("id", job_id)])
            .await
        {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_or_default(response, "Failed to fetch CV").await
    }

    // The backend serves both roles on the employee account paths.

    /// Current avatar URL.
    pub async fn avatar(&self) -> Outcome<String> {
        let response = match self.client.get("employee/avatar").await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_or_default(response, "Failed to get profile image").await
    }

    /// Replace the avatar and update the stored credential to match.
    pub async fn change_avatar(&self, image_url: &str) -> Outcome<String> {
        let request = ChangeAvatarRequest {
            image_url: image_url.to_string(),
        };
        let response = match self.client.post("employee/change-avatar", &request).await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        let outcome = envelope::decode_or_default::<String>(response, "Failed to change avatar")
            .await
            .map(|url| {
                if url.is_empty() {
                    image_url.to_string()
                } else {
                    url
                }
            });
        if let Outcome::Success(url) = &outcome {
            self.client.session().apply_update(CredentialUpdate {
                avatar_url: Some(url.clone()),
                ..CredentialUpdate::default()
            });
        }
        outcome
    }

    /// Change the account password; a void operation.
    pub async fn change_password(
        &self,
        current: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Outcome<()> {
        let request = ChangePasswordRequest {
            current: current.to_string(),
            new_password: new_password.to_string(),
            confirm_password: confirm_password.to_string(),
        };
        let response = match self.client.post("employee/change-password", &request).await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_unit(response, "Failed to change password").await
    }
}
