//! Employee profile operations.

use tracing::info;

use jwire_models::{
    ChangeAvatarRequest, ChangePasswordRequest, EmployeeProfile, Outcome, ProfileUpdate,
};
use jwire_session::CredentialUpdate;

use crate::envelope;
use crate::transport::ApiClient;

/// Repository for the employee's own profile.
#[derive(Clone)]
pub struct EmployeeRepository {
    client: ApiClient,
}

impl EmployeeRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The employee's profile; this endpoint always returns data on success.
    pub async fn profile(&self) -> Outcome<EmployeeProfile> {
        let response = match self.client.get("employee/profile").await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_required(response, "Failed to get profile").await
    }

    /// Update the profile. The response carries a re-issued bearer token
    /// (the login identifier may have changed), so the stored credential is
    /// partially overwritten on success.
    pub async fn update_profile(&self, profile: &EmployeeProfile) -> Outcome<ProfileUpdate> {
        let response = match self.client.post("employee/profile", profile).await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        let outcome =
            envelope::decode_required::<ProfileUpdate>(response, "Failed to update profile").await;
        if let Outcome::Success(update) = &outcome {
            self.client.session().apply_update(CredentialUpdate {
                email: Some(update.email.clone()),
                name: Some(update.full_name.clone()),
                token: Some(update.token.clone()),
                ..CredentialUpdate::default()
            });
            info!("Profile updated");
        }
        outcome
    }

    /// Current avatar URL.
    pub async fn avatar(&self) -> Outcome<String> {
        let response = match self.client.get("employee/avatar").await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_or_default(response, "Failed to get profile image").await
    }

    /// Replace the avatar. Falls back to the submitted URL when the server
    /// confirms without echoing one; the stored credential follows suit.
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
