//! Notification operations.

use jwire_models::{Notification, Outcome};

use crate::envelope;
use crate::transport::ApiClient;

/// Repository for application-status notifications.
#[derive(Clone)]
pub struct NotificationRepository {
    client: ApiClient,
}

impl NotificationRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All notifications for the current user.
    pub async fn list(&self) -> Outcome<Vec<Notification>> {
        let response = match self.client.get("notification/get").await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_or_default(response, "Failed to fetch notifications").await
    }

    /// Accept the application a notification refers to.
    pub async fn accept(&self, id: i64) -> Outcome<()> {
        let response = match self
            .client
            .post_query("notification/accept", &[("id", id)])
            .await
        {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_unit(response, "Failed to accept notification").await
    }

    /// Reject the application a notification refers to.
    pub async fn reject(&self, id: i64) -> Outcome<()> {
        let response = match self
            .client
            .post_query("notification/reject", &[("id", id)])
            .await
        {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_unit(response, "Failed to reject notification").await
    }

    /// Delete a notification.
    pub async fn delete(&self, id: i64) -> Outcome<()> {
        let response = match self
            .client
            .post_query("notification/delete", &[("id", id)])
            .await
        {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_unit(response, "Failed to delete notification").await
    }
}
