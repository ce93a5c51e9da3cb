//! Authentication operations.

use tracing::info;

use jwire_models::{AuthResponse, LoginRequest, Outcome, RegisterRequest};

use crate::envelope;
use crate::transport::ApiClient;

/// Repository for login and registration.
#[derive(Clone)]
pub struct AuthRepository {
    client: ApiClient,
}

impl AuthRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Log in and store the issued credential on success.
    pub async fn login(&self, identifier: &str, password: &str) -> Outcome<AuthResponse> {
        let request = LoginRequest {
            identifier: identifier.to_string(),
            password: password.to_string(),
        };
        let response = match self.client.post("auth/login", &request).await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };

        let outcome =
            envelope::decode_required::<AuthResponse>(response, "Authentication failed").await;
        if let Outcome::Success(auth) = &outcome {
            self.client.session().save(auth);
            info!(email = %auth.email, "Logged in");
        }
        outcome
    }

    /// Create a new account; the user logs in separately afterwards.
    pub async fn register(
        &self,
        role: &str,
        name: &str,
        email: &str,
        password: &str,
    ) -> Outcome<()> {
        let request = RegisterRequest {
            role: role.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = match self.client.post("auth/register", &request).await {
            Ok(response) => response,
            Err(e) => return Outcome::from_error(e),
        };
        envelope::decode_unit(response, "Registration failed").await
    }
}
