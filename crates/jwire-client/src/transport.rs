//! Authenticated HTTP transport.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;

use jwire_session::CredentialStore;

use crate::auth::{self, ChallengeAction};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// HTTP client for the backend API.
///
/// Owns the connection pool and the request pipeline: URL join, bearer
/// attachment, a single dispatch, and the 401 policy. Interpreting the
/// response body is the envelope decoder's job.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    session: Arc<CredentialStore>,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: ClientConfig, session: Arc<CredentialStore>) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(concat!("jwire-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self {
            http,
            config,
            session,
        })
    }

    /// The credential store backing this client.
    pub fn session(&self) -> &Arc<CredentialStore> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub(crate) async fn get(&self, path: &str) -> ClientResult<Response> {
        self.dispatch(path, self.http.get(self.url(path))).await
    }

    pub(crate) async fn get_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<Response> {
        self.dispatch(path, self.http.get(self.url(path)).query(query))
            .await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Response> {
        self.dispatch(path, self.http.post(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn post_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<Response> {
        self.dispatch(path, self.http.post(self.url(path)).query(query))
            .await
    }

    /// Run the request pipeline: attach the bearer credential, send once,
    /// consult the 401 policy, hand the response on.
    async fn dispatch(&self, path: &str, request: RequestBuilder) -> ClientResult<Response> {
        let request = auth::attach_bearer(request, &self.session);
        let response = request.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            match auth::on_unauthorized(path) {
                // Terminal: the response flows to the decoder as-is so the
                // server's failure message survives.
                ChallengeAction::Halt => {}
            }
        }

        Ok(response)
    }
}
