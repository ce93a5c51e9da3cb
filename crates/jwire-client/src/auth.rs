//! Request authentication: bearer attachment and the 401 policy.

use reqwest::RequestBuilder;
use tracing::debug;

use jwire_session::CredentialStore;

/// Attach the stored bearer token to an outgoing request, if one exists.
///
/// Deliberately does not consult `is_valid()`: an expired-but-present token
/// is still sent and the server's 401 is the authority on expiry. Local
/// validity checks are for UI routing only. This stage performs no I/O and
/// never blocks.
pub fn attach_bearer(request: RequestBuilder, session: &CredentialStore) -> RequestBuilder {
    match session.token() {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

/// Reaction to a 401 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeAction {
    /// Terminal for the call chain: surface the failure, do not re-dispatch.
    Halt,
}

/// Decide what to do about a 401.
///
/// There is no refresh-token flow, so the answer is always
/// [`ChallengeAction::Halt`]. A future refresh flow replaces this single
/// decision point and must retry at most once per original request.
pub fn on_unauthorized(path: &str) -> ChallengeAction {
    debug!(path, "401 received and no credential refresh exists, not retrying");
    ChallengeAction::Halt
}
