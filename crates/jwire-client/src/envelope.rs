//! Envelope decoding: raw transport responses into `Outcome` values.

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

use jwire_models::{Envelope, Outcome};

use crate::error::ClientError;

/// Decode an operation that must return a payload.
///
/// A success envelope without `data` is a failure here; the login contract
/// treats a confirmed-but-empty response as malformed.
pub async fn decode_required<T: DeserializeOwned>(response: Response, fallback: &str) -> Outcome<T> {
    match decode(response, fallback).await {
        Outcome::Success(Some(data)) => Outcome::Success(data),
        Outcome::Success(None) => Outcome::from_error(ClientError::InvalidResponse),
        Outcome::Failure(reason) => Outcome::Failure(reason),
    }
}

/// Decode an operation whose missing payload falls back to `T::default()`:
/// an empty list, an empty string, a defaulted struct.
pub async fn decode_or_default<T: DeserializeOwned + Default>(
    response: Response,
    fallback: &str,
) -> Outcome<T> {
    decode(response, fallback)
        .await
        .map(|data| data.unwrap_or_default())
}

/// Decode a void operation; a success envelope needs no payload.
pub async fn decode_unit(response: Response, fallback: &str) -> Outcome<()> {
    decode::<serde::de::IgnoredAny>(response, fallback)
        .await
        .map(|_| ())
}

/// Classify a transport response into `Success(data?)` or `Failure(reason)`.
///
/// The envelope's own `statusCode` is the success predicate; a 2xx transport
/// status is necessary but not sufficient. Parse failures on the error path
/// collapse to "Unknown error" rather than surfacing the parse error, which
/// loses detail on a path where only the message matters.
async fn decode<T: DeserializeOwned>(response: Response, fallback: &str) -> Outcome<Option<T>> {
    let transport_status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return Outcome::from_error(ClientError::Network(e)),
    };

    let envelope: Envelope<T> = match serde_json::from_str(&body) {
        Ok(envelope) => envelope,
        Err(e) if transport_status.is_success() => {
            debug!(%transport_status, "Unparseable success body: {}", e);
            return Outcome::from_error(ClientError::InvalidResponse);
        }
        Err(_) if body.trim().is_empty() => {
            return Outcome::from_error(ClientError::HttpStatus(transport_status.as_u16()));
        }
        Err(e) => {
            debug!(%transport_status, "Unparseable error body: {}", e);
            return Outcome::from_error(ClientError::Unknown);
        }
    };

    if !transport_status.is_success() || !envelope.is_success() {
        return Outcome::Failure(envelope.failure_reason(fallback));
    }

    Outcome::Success(envelope.data)
}
