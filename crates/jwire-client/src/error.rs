//! Client error types.
//!
//! Everything here is internal to the access layer: repositories convert
//! each variant into an `Outcome::Failure` carrying the displayed message,
//! so none of these cross the repository boundary as errors.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Failure classes below the repository boundary.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure; no usable response reached the client.
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx transport response without a parseable envelope body.
    #[error("Request failed with status {0}")]
    HttpStatus(u16),

    /// Success response whose body could not be decoded, or that lacked
    /// required payload data.
    #[error("Invalid response format")]
    InvalidResponse,

    /// Error-path body that could not be interpreted at all.
    #[error("Unknown error")]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(ClientError::HttpStatus(503).to_string(), "Request failed with status 503");
        assert_eq!(ClientError::InvalidResponse.to_string(), "Invalid response format");
        assert_eq!(ClientError::Unknown.to_string(), "Unknown error");
    }
}
