//! The two-variant result union every repository operation returns.

/// Result of a repository operation.
///
/// Expected failures (transport, decode, business) travel as
/// `Failure(reason)` values; repository operations never propagate them as
/// errors or panics. The reason string is rendered to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Operation succeeded with a payload.
    Success(T),
    /// Operation failed; `reason` is the user-facing message.
    Failure(String),
}

impl<T> Outcome<T> {
    /// Build a failure from anything displayable (transport errors, etc.).
    pub fn from_error(err: impl std::fmt::Display) -> Self {
        Outcome::Failure(err.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success payload, if any.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure reason, if any.
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(reason) => Some(reason),
        }
    }

    /// Map the success payload, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(reason) => Outcome::Failure(reason),
        }
    }
}
