//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Session absence or expiry is intentionally NOT an error: `current_user`
/// returns `Ok(None)` and callers route to the login view.
#[derive(Error, Debug)]
pub enum Error {
    /// Email/password do not match the demo account
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Client-side input validation failure, caught before any service call
    #[error("validation error: {0}")]
    Validation(String),

    /// Generic failure from a simulated (or real) backend call
    #[error("service error: {0}")]
    Service(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a service error
    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::InvalidCredentials.to_string(), "invalid credentials");
        assert_eq!(
            Error::validation("amount must be positive").to_string(),
            "validation error: amount must be positive"
        );
        assert!(Error::service("backend unavailable")
            .to_string()
            .contains("backend unavailable"));
    }
}
