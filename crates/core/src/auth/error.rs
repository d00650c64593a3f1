//! Authentication error types.

use thiserror::Error;

/// Login failures. Surfaced to the login form, never thrown past it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email does not look like an email.
    #[error("Invalid email format")]
    InvalidEmailFormat,

    /// No mock user matches the email/password pair.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

impl AuthError {
    /// Returns the error code for log lines and UI surfaces.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
        }
    }
}
