//! Authorization failures.

use thiserror::Error;

/// Errors returned while authorizing a request.
///
/// Every variant is reported to the caller as unauthorized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The request carried neither a bearer token nor a session cookie.
    #[error("Missing credentials")]
    MissingCredential,

    /// The credential was present but failed verification.
    #[error("Invalid credentials")]
    InvalidCredential(String),
}
