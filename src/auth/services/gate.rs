//! The authorization gate placed in front of mutating routes.

use crate::auth::{
    domain::{AuthError, Credential, Identity},
    ports::IdentityVerifier,
};
use axum::http::{HeaderMap, header};
use std::sync::Arc;
use tracing::debug;

/// Cookie consulted when a request has no bearer token.
pub const DEFAULT_SESSION_COOKIE: &str = "session";

/// Extracts and verifies the credential carried by a request.
///
/// A bearer token in the `Authorization` header takes precedence over the
/// session cookie.
#[derive(Clone)]
pub struct AuthorizationGate {
    verifier: Arc<dyn IdentityVerifier>,
    session_cookie: String,
}

impl AuthorizationGate {
    /// Creates a gate verifying credentials with `verifier`.
    #[must_use]
    pub fn new(verifier: Arc<dyn IdentityVerifier>) -> Self {
        Self {
            verifier,
            session_cookie: DEFAULT_SESSION_COOKIE.to_owned(),
        }
    }

    /// Sets the session cookie name.
    #[must_use]
    pub fn with_session_cookie(mut self, name: impl Into<String>) -> Self {
        self.session_cookie = name.into();
        self
    }

    /// Finds the credential in `headers`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredential`] when neither a bearer token
    /// nor the session cookie is present.
    pub fn extract_credential(&self, headers: &HeaderMap) -> Result<Credential, AuthError> {
        let bearer = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(Credential::from_authorization);
        if let Some(credential) = bearer {
            return Ok(credential);
        }

        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|cookies| Credential::from_cookie_header(cookies, &self.session_cookie))
            .ok_or(AuthError::MissingCredential)
    }

    /// Authorizes a request by its headers.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the credential is missing or rejected by the
    /// verifier.
    pub async fn authorize(&self, headers: &HeaderMap) -> Result<Identity, AuthError> {
        let credential = self.extract_credential(headers)?;
        let identity = self.verifier.verify(&credential).await?;
        debug!(subject = identity.subject(), "request authorized");
        Ok(identity)
    }
}
