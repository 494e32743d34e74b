//! HS256 JSON Web Token verification.

use crate::auth::{
    domain::{AuthError, Credential, Identity},
    ports::IdentityVerifier,
};
use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use std::fmt;

/// Settings for [`JwtIdentityVerifier`].
#[derive(Clone, PartialEq, Eq)]
pub struct JwtSettings {
    /// Shared HS256 secret.
    pub secret: String,
    /// Required `iss` claim, when set.
    pub issuer: Option<String>,
    /// Required `aud` claim, when set.
    pub audience: Option<String>,
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
}

/// Verifies bearer and session tokens signed with a shared HS256 secret.
///
/// The signature and `exp` claim are always checked; `iss` and `aud` only
/// when configured. The `sub` claim becomes the identity subject.
pub struct JwtIdentityVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityVerifier {
    /// Creates a verifier from `settings`.
    #[must_use]
    pub fn new(settings: &JwtSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        if let Some(issuer) = &settings.issuer {
            validation.set_issuer(&[issuer.as_str()]);
        }
        match &settings.audience {
            Some(audience) => validation.set_audience(&[audience.as_str()]),
            None => validation.validate_aud = false,
        }
        Self {
            key: DecodingKey::from_secret(settings.secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl IdentityVerifier for JwtIdentityVerifier {
    async fn verify(&self, credential: &Credential) -> Result<Identity, AuthError> {
        let token = decode::<Claims>(credential.expose(), &self.key, &self.validation)
            .map_err(|err| AuthError::InvalidCredential(err.to_string()))?;
        let subject = token.claims.sub;
        if subject.trim().is_empty() {
            return Err(AuthError::InvalidCredential(
                "token subject is empty".to_owned(),
            ));
        }
        Ok(Identity::new(subject))
    }
}
