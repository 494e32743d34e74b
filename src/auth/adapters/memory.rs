//! Fixed token table for tests and local runs.

use crate::auth::{
    domain::{AuthError, Credential, Identity},
    ports::IdentityVerifier,
};
use async_trait::async_trait;
use std::collections::HashMap;

/// Accepts only tokens registered up front.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenVerifier {
    tokens: HashMap<String, Identity>,
}

impl StaticTokenVerifier {
    /// Creates a verifier that rejects every token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `token` as proof of `subject`.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>, subject: impl Into<String>) -> Self {
        self.tokens.insert(token.into(), Identity::new(subject));
        self
    }
}

#[async_trait]
impl IdentityVerifier for StaticTokenVerifier {
    async fn verify(&self, credential: &Credential) -> Result<Identity, AuthError> {
        self.tokens
            .get(credential.expose())
            .cloned()
            .ok_or_else(|| AuthError::InvalidCredential("unknown token".to_owned()))
    }
}
