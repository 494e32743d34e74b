//! Identity verification port.

use crate::auth::domain::{AuthError, Credential, Identity};
use async_trait::async_trait;

/// External collaborator that turns a credential into an identity.
///
/// Implementations may introspect tokens locally or call out to an identity
/// provider; they hold no state owned by this crate.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verifies `credential`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredential`] when the credential is
    /// rejected.
    async fn verify(&self, credential: &Credential) -> Result<Identity, AuthError>;
}
