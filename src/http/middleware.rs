//! Axum middleware wrapping the authorization gate.

use crate::auth::{domain::AuthError, services::AuthorizationGate};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Rejects requests without a valid credential before they reach a handler.
///
/// On success the verified [`crate::auth::domain::Identity`] is inserted into
/// the request extensions.
///
/// # Errors
///
/// Returns [`AuthError`], rendered as a 401 envelope, when the credential is
/// missing or invalid.
pub async fn require_identity(
    State(gate): State<AuthorizationGate>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = gate.authorize(request.headers()).await?;
    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}
