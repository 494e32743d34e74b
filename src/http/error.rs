//! Maps classified failures to HTTP statuses and failure envelopes.

use super::Envelope;
use crate::auth::domain::AuthError;
use crate::task::services::TaskApiError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

impl IntoResponse for TaskApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidBody(_) | Self::InvalidId(_) | Self::ReadFailed(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Envelope::failure(self.to_string())).into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let Self::InvalidCredential(reason) = &self {
            debug!(reason = reason.as_str(), "credential rejected");
        }
        (StatusCode::UNAUTHORIZED, Envelope::failure(self.to_string())).into_response()
    }
}
