//! Uniform response wrapper shared by every task endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

/// Response body of the form `{"error": bool, "data": ...}` or
/// `{"error": bool, "msg": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T = ()> {
    error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    msg: Option<Value>,
}

impl<T> Envelope<T> {
    /// Wraps a successful result under `data`.
    #[must_use]
    pub const fn data(data: T) -> Self {
        Self {
            error: false,
            data: Some(data),
            msg: None,
        }
    }
}

impl Envelope {
    /// Wraps a successful result under `msg`.
    #[must_use]
    pub fn message(msg: impl Into<Value>) -> Self {
        Self {
            error: false,
            data: None,
            msg: Some(msg.into()),
        }
    }

    /// Builds a failure envelope carrying a human-readable message.
    #[must_use]
    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            error: true,
            data: None,
            msg: Some(Value::String(msg.into())),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = if self.error {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::OK
        };
        (status, Json(self)).into_response()
    }
}

/// Body of the root and fallback routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    /// Message text.
    pub message: &'static str,
}
