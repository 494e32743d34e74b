//! Shared world state for task API BDD scenarios.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rstest::fixture;
use serde_json::Value;
use taskboard::{
    auth::{adapters::StaticTokenVerifier, services::AuthorizationGate},
    http::{RouterOptions, build_router},
    task::{adapters::memory::InMemoryTaskRepository, services::TaskApiService},
};
use tower::ServiceExt;

/// Token accepted by the scenario gate.
pub const TOKEN: &str = "scenario-token";

/// Scenario world for task API behaviour tests.
pub struct TaskApiWorld {
    pub app: Router,
    pub token: Option<&'static str>,
    pub last_created_id: Option<i64>,
    pub last_status: Option<StatusCode>,
    pub last_body: Option<Value>,
}

impl TaskApiWorld {
    /// Creates a world serving an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let gate = AuthorizationGate::new(Arc::new(
            StaticTokenVerifier::new().with_token(TOKEN, "scenario"),
        ));
        let tasks = TaskApiService::new(Arc::new(InMemoryTaskRepository::new()));
        Self {
            app: build_router(tasks, gate, &RouterOptions::default()),
            token: None,
            last_created_id: None,
            last_status: None,
            last_body: None,
        }
    }

    /// Sends a request as the current caller and returns status and body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the body is not
    /// JSON.
    pub fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
    ) -> Result<(StatusCode, Value), eyre::Report> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let payload = body.map_or_else(Body::empty, |json| Body::from(json.to_string()));
        let request = builder.body(payload)?;
        let app = self.app.clone();
        run_async(async move {
            let response = app.oneshot(request).await?;
            let status = response.status();
            let bytes = response.into_body().collect().await?.to_bytes();
            let json: Value = serde_json::from_slice(&bytes)?;
            Ok::<_, eyre::Report>((status, json))
        })
    }

    /// Sends a request and records its outcome as the last response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn record(
        &mut self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
    ) -> Result<(), eyre::Report> {
        let (status, response) = self.send(method, uri, body)?;
        self.last_status = Some(status);
        self.last_body = Some(response);
        Ok(())
    }

    /// Fetches the current task list.
    ///
    /// # Errors
    ///
    /// Returns an error if the list request fails or is not enveloped.
    pub fn list(&self) -> Result<Vec<Value>, eyre::Report> {
        let (status, body) = self.send(Method::GET, "/tasks", None)?;
        eyre::ensure!(status == StatusCode::OK, "list failed with {status}");
        body.get("data")
            .and_then(Value::as_array)
            .cloned()
            .ok_or_else(|| eyre::eyre!("list response has no data array: {body}"))
    }
}

impl Default for TaskApiWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskApiWorld {
    TaskApiWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
