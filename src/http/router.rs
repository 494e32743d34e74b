//! Router assembly.

use super::{handlers, middleware::require_identity};
use crate::auth::services::AuthorizationGate;
use crate::task::{ports::TaskRepository, services::TaskApiService};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Shared state handed to every task handler.
pub struct AppState<R>
where
    R: TaskRepository,
{
    tasks: TaskApiService<R>,
}

impl<R: TaskRepository> AppState<R> {
    /// Wraps the task API core.
    #[must_use]
    pub const fn new(tasks: TaskApiService<R>) -> Self {
        Self { tasks }
    }

    /// Returns the task API core.
    #[must_use]
    pub const fn tasks(&self) -> &TaskApiService<R> {
        &self.tasks
    }
}

impl<R: TaskRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
        }
    }
}

/// Route-level switches chosen by configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterOptions {
    /// Places `GET /tasks` behind the authorization gate.
    pub protect_list: bool,
    /// Origins allowed by CORS; empty allows any origin.
    pub cors_origins: Vec<HeaderValue>,
}

/// Builds the application router.
///
/// | Route | Gate |
/// |---|---|
/// | `GET /` | never |
/// | `GET /tasks` | when [`RouterOptions::protect_list`] is set |
/// | `POST /tasks`, `PATCH /tasks`, `DELETE /tasks/{id}` | always |
///
/// Unmatched paths and unsupported methods on known paths answer
/// `404 {"message": "Route not found"}` without consulting the gate.
pub fn build_router<R>(
    tasks: TaskApiService<R>,
    gate: AuthorizationGate,
    options: &RouterOptions,
) -> Router
where
    R: TaskRepository + 'static,
{
    // Layered per method so the method-mismatch fallback stays ungated.
    let gated = middleware::from_fn_with_state(gate, require_identity);

    let mut list = get(handlers::list_tasks::<R>);
    if options.protect_list {
        list = list.route_layer(gated.clone());
    }
    let tasks_route = list.merge(
        post(handlers::create_task::<R>)
            .patch(handlers::update_task::<R>)
            .route_layer(gated.clone()),
    );
    let task_route = delete(handlers::delete_task::<R>).route_layer(gated);

    Router::new()
        .route("/", get(handlers::root))
        .route("/tasks", tasks_route)
        .route("/tasks/{id}", task_route)
        .method_not_allowed_fallback(handlers::route_not_found)
        .fallback(handlers::route_not_found)
        .with_state(AppState::new(tasks))
        .layer(cors_layer(&options.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.iter().cloned())
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
