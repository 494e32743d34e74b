//! Request handlers delegating to the task API core.

use super::{AppState, Envelope, StatusMessage};
use crate::auth::domain::Identity;
use crate::task::{
    domain::{ParseTaskIdError, Task},
    ports::TaskRepository,
    services::{InvalidPayload, TaskApiError, TaskApiResult},
};
use axum::{
    Extension, Json,
    body::Bytes,
    extract::{
        Path, State,
        rejection::{BytesRejection, PathRejection},
    },
    http::StatusCode,
};
use tracing::{debug, info};

const ROOT_MESSAGE: &str = "Ciao Mario";
const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";

pub(super) async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: ROOT_MESSAGE,
    })
}

pub(super) async fn route_not_found() -> (StatusCode, Json<StatusMessage>) {
    (
        StatusCode::NOT_FOUND,
        Json(StatusMessage {
            message: ROUTE_NOT_FOUND_MESSAGE,
        }),
    )
}

pub(super) async fn list_tasks<R: TaskRepository + 'static>(
    State(state): State<AppState<R>>,
) -> TaskApiResult<Envelope<Vec<Task>>> {
    let tasks = state.tasks().list().await?;
    Ok(Envelope::data(tasks))
}

pub(super) async fn create_task<R: TaskRepository + 'static>(
    State(state): State<AppState<R>>,
    Extension(identity): Extension<Identity>,
    body: Result<Bytes, BytesRejection>,
) -> TaskApiResult<Envelope> {
    let id = state.tasks().create(&readable(body)?).await?;
    info!(task_id = %id, subject = identity.subject(), "task created");
    Ok(Envelope::message(id.into_inner()))
}

pub(super) async fn update_task<R: TaskRepository + 'static>(
    State(state): State<AppState<R>>,
    Extension(identity): Extension<Identity>,
    body: Result<Bytes, BytesRejection>,
) -> TaskApiResult<Envelope<Task>> {
    let task = state.tasks().update(&readable(body)?).await?;
    info!(task_id = %task.id(), subject = identity.subject(), "task updated");
    Ok(Envelope::data(task))
}

pub(super) async fn delete_task<R: TaskRepository + 'static>(
    State(state): State<AppState<R>>,
    Extension(identity): Extension<Identity>,
    raw_id: Result<Path<String>, PathRejection>,
) -> TaskApiResult<Envelope> {
    let Path(raw_id) = raw_id.map_err(|rejection| {
        debug!(error = %rejection, "rejected task id segment");
        TaskApiError::InvalidId(ParseTaskIdError(rejection.body_text()))
    })?;
    let id = state.tasks().delete(&raw_id).await?;
    info!(task_id = %id, subject = identity.subject(), "task deleted");
    Ok(Envelope::message(format!(
        "Task with ID {id} deleted successfully"
    )))
}

/// Keeps body extraction failures inside the failure envelope.
fn readable(body: Result<Bytes, BytesRejection>) -> TaskApiResult<Bytes> {
    body.map_err(|rejection| {
        debug!(error = %rejection, "request body unreadable");
        TaskApiError::InvalidBody(InvalidPayload::Unreadable(rejection.body_text()))
    })
}
