//! Task API core: request parsing, merge-before-write, and error
//! classification for the four task operations.
//!
//! Handlers hand raw request input to [`TaskApiService`] and receive either a
//! domain value or a classified [`TaskApiError`]. The service is the only
//! layer that decides which failure class a repository error belongs to.

use crate::task::{
    domain::{
        CreatePayload, NewTask, ParseTaskIdError, Task, TaskDomainError, TaskId, TaskUpdate,
        UpdatePayload,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Reasons a request body was rejected.
#[derive(Debug, Error)]
pub enum InvalidPayload {
    /// The body is not valid JSON or lacks required fields.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The body parsed but failed field validation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The body could not be read, for example because it exceeds the size
    /// limit.
    #[error("unreadable body: {0}")]
    Unreadable(String),
}

/// Classified failures of task API operations.
///
/// The `Display` output is the message returned to callers.
#[derive(Debug, Error)]
pub enum TaskApiError {
    /// The request body could not be parsed or validated.
    #[error("Invalid body")]
    InvalidBody(#[source] InvalidPayload),

    /// The task identifier in the request path is not an integer.
    #[error("Invalid id")]
    InvalidId(#[source] ParseTaskIdError),

    /// No task exists with the requested identifier.
    #[error("Task not found")]
    NotFound(TaskId),

    /// Listing tasks failed in the store.
    #[error("Unable to read tasks")]
    ReadFailed(#[source] TaskRepositoryError),

    /// A store operation failed while creating, updating, or deleting.
    #[error("{0}")]
    Store(#[source] TaskRepositoryError),
}

/// Result type for task API operations.
pub type TaskApiResult<T> = Result<T, TaskApiError>;

/// Orchestrates validation, merging, and repository calls for task requests.
pub struct TaskApiService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R: TaskRepository> Clone for TaskApiService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskApiService<R>
where
    R: TaskRepository,
{
    /// Creates a service backed by `repository`.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the most recent tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::ReadFailed`] when the store cannot be read.
    pub async fn list(&self) -> TaskApiResult<Vec<Task>> {
        self.repository.list().await.map_err(|err| {
            warn!(error = %err, "failed to list tasks");
            TaskApiError::ReadFailed(err)
        })
    }

    /// Creates a task from a raw JSON body and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::InvalidBody`] when the body is malformed or the
    /// title or description is missing, and [`TaskApiError::Store`] when the
    /// insert fails.
    pub async fn create(&self, body: &[u8]) -> TaskApiResult<TaskId> {
        let new_task = parse_create(body)?;
        let id = self
            .repository
            .create(&new_task)
            .await
            .map_err(classify_store_error)?;
        debug!(task_id = %id, "task created");
        Ok(id)
    }

    /// Applies a partial update from a raw JSON body.
    ///
    /// Fields the caller did not supply keep their stored values. Returns the
    /// task as stored after the update.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::InvalidBody`] when the body is malformed,
    /// [`TaskApiError::NotFound`] when the task does not exist, and
    /// [`TaskApiError::Store`] when the store fails.
    pub async fn update(&self, body: &[u8]) -> TaskApiResult<Task> {
        let payload = parse_update(body)?;
        let current = self.fetch(payload.id).await?;
        let merged = merge(&payload, &current);
        self.repository
            .update(&merged)
            .await
            .map_err(classify_store_error)?;
        debug!(task_id = %merged.id, "task updated");
        Ok(current.with_fields(&merged))
    }

    /// Deletes the task named by a raw path segment and returns its
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::InvalidId`] when the segment is not an integer,
    /// [`TaskApiError::NotFound`] when the task does not exist, and
    /// [`TaskApiError::Store`] when the store fails.
    pub async fn delete(&self, raw_id: &str) -> TaskApiResult<TaskId> {
        let id = raw_id.parse::<TaskId>().map_err(|err| {
            debug!(error = %err, "rejected task id");
            TaskApiError::InvalidId(err)
        })?;
        self.fetch(id).await?;
        self.repository
            .delete(id)
            .await
            .map_err(classify_store_error)?;
        debug!(task_id = %id, "task deleted");
        Ok(id)
    }

    async fn fetch(&self, id: TaskId) -> TaskApiResult<Task> {
        self.repository.get(id).await.map_err(classify_store_error)
    }
}

fn parse_create(body: &[u8]) -> TaskApiResult<NewTask> {
    serde_json::from_slice::<CreatePayload>(body)
        .map_err(InvalidPayload::from)
        .and_then(|payload| payload.into_new_task().map_err(InvalidPayload::from))
        .map_err(reject_body)
}

fn parse_update(body: &[u8]) -> TaskApiResult<UpdatePayload> {
    let payload = serde_json::from_slice::<UpdatePayload>(body)
        .map_err(|err| reject_body(err.into()))?;
    payload.validate().map_err(|err| reject_body(err.into()))?;
    Ok(payload)
}

fn reject_body(reason: InvalidPayload) -> TaskApiError {
    debug!(error = %reason, "rejected request body");
    TaskApiError::InvalidBody(reason)
}

/// Resolves every field: the caller's value when supplied, else the stored one.
fn merge(payload: &UpdatePayload, current: &Task) -> TaskUpdate {
    TaskUpdate {
        id: current.id(),
        title: payload
            .supplied_title()
            .unwrap_or_else(|| current.title())
            .to_owned(),
        description: payload
            .supplied_description()
            .unwrap_or_else(|| current.description())
            .to_owned(),
        status: payload
            .supplied_status()
            .unwrap_or_else(|| current.status())
            .to_owned(),
    }
}

fn classify_store_error(err: TaskRepositoryError) -> TaskApiError {
    match err {
        TaskRepositoryError::NotFound(id) => TaskApiError::NotFound(id),
        other @ TaskRepositoryError::Persistence(_) => {
            warn!(error = %other, "task store operation failed");
            TaskApiError::Store(other)
        }
    }
}
