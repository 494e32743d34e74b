//! Repository port for task persistence and lookup.

use crate::task::domain::{NewTask, Task, TaskId, TaskUpdate};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Maximum number of tasks returned by [`TaskRepository::list`].
pub const TASK_LIST_LIMIT: usize = 10;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every operation is a single round trip to the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns the most recent tasks, newest first, capped at
    /// [`TASK_LIST_LIMIT`].
    ///
    /// Ties on the creation timestamp are ordered by descending identifier.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Inserts a task and returns the store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store rejects the
    /// insert.
    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<TaskId>;

    /// Fetches exactly one task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no row matches.
    async fn get(&self, id: TaskId) -> TaskRepositoryResult<Task>;

    /// Overwrites the title, description, and status of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no row was affected.
    async fn update(&self, update: &TaskUpdate) -> TaskRepositoryResult<()>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no row was affected.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("{0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
