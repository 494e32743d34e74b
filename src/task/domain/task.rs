//! Task record as exposed by the API and stored by repositories.

use super::TaskId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: String,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted status, empty when never set.
    pub status: String,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task status; empty when never set.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns this task with the mutable fields replaced by `update`.
    ///
    /// `id` and `created_at` are never touched.
    #[must_use]
    pub fn with_fields(self, update: &TaskUpdate) -> Self {
        Self {
            title: update.title.clone(),
            description: update.description.clone(),
            status: update.status.clone(),
            ..self
        }
    }
}

/// Validated input for inserting a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Non-empty title.
    pub title: String,
    /// Non-empty description.
    pub description: String,
    /// Status, possibly empty.
    pub status: String,
}

/// Fully resolved field values written by a repository update.
///
/// Repositories overwrite all three fields; callers perform any merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Target task.
    pub id: TaskId,
    /// Title to store.
    pub title: String,
    /// Description to store.
    pub description: String,
    /// Status to store.
    pub status: String,
}
