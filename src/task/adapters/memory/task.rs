//! In-memory repository for task tests and local runs.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskUpdate},
    ports::{TASK_LIST_LIMIT, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned sequentially from 1, and creation timestamps
/// come from the injected clock.
#[derive(Debug)]
pub struct InMemoryTaskRepository<C = DefaultClock> {
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i32,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl<C> Clone for InMemoryTaskRepository<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock + Send + Sync> InMemoryTaskRepository<C> {
    /// Creates an empty in-memory repository stamping tasks with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> TaskRepository for InMemoryTaskRepository<C> {
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        tasks.sort_by(|left, right| {
            right
                .created_at()
                .cmp(&left.created_at())
                .then_with(|| right.id().cmp(&left.id()))
        });
        tasks.truncate(TASK_LIST_LIMIT);
        Ok(tasks)
    }

    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<TaskId> {
        let mut state = self.write()?;
        let next = state.last_id.checked_add(1).ok_or_else(|| {
            TaskRepositoryError::persistence(std::io::Error::other("task id sequence exhausted"))
        })?;
        let id = TaskId::new(next);
        state.last_id = next;
        state.tasks.insert(
            id,
            Task::from_persisted(PersistedTaskData {
                id,
                title: task.title.clone(),
                description: task.description.clone(),
                status: task.status.clone(),
                created_at: self.clock.utc(),
            }),
        );
        Ok(id)
    }

    async fn get(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let state = self.read()?;
        state
            .tasks
            .get(&id)
            .cloned()
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn update(&self, update: &TaskUpdate) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let current = state
            .tasks
            .remove(&update.id)
            .ok_or(TaskRepositoryError::NotFound(update.id))?;
        state.tasks.insert(update.id, current.with_fields(update));
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}
