//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskUpdate},
    ports::{TASK_LIST_LIMIT, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::time::Duration;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool and eagerly opens its first connections.
///
/// `checkout_timeout` bounds how long a request waits for a free connection.
///
/// # Errors
///
/// Returns [`PoolError`] when the database cannot be reached within the
/// timeout.
pub fn connect(
    database_url: &str,
    max_size: u32,
    checkout_timeout: Duration,
) -> Result<TaskPgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .connection_timeout(checkout_timeout)
        .build(manager)
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let limit = i64::try_from(TASK_LIST_LIMIT).map_err(TaskRepositoryError::persistence)?;
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .select(TaskRow::as_select())
                .order((tasks::created_at.desc(), tasks::id.desc()))
                .limit(limit)
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }

    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<TaskId> {
        let new_task = task.clone();
        self.run_blocking(move |connection| {
            let row = NewTaskRow {
                title: &new_task.title,
                description: &new_task.description,
                status: &new_task.status,
            };
            diesel::insert_into(tasks::table)
                .values(&row)
                .returning(tasks::id)
                .get_result::<i32>(connection)
                .map(TaskId::new)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn get(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        self.run_blocking(move |connection| {
            tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?
                .map(row_to_task)
                .ok_or(TaskRepositoryError::NotFound(id))
        })
        .await
    }

    async fn update(&self, update: &TaskUpdate) -> TaskRepositoryResult<()> {
        let changes = update.clone();
        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(changes.id.into_inner()))
                .set((
                    tasks::title.eq(changes.title.as_str()),
                    tasks::description.eq(changes.description.as_str()),
                    tasks::status.eq(changes.status.as_str()),
                ))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            expect_one_row(affected, changes.id)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            expect_one_row(affected, id)
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> Task {
    let TaskRow {
        id,
        title,
        description,
        status,
        created_at,
    } = row;

    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title,
        description,
        status,
        created_at,
    })
}

fn expect_one_row(affected: usize, id: TaskId) -> TaskRepositoryResult<()> {
    if affected == 0 {
        return Err(TaskRepositoryError::NotFound(id));
    }
    Ok(())
}
