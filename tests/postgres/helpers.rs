//! Shared test helpers for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use rstest::fixture;
use taskboard::task::adapters::postgres::PostgresTaskRepository;

/// Environment variable naming the test database.
pub const TEST_DATABASE_URL_ENV: &str = "TASKBOARD_TEST_DATABASE_URL";

/// SQL to create the task schema.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_tasks/up.sql");

/// Opens a never-committed transaction on every pooled connection, with an
/// empty `tasks` table inside it.
#[derive(Debug)]
struct IsolatedSchema;

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for IsolatedSchema {
    fn on_acquire(&self, connection: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .begin_test_transaction()
            .map_err(diesel::r2d2::Error::QueryError)?;
        connection
            .batch_execute(CREATE_SCHEMA_SQL)
            .map_err(diesel::r2d2::Error::QueryError)?;
        connection
            .batch_execute("DELETE FROM tasks")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds a repository over a single-connection pool, or `None` when no test
/// database is configured.
///
/// # Panics
///
/// Panics when the database is configured but unreachable.
#[fixture]
pub fn repository() -> Option<PostgresTaskRepository> {
    let url = std::env::var(TEST_DATABASE_URL_ENV).ok()?;
    let pool = Pool::builder()
        .max_size(1)
        .connection_customizer(Box::new(IsolatedSchema))
        .build(ConnectionManager::<PgConnection>::new(url))
        .expect("test database should be reachable");
    Some(PostgresTaskRepository::new(pool))
}
