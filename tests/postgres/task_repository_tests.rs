//! Repository contract tests against `PostgreSQL`.

use crate::postgres::helpers::repository;
use rstest::rstest;
use taskboard::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{NewTask, TaskId, TaskUpdate},
    ports::{TASK_LIST_LIMIT, TaskRepository, TaskRepositoryError},
};

fn new_task(title: &str, status: &str) -> NewTask {
    NewTask {
        title: title.to_owned(),
        description: format!("{title} description"),
        status: status.to_owned(),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_get_round_trips_fields(
    repository: Option<PostgresTaskRepository>,
) -> Result<(), eyre::Report> {
    let Some(repo) = repository else {
        return Ok(());
    };

    let id = repo.create(&new_task("Buy milk", "")).await?;
    let stored = repo.get(id).await?;

    eyre::ensure!(stored.id() == id, "id mismatch");
    eyre::ensure!(stored.title() == "Buy milk", "title mismatch");
    eyre::ensure!(
        stored.description() == "Buy milk description",
        "description mismatch"
    );
    eyre::ensure!(stored.status().is_empty(), "status should default to empty");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_orders_newest_first_and_caps(
    repository: Option<PostgresTaskRepository>,
) -> Result<(), eyre::Report> {
    let Some(repo) = repository else {
        return Ok(());
    };
    let mut created = Vec::new();
    for n in 0..12 {
        created.push(repo.create(&new_task(&format!("task {n}"), "")).await?);
    }

    let listed: Vec<TaskId> = repo.list().await?.iter().map(|task| task.id()).collect();
    let expected: Vec<TaskId> = created.iter().rev().take(TASK_LIST_LIMIT).copied().collect();

    eyre::ensure!(listed == expected, "unexpected order {listed:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_fields_and_keeps_created_at(
    repository: Option<PostgresTaskRepository>,
) -> Result<(), eyre::Report> {
    let Some(repo) = repository else {
        return Ok(());
    };
    let id = repo.create(&new_task("Buy milk", "todo")).await?;
    let before = repo.get(id).await?;

    repo.update(&TaskUpdate {
        id,
        title: "Buy milk and bread".to_owned(),
        description: before.description().to_owned(),
        status: "done".to_owned(),
    })
    .await?;
    let after = repo.get(id).await?;

    eyre::ensure!(after.title() == "Buy milk and bread", "title not written");
    eyre::ensure!(after.status() == "done", "status not written");
    eyre::ensure!(after.created_at() == before.created_at(), "created_at changed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_rows_are_reported_as_not_found(
    repository: Option<PostgresTaskRepository>,
) -> Result<(), eyre::Report> {
    let Some(repo) = repository else {
        return Ok(());
    };
    let missing = TaskId::new(i32::MAX);

    let fetched = repo.get(missing).await;
    let updated = repo
        .update(&TaskUpdate {
            id: missing,
            title: "t".to_owned(),
            description: "d".to_owned(),
            status: String::new(),
        })
        .await;
    let deleted = repo.delete(missing).await;

    eyre::ensure!(
        matches!(fetched, Err(TaskRepositoryError::NotFound(_))),
        "get should report not found"
    );
    eyre::ensure!(
        matches!(updated, Err(TaskRepositoryError::NotFound(_))),
        "update should report not found"
    );
    eyre::ensure!(
        matches!(deleted, Err(TaskRepositoryError::NotFound(_))),
        "delete should report not found"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_row(
    repository: Option<PostgresTaskRepository>,
) -> Result<(), eyre::Report> {
    let Some(repo) = repository else {
        return Ok(());
    };
    let id = repo.create(&new_task("Buy milk", "")).await?;

    repo.delete(id).await?;

    eyre::ensure!(
        matches!(repo.get(id).await, Err(TaskRepositoryError::NotFound(_))),
        "deleted task is still readable"
    );
    Ok(())
}
