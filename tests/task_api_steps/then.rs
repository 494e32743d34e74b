//! Then steps for task API BDD scenarios.

use super::world::TaskApiWorld;
use rstest_bdd_macros::then;
use serde_json::Value;

#[then("the response status is {status:u16}")]
fn response_status(world: &TaskApiWorld, status: u16) -> Result<(), eyre::Report> {
    let actual = world
        .last_status
        .ok_or_else(|| eyre::eyre!("missing response in scenario world"))?;
    eyre::ensure!(
        actual.as_u16() == status,
        "expected status {status}, found {actual}"
    );
    Ok(())
}

#[then(r#"the response message is "{message}""#)]
fn response_message(world: &TaskApiWorld, message: String) -> Result<(), eyre::Report> {
    let body = world
        .last_body
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing response in scenario world"))?;
    eyre::ensure!(
        body.get("error") == Some(&Value::Bool(true)),
        "expected a failure envelope, found {body}"
    );
    eyre::ensure!(
        body.get("msg").and_then(Value::as_str) == Some(message.as_str()),
        "expected message {message:?}, found {body}"
    );
    Ok(())
}

#[then(r#"the newest task is titled "{title}" and described as "{description}""#)]
fn newest_task_fields(
    world: &TaskApiWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let tasks = world.list()?;
    let newest = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("task list is empty"))?;
    eyre::ensure!(
        newest.get("title").and_then(Value::as_str) == Some(title.as_str()),
        "unexpected title in {newest}"
    );
    eyre::ensure!(
        newest.get("description").and_then(Value::as_str) == Some(description.as_str()),
        "unexpected description in {newest}"
    );
    Ok(())
}

#[then("the newest task has an empty status")]
fn newest_task_has_empty_status(world: &TaskApiWorld) -> Result<(), eyre::Report> {
    let tasks = world.list()?;
    let newest = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("task list is empty"))?;
    eyre::ensure!(
        newest.get("status").and_then(Value::as_str) == Some(""),
        "expected empty status in {newest}"
    );
    Ok(())
}

#[then("the task list is empty")]
fn task_list_is_empty(world: &TaskApiWorld) -> Result<(), eyre::Report> {
    let tasks = world.list()?;
    eyre::ensure!(tasks.is_empty(), "expected no tasks, found {}", tasks.len());
    Ok(())
}
