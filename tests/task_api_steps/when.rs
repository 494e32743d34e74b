//! When steps for task API BDD scenarios.

use super::world::TaskApiWorld;
use axum::http::Method;
use rstest_bdd_macros::when;
use serde_json::json;

#[when(r#"the caller creates a task titled "{title}" described as "{description}""#)]
fn create_task(
    world: &mut TaskApiWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let body = json!({ "title": title, "description": description });
    world.record(Method::POST, "/tasks", Some(&body))
}

#[when(r#"the caller changes the title of that task to "{title}""#)]
fn change_title(world: &mut TaskApiWorld, title: String) -> Result<(), eyre::Report> {
    let id = world
        .last_created_id
        .ok_or_else(|| eyre::eyre!("missing created task id in scenario world"))?;
    let body = json!({ "id": id, "title": title });
    world.record(Method::PATCH, "/tasks", Some(&body))
}

#[when("the caller deletes task {id:i32}")]
fn delete_task(world: &mut TaskApiWorld, id: i32) -> Result<(), eyre::Report> {
    world.record(Method::DELETE, &format!("/tasks/{id}"), None)
}
