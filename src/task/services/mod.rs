//! Application services for the task API.

mod api;

pub use api::{InvalidPayload, TaskApiError, TaskApiResult, TaskApiService};
