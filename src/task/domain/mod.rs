//! Domain model for task records.
//!
//! The task domain covers the persisted record, the validated inputs written
//! by repositories, and the request payloads accepted by the API, while
//! keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod payload;
mod task;

pub use error::{ParseTaskIdError, TaskDomainError};
pub use ids::TaskId;
pub use payload::{CreatePayload, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS, UpdatePayload};
pub use task::{NewTask, PersistedTaskData, Task, TaskUpdate};
