//! Request payloads accepted by the task API.
//!
//! Payloads are deserialized from raw JSON bodies and validated into the
//! domain inputs consumed by repositories.

use super::{NewTask, TaskDomainError, TaskId};
use serde::Deserialize;

/// Maximum title length, in characters, accepted by an update.
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum description length, in characters, accepted by an update.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePayload {
    /// Required title.
    pub title: String,
    /// Required description.
    pub description: String,
    /// Optional status; `null` and absent both mean empty.
    #[serde(default)]
    pub status: Option<String>,
}

impl CreatePayload {
    /// Validates the payload into a [`NewTask`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyField`] when the title or description
    /// is blank.
    pub fn into_new_task(self) -> Result<NewTask, TaskDomainError> {
        let Self {
            title,
            description,
            status,
        } = self;
        if title.trim().is_empty() {
            return Err(TaskDomainError::EmptyField("title"));
        }
        if description.trim().is_empty() {
            return Err(TaskDomainError::EmptyField("description"));
        }
        Ok(NewTask {
            title,
            description,
            status: status.unwrap_or_default(),
        })
    }
}

/// Body of a partial update request.
///
/// A field that is absent, `null`, or blank is "not supplied" and keeps the
/// stored value when merged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatePayload {
    /// Target task.
    pub id: TaskId,
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement status.
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdatePayload {
    /// Checks field length limits.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::FieldTooLong`] when the title or description
    /// exceeds its limit.
    pub fn validate(&self) -> Result<(), TaskDomainError> {
        check_length("title", self.title.as_deref(), TITLE_MAX_CHARS)?;
        check_length(
            "description",
            self.description.as_deref(),
            DESCRIPTION_MAX_CHARS,
        )
    }

    /// Returns the title when supplied.
    #[must_use]
    pub fn supplied_title(&self) -> Option<&str> {
        supplied(self.title.as_deref())
    }

    /// Returns the description when supplied.
    #[must_use]
    pub fn supplied_description(&self) -> Option<&str> {
        supplied(self.description.as_deref())
    }

    /// Returns the status when supplied.
    #[must_use]
    pub fn supplied_status(&self) -> Option<&str> {
        supplied(self.status.as_deref())
    }
}

fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

fn check_length(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), TaskDomainError> {
    let actual = value.map_or(0, |text| text.chars().count());
    if actual > max {
        return Err(TaskDomainError::FieldTooLong { field, max, actual });
    }
    Ok(())
}
