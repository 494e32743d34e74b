//! Verified caller identity.

use serde::Serialize;

/// Identity established by a successful credential verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    subject: String,
}

impl Identity {
    /// Creates an identity for `subject`.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }

    /// Returns the verified subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }
}
