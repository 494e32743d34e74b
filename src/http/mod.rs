//! HTTP surface of the task service.
//!
//! Binds verbs and paths to the task API core, places the authorization
//! gate in front of the mutating routes, and shapes every response into the
//! shared [`Envelope`].

mod envelope;
mod error;
mod handlers;
mod middleware;
mod router;

pub use envelope::{Envelope, StatusMessage};
pub use middleware::require_identity;
pub use router::{AppState, RouterOptions, build_router};

#[cfg(test)]
mod tests;
