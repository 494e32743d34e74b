//! Taskboard: a small task-tracking HTTP service.
//!
//! Tasks are stored in `PostgreSQL` and exposed over a JSON API. Listing is
//! public by default; creating, updating, and deleting tasks require a
//! verified identity.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, tokens)
//!
//! # Modules
//!
//! - [`task`]: Task records, validation, storage, and the task API core
//! - [`auth`]: Credential extraction and identity verification
//! - [`http`]: Routes, middleware, and the response envelope
//! - [`config`]: Environment-driven configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod auth;
pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
