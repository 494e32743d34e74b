//! Step definitions for task API behaviour scenarios.

pub mod then;
pub mod when;
pub mod world;
