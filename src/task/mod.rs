//! Task record management.
//!
//! Creating, listing, partially updating, and deleting task records backed by
//! a relational store. The module follows hexagonal architecture:
//!
//! - Domain types and request payloads in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The task API core in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
