//! Authorization gate for mutating task routes.
//!
//! A credential is taken from the request, verified by an external identity
//! collaborator, and turned into an [`domain::Identity`] forwarded to the
//! handler. The module follows the same hexagonal split as [`crate::task`]:
//!
//! - Credential and identity types in [`domain`]
//! - The identity verification port in [`ports`]
//! - Verifier implementations in [`adapters`]
//! - The gate itself in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
