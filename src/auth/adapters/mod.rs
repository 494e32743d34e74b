//! Identity verifier implementations.

mod jwt;
mod memory;

pub use jwt::{JwtIdentityVerifier, JwtSettings};
pub use memory::StaticTokenVerifier;
