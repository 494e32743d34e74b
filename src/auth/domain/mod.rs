//! Domain types for request authorization.

mod credential;
mod error;
mod identity;

pub use credential::Credential;
pub use error::AuthError;
pub use identity::Identity;
