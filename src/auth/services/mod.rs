//! Authorization services.

mod gate;

pub use gate::{AuthorizationGate, DEFAULT_SESSION_COOKIE};
