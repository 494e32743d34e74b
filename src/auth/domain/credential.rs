//! Raw credentials presented by callers.

use std::fmt;

const BEARER_SCHEME: &str = "bearer";

/// An unverified token taken from a request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token; blank tokens are rejected.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let token = raw.into();
        if token.trim().is_empty() {
            return None;
        }
        Some(Self(token))
    }

    /// Parses an `Authorization` header value of the form `Bearer <token>`.
    ///
    /// The scheme is matched case-insensitively.
    #[must_use]
    pub fn from_authorization(value: &str) -> Option<Self> {
        let (scheme, token) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
            return None;
        }
        Self::new(token.trim())
    }

    /// Finds the cookie called `name` in a `Cookie` header value.
    #[must_use]
    pub fn from_cookie_header(value: &str, name: &str) -> Option<Self> {
        value
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(key, _)| *key == name)
            .and_then(|(_, token)| Self::new(token.trim().trim_matches('"')))
    }

    /// Returns the raw token for verification.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
