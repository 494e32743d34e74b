//! Application configuration loaded from the environment.
//!
//! [`AppConfig::from_env`] reads a `.env` file when present and then the
//! process environment. [`AppConfig::from_lookup`] accepts any key lookup,
//! which keeps parsing testable without touching process state.
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` (or `DB_PATH`) | required |
//! | `APP_HOST` | `0.0.0.0` |
//! | `APP_PORT` | `8080` (`:8080` also accepted) |
//! | `TASKBOARD_JWT_SECRET` | required |
//! | `TASKBOARD_JWT_ISSUER` | unset |
//! | `TASKBOARD_JWT_AUDIENCE` | unset |
//! | `TASKBOARD_SESSION_COOKIE` | `session` |
//! | `TASKBOARD_PROTECT_LIST` | `false` |
//! | `TASKBOARD_DB_POOL_SIZE` | `10` |
//! | `TASKBOARD_STORE_TIMEOUT_SECS` | `5` |
//! | `TASKBOARD_CORS_ORIGINS` | any origin |

use crate::auth::adapters::JwtSettings;
use crate::auth::services::DEFAULT_SESSION_COOKIE;
use crate::http::RouterOptions;
use axum::http::HeaderValue;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 10;
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 5;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    /// A variable is set to a value that cannot be used.
    #[error("invalid value for {key}: {reason}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Store connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Maximum number of pooled connections.
    pub pool_size: u32,
    /// Longest wait for a pooled connection.
    pub timeout: Duration,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("database_url", &"<redacted>")
            .field("pool_size", &self.pool_size)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Authorization settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Token verification settings.
    pub jwt: JwtSettings,
    /// Cookie consulted when no bearer token is sent.
    pub session_cookie: String,
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,
    /// Store settings.
    pub store: StoreConfig,
    /// Authorization settings.
    pub auth: AuthConfig,
    /// Route switches.
    pub router: RouterOptions,
}

impl AppConfig {
    /// Loads configuration from `.env` and the process environment.
    ///
    /// A missing `.env` file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            tracing::debug!(error = %err, "no .env file loaded");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Lookup(lookup);

        let host = env
            .parsed::<IpAddr>("APP_HOST")?
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        let port = env.port()?;

        let database_url = env
            .get("DATABASE_URL")
            .or_else(|| env.get("DB_PATH"))
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let pool_size = env
            .positive::<u32>("TASKBOARD_DB_POOL_SIZE")?
            .unwrap_or(DEFAULT_POOL_SIZE);
        let timeout_secs = env
            .positive::<u64>("TASKBOARD_STORE_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_STORE_TIMEOUT_SECS);

        let secret = env
            .get("TASKBOARD_JWT_SECRET")
            .ok_or(ConfigError::Missing("TASKBOARD_JWT_SECRET"))?;

        Ok(Self {
            listen_addr: SocketAddr::new(host, port),
            store: StoreConfig {
                database_url,
                pool_size,
                timeout: Duration::from_secs(timeout_secs),
            },
            auth: AuthConfig {
                jwt: JwtSettings {
                    secret,
                    issuer: env.get("TASKBOARD_JWT_ISSUER"),
                    audience: env.get("TASKBOARD_JWT_AUDIENCE"),
                },
                session_cookie: env
                    .get("TASKBOARD_SESSION_COOKIE")
                    .unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_owned()),
            },
            router: RouterOptions {
                protect_list: env.flag("TASKBOARD_PROTECT_LIST")?,
                cors_origins: env.origins("TASKBOARD_CORS_ORIGINS")?,
            },
        })
    }
}

struct Lookup<F>(F);

impl<F> Lookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Returns the trimmed value, treating blank values as unset.
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
    }

    fn parsed<T>(&self, key: &'static str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.get(key)
            .map(|value| {
                value.parse::<T>().map_err(|err| ConfigError::Invalid {
                    key,
                    reason: err.to_string(),
                })
            })
            .transpose()
    }

    fn positive<T>(&self, key: &'static str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr + Default + PartialEq,
        T::Err: fmt::Display,
    {
        match self.parsed::<T>(key)? {
            Some(value) if value == T::default() => Err(ConfigError::Invalid {
                key,
                reason: "must be greater than zero".to_owned(),
            }),
            other => Ok(other),
        }
    }

    /// Accepts both `8080` and the `:8080` address form.
    fn port(&self) -> Result<u16, ConfigError> {
        let Some(value) = self.get("APP_PORT") else {
            return Ok(DEFAULT_PORT);
        };
        value
            .trim_start_matches(':')
            .parse::<u16>()
            .map_err(|err| ConfigError::Invalid {
                key: "APP_PORT",
                reason: err.to_string(),
            })
    }

    fn flag(&self, key: &'static str) -> Result<bool, ConfigError> {
        let Some(value) = self.get(key) else {
            return Ok(false);
        };
        match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid {
                key,
                reason: format!("expected a boolean, got '{value}'"),
            }),
        }
    }

    fn origins(&self, key: &'static str) -> Result<Vec<HeaderValue>, ConfigError> {
        let Some(value) = self.get(key) else {
            return Ok(Vec::new());
        };
        value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|err| ConfigError::Invalid {
                    key,
                    reason: err.to_string(),
                })
            })
            .collect()
    }
}
