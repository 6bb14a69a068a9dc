//! API server configuration.

use axum::http::HeaderValue;
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const ALLOWED_ORIGINS_ENV: &str = "ALLOWED_ORIGINS";

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid origin '{0}': expected scheme://host[:port]")]
    InvalidOrigin(String),

    #[error("invalid port '{0}'")]
    InvalidPort(String),
}

/// Origins allowed to call the API from a browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Any origin, any method, any header. No credentials.
    #[default]
    Any,
    /// Only the listed origins; credentials allowed.
    List(Vec<HeaderValue>),
}

impl AllowedOrigins {
    /// Parse a comma-separated origin list. Empty input or `*` means any origin.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return Ok(Self::Any);
        }

        let origins = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(parse_origin)
            .collect::<Result<Vec<_>, _>>()?;

        if origins.is_empty() {
            Ok(Self::Any)
        } else {
            Ok(Self::List(origins))
        }
    }

    /// Build the CORS layer for this policy.
    ///
    /// Browsers reject wildcard methods/headers on credentialed requests, so
    /// the restricted policy mirrors them from the preflight instead.
    pub fn cors_layer(&self) -> CorsLayer {
        match self {
            Self::Any => CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
            Self::List(origins) => CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins.iter().cloned()))
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true),
        }
    }
}

fn parse_origin(origin: &str) -> Result<HeaderValue, ConfigError> {
    let invalid = || ConfigError::InvalidOrigin(origin.to_string());
    let url = url::Url::parse(origin).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    // Browsers send the origin without a trailing slash.
    let normalized = origin.trim_end_matches('/');
    HeaderValue::from_str(normalized).map_err(|_| invalid())
}

/// Configuration for the API server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8000").
    pub bind_addr: String,
    /// Cross-origin policy applied to every route.
    pub allowed_origins: AllowedOrigins,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: format!("{DEFAULT_HOST}:{DEFAULT_PORT}"),
            allowed_origins: AllowedOrigins::Any,
        }
    }
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable          | Default          |
    /// |-------------------|------------------|
    /// | `HOST`            | `127.0.0.1`      |
    /// | `PORT`            | `8000`           |
    /// | `ALLOWED_ORIGINS` | any origin       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.into());
        let port = match lookup(PORT_ENV) {
            Some(p) => p
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(p))?,
            None => DEFAULT_PORT,
        };
        let allowed_origins = match lookup(ALLOWED_ORIGINS_ENV) {
            Some(raw) => AllowedOrigins::parse(&raw)?,
            None => AllowedOrigins::Any,
        };

        Ok(Self {
            bind_addr: format!("{host}:{port}"),
            allowed_origins,
        })
    }
}
