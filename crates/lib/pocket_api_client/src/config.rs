//! Client configuration.

use url::Url;

use crate::error::ConfigError;

/// Environment variable selecting the backend base URL.
pub const API_URL_ENV: &str = "POCKET_API_URL";
/// Base URL used when [`API_URL_ENV`] is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Where the client sends requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
}

impl ClientConfig {
    /// Parse `base_url`; only `http` and `https` are accepted.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidBaseUrl(base_url.to_string());
        let url = Url::parse(base_url).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(invalid());
        }
        Ok(Self { base_url: url })
    }

    /// Reads `POCKET_API_URL`, falling back to `http://localhost:8000`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(API_URL_ENV).ok().as_deref())
    }

    /// Resolve a raw `POCKET_API_URL` value; unset, empty or blank selects
    /// the default.
    pub fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    /// Absolute URL for `path` below the base, keeping any base path prefix.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(
            ClientConfig::new(DEFAULT_API_URL).unwrap().endpoint("/api/hello"),
            "http://localhost:8000/api/hello"
        );
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let config = ClientConfig::new("https://example.com/backend/").unwrap();
        assert_eq!(
            config.endpoint("/api/hello"),
            "https://example.com/backend/api/hello"
        );
    }

    #[test]
    fn env_value_defaults_when_unset_or_blank() {
        let default = ClientConfig::new(DEFAULT_API_URL).unwrap();
        for value in [None, Some(""), Some("   ")] {
            assert_eq!(ClientConfig::from_env_value(value).unwrap(), default);
        }
    }

    #[test]
    fn env_value_is_trimmed() {
        let config = ClientConfig::from_env_value(Some("  http://10.0.0.2:9000  ")).unwrap();
        assert_eq!(config.endpoint("/api/hello"), "http://10.0.0.2:9000/api/hello");
    }

    #[test]
    fn env_value_must_be_valid() {
        assert_eq!(
            ClientConfig::from_env_value(Some("nope")).unwrap_err(),
            ConfigError::InvalidBaseUrl("nope".into())
        );
    }

    #[test]
    fn rejects_non_http_urls() {
        for bad in ["ftp://example.com", "localhost:8000", "mailto:joe@example.com", ""] {
            assert_eq!(
                ClientConfig::new(bad).unwrap_err(),
                ConfigError::InvalidBaseUrl(bad.to_string())
            );
        }
    }
}
