//! Client error types.

use thiserror::Error;

/// Message shown when the backend could not be reached at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Failed to connect to API. Is the backend running?";

/// Outcome of a failed API call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("API error: {}", status_line(*status, status_text))]
    Api { status: u16, status_text: String },

    /// No usable response: connection refused, DNS failure, CORS rejection,
    /// or a body that did not decode.
    #[error("network error: {0}")]
    Network(String),
}

impl ClientError {
    /// Text the form renders for this error.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { .. } => self.to_string(),
            ClientError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// `"503 Service Unavailable"`, or just `"599"` when there is no reason phrase.
fn status_line(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        status.to_string()
    } else {
        format!("{status} {status_text}")
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Network(e.to_string())
    }
}

/// Invalid client configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base URL '{0}': expected http(s)://host[:port][/path]")]
    InvalidBaseUrl(String),
}
