//! REST client for the greeting endpoint.

use async_trait::async_trait;
use pocket_core::Greeting;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Path of the REST greeting endpoint.
pub const HELLO_PATH: &str = "/api/hello";

/// Anything that can fetch a greeting for the form.
#[async_trait]
pub trait HelloApi: Send + Sync {
    /// Request a greeting for `text`. The text is sent as-is.
    async fn hello(&self, text: &str) -> Result<Greeting, ClientError>;
}

/// `reqwest`-backed client for the Pocket Joe REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Use a preconfigured `reqwest::Client` (proxies, timeouts, TLS).
    pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl HelloApi for ApiClient {
    async fn hello(&self, text: &str) -> Result<Greeting, ClientError> {
        let resp = self
            .http
            .get(self.config.endpoint(HELLO_PATH))
            .query(&[("text", text)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(resp.json::<Greeting>().await?)
    }
}
