//! HTTP transport over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace};
use unfurl_core::{PageInfo, Provider, ProviderConfig, Result, Transport, UnfurlError};

/// Default request timeout for remote fetches.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP implementation of the [`Transport`] seam.
///
/// Owns its `reqwest` client and the configuration URL. Retry and
/// backoff are deliberately not handled here; a failed fetch surfaces
/// as a single error and the cache retries on the next trigger.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config_url: String,
}

impl HttpTransport {
    /// Create a transport with default settings, including the default
    /// request timeout.
    pub fn new(config_url: impl Into<String>) -> Self {
        let config_url = config_url.into();
        Self::builder(config_url.clone())
            .build()
            .unwrap_or_else(|_| Self {
                // `new` is infallible; if the builder cannot construct a
                // client, fall back to the stock one.
                client: reqwest::Client::new(),
                config_url,
            })
    }

    /// Create a transport builder.
    pub fn builder(config_url: impl Into<String>) -> HttpTransportBuilder {
        HttpTransportBuilder {
            config_url: config_url.into(),
            timeout: None,
            user_agent: None,
        }
    }

    /// The configuration URL this transport fetches from.
    #[inline]
    pub fn config_url(&self) -> &str {
        &self.config_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_config(&self) -> Result<ProviderConfig> {
        trace!(url = %self.config_url, "fetching configuration");
        let response = self
            .client
            .get(&self.config_url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| UnfurlError::config_fetch("request failed", err))?;

        response
            .json::<ProviderConfig>()
            .await
            .map_err(|err| UnfurlError::Decode {
                context: "configuration document".to_string(),
                message: err.to_string(),
            })
    }

    async fn fetch_providers(&self, endpoint: &str) -> Result<Vec<Provider>> {
        trace!(endpoint, "fetching provider directory");
        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| UnfurlError::provider_fetch(endpoint, "request failed", err))?;

        response
            .json::<Vec<Provider>>()
            .await
            .map_err(|err| UnfurlError::Decode {
                context: "provider directory".to_string(),
                message: err.to_string(),
            })
    }

    async fn fetch_page(&self, resolve_url: &str, target_url: &str) -> Result<PageInfo> {
        debug!(resolve_url, target_url, "fetching page metadata");
        let response = self
            .client
            .get(resolve_url)
            .query(&[("url", target_url), ("format", "json")])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| UnfurlError::page_fetch(target_url, "request failed", err))?;

        response
            .json::<PageInfo>()
            .await
            .map_err(|err| UnfurlError::Decode {
                context: "page metadata".to_string(),
                message: err.to_string(),
            })
    }
}

/// Builder for creating a configured [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    config_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpTransportBuilder {
    /// Set the request timeout (defaults to 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the transport.
    pub fn build(self) -> Result<HttpTransport> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| UnfurlError::internal("failed to build http client", err))?;

        Ok(HttpTransport {
            client,
            config_url: self.config_url,
        })
    }
}
