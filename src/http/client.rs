//! HTTP client for the stats service
//!
//! Issues one GET per call. Non-success statuses are classified into
//! [`Error::Api`] and the body is decoded as a [`StatsEnvelope`].

use super::transport::{RawResponse, StatsTransport};
use crate::decode::StatsEnvelope;
use crate::error::{Error, Result};
use crate::params::QueryParams;
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

/// Base URL of the public stats service
pub const DEFAULT_BASE_URL: &str = "https://stats.nba.com/stats";

/// Browser-like agent; the service rejects obvious bots
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL that endpoint names are appended to
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Headers sent with every request
    pub default_headers: HashMap<String, String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let default_headers = HashMap::from([
            ("Referer".to_string(), "https://www.nba.com/".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ]);
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_headers,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add or replace a default header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP transport backed by reqwest
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    base_url: Url,
}

impl HttpClient {
    /// Create a client with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Full request URL for `endpoint` with `params` as a sorted query string
    pub fn build_url(&self, endpoint: &str, params: &QueryParams) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::config("base URL cannot carry a path"))?;
            segments.pop_if_empty();
            segments.extend(endpoint.split('/').filter(|s| !s.is_empty()));
        }
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }
        Ok(url)
    }

    /// GET `endpoint` and decode the response envelope
    pub async fn get_envelope(&self, endpoint: &str, params: &QueryParams) -> Result<RawResponse> {
        let url = self.build_url(endpoint, params)?;
        let started = Instant::now();
        debug!("GET {}", url);

        let mut req = self.client.get(url.clone());
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = match req.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                return Err(Error::Http(e));
            }
        };

        let status = response.status().as_u16();
        debug!(
            "GET {} completed with {} in {:?}",
            url,
            status,
            started.elapsed()
        );

        if let Some(err) = Error::from_status(status, url.as_str()) {
            warn!("Request to {} returned {}", url, status);
            return Err(err);
        }

        let body = response.text().await.map_err(|e| {
            warn!("Reading body from {} failed: {}", url, e);
            Error::Http(e)
        })?;
        let envelope: StatsEnvelope = serde_json::from_str(&body).map_err(|e| {
            warn!("Undecodable body from {}: {}", url, e);
            Error::invalid_response(e.to_string())
        })?;

        Ok(RawResponse {
            status_code: status,
            url: url.to_string(),
            envelope,
        })
    }
}

#[async_trait]
impl StatsTransport for HttpClient {
    async fn fetch(&self, endpoint: &str, params: &QueryParams) -> Result<RawResponse> {
        self.get_envelope(endpoint, params).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
