//! HTTP client for the spreadsheet-backed catalog endpoint.

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use wreq::Client;

/// Trait for fetching the raw catalog payload - enables mocking for tests.
#[async_trait]
pub trait CatalogFetch: Send + Sync {
    /// Performs the catalog request and returns the response body.
    async fn fetch(&self) -> Result<String>;
}

/// HTTP client performing the single GET against the sheet endpoint.
pub struct SheetClient {
    client: Client,
    url: String,
}

impl std::fmt::Debug for SheetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetClient")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl SheetClient {
    /// Creates a new client for the configured endpoint.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_url(config, config.url.clone())
    }

    /// Creates a client with an explicit URL (used by tests against a local server).
    pub fn with_url(config: &Config, url: String) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10));

        // Configure proxy if specified
        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(Self { client, url })
    }

    /// Returns the endpoint URL this client targets.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogFetch for SheetClient {
    async fn fetch(&self) -> Result<String> {
        info!("Fetching catalog: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            anyhow::bail!("Request failed with status: {}", status);
        }

        response.text().await.context("Failed to read response body")
    }
}
