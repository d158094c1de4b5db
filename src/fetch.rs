use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;

/// Outcome of requesting one page-data path: the HTTP status code and the
/// parsed JSON body.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub json: Value,
}

/// Seam over the upstream content-data service.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// One GET against the service. An unreachable host or an unparseable
    /// body is an error; a non-200 status is not — callers decide what a
    /// given status means for them.
    async fn fetch(&self, path: &str) -> Result<FetchResponse>;
}

/// Production fetcher: a single reqwest client against a fixed base URL.
pub struct HttpPageFetcher {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpPageFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("invalid base URL: {}", config.base_url))?;
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("building HTTP client")?;
        Ok(Self { client, base_url })
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("invalid request path: {}", path))
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, path: &str) -> Result<FetchResponse> {
        let url = self.resolve(path)?;
        debug!(%url, "requesting page data");

        let response = match self.client.get(url.clone()).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(%url, error = %e, "request to content data service failed");
                return Err(e).with_context(|| format!("request failed: {}", url));
            }
        };

        let status = response.status().as_u16();
        if status != 200 {
            warn!(%url, status, "non-success response from content data service");
        }

        let json = response
            .json::<Value>()
            .await
            .with_context(|| format!("invalid JSON body from {}", url))?;

        Ok(FetchResponse { status, json })
    }
}
