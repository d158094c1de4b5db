pub mod aggregator;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod page;
pub mod urls;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::aggregator::{AdditionalPageData, Aggregator, FetchTarget};
    pub use crate::config::Config;
    pub use crate::fetch::{FetchResponse, HttpPageFetcher, PageFetcher};
    pub use crate::page::{AssetType, PageData};
}

use std::sync::Arc;

use anyhow::{bail, Result};

use crate::aggregator::{AdditionalPageData, Aggregator};
use crate::config::Config;
use crate::fetch::{FetchResponse, HttpPageFetcher, PageFetcher};
use crate::page::PageData;

/// Async library entry point. Owns the page fetcher and the aggregator.
pub struct Newsdesk {
    fetcher: Arc<dyn PageFetcher>,
    aggregator: Aggregator,
}

impl Newsdesk {
    /// Build a client for the configured content-data service.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_fetcher(Arc::new(HttpPageFetcher::new(config)?)))
    }

    /// Assemble from any fetcher implementation.
    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Self {
        let aggregator = Aggregator::new(fetcher.clone());
        Self { fetcher, aggregator }
    }

    /// Fetch one page-data document. Unlike the supplementary sources, the
    /// primary page is not best-effort: a non-200 here is an error.
    pub async fn page_data(&self, path: &str) -> Result<PageData> {
        let FetchResponse { status, json } = self.fetcher.fetch(path).await?;
        if status != 200 {
            bail!("content data service returned status {} for {}", status, path);
        }
        Ok(PageData::new(json))
    }

    /// Supplementary data for an already-fetched page. Resolves to `None`
    /// for page categories that need none; never fails.
    pub async fn additional_page_data(
        &self,
        page: &PageData,
        service: &str,
        variant: Option<&str>,
    ) -> Option<AdditionalPageData> {
        self.aggregator
            .additional_page_data(page, service, variant)
            .await
    }

    /// Fetch a page and enrich it in one call, the way a page-rendering
    /// request handler consumes this crate.
    pub async fn page_with_additional(
        &self,
        path: &str,
        service: &str,
        variant: Option<&str>,
    ) -> Result<(PageData, Option<AdditionalPageData>)> {
        let page = self.page_data(path).await?;
        let additional = self.additional_page_data(&page, service, variant).await;
        Ok((page, additional))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use anyhow::anyhow;
    use async_trait::async_trait;
    use serde_json::json;

    struct SinglePageFetcher {
        page_path: String,
        status: u16,
        body: serde_json::Value,
    }

    #[async_trait]
    impl PageFetcher for SinglePageFetcher {
        async fn fetch(&self, path: &str) -> Result<FetchResponse> {
            if path == self.page_path {
                return Ok(FetchResponse {
                    status: self.status,
                    json: self.body.clone(),
                });
            }
            // Supplementary paths are unreachable in these tests.
            Err(anyhow!("no route for {}", path))
        }
    }

    #[tokio::test]
    async fn page_data_rejects_non_success() {
        let desk = Newsdesk::with_fetcher(Arc::new(SinglePageFetcher {
            page_path: "/news/world-12345678.json".to_string(),
            status: 404,
            body: json!({}),
        }));

        let err = desk.page_data("/news/world-12345678.json").await;
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn page_with_additional_enriches_story_pages() {
        let desk = Newsdesk::with_fetcher(Arc::new(SinglePageFetcher {
            page_path: "/news/world-12345678.json".to_string(),
            status: 200,
            body: json!({
                "metadata": {
                    "type": "STY",
                    "locators": { "assetUri": "/news/world-12345678" }
                }
            }),
        }));

        let (page, additional) = desk
            .page_with_additional("/news/world-12345678.json", "news", None)
            .await
            .unwrap();

        assert_eq!(page.asset_id().as_deref(), Some("world-12345678"));
        // Every supplementary fetch failed, so the mapping is present but empty.
        assert_eq!(additional, Some(AdditionalPageData::new()));
    }

    #[tokio::test]
    async fn page_with_additional_skips_non_story_pages() {
        let desk = Newsdesk::with_fetcher(Arc::new(SinglePageFetcher {
            page_path: "/news/av-99999999.json".to_string(),
            status: 200,
            body: json!({ "metadata": { "type": "MAP" } }),
        }));

        let (_, additional) = desk
            .page_with_additional("/news/av-99999999.json", "news", None)
            .await
            .unwrap();

        assert!(additional.is_none());
    }
}
