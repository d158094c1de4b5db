use std::sync::Arc;

use futures::future::join_all;
use serde_json::{Map, Value};

use crate::fetch::{FetchResponse, PageFetcher};
use crate::page::{AssetType, PageData};
use crate::urls::{most_read_endpoint, recommendations_url, secondary_column_url};

/// Merged supplementary content for one page render, keyed by source name.
/// Built fresh per request; never cached.
pub type AdditionalPageData = Map<String, Value>;

/// One named supplementary source to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTarget {
    pub name: &'static str,
    pub path: String,
}

/// Fetches and merges supplementary content for pages that want it.
///
/// Every source is best-effort: a transport failure, a non-200 status, or an
/// empty body drops that source from the merged mapping and nothing else.
/// The aggregator itself never fails.
pub struct Aggregator {
    fetcher: Arc<dyn PageFetcher>,
}

impl Aggregator {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Supplementary data for `page`, or `None` when the page category
    /// requires none (no fetches are issued in that case). For story pages
    /// the mapping may come back empty if every source failed or was empty.
    pub async fn additional_page_data(
        &self,
        page: &PageData,
        service: &str,
        variant: Option<&str>,
    ) -> Option<AdditionalPageData> {
        let asset_type = page.asset_type()?;
        let asset_id = page.asset_id();
        let targets = page_type_targets(&asset_type, service, variant, asset_id.as_deref())?;

        let results = join_all(targets.into_iter().map(|t| self.fetch_source(t))).await;

        let mut merged = AdditionalPageData::new();
        for (name, body) in results.into_iter().flatten() {
            merged.insert(name.to_string(), body);
        }
        Some(merged)
    }

    /// One best-effort fetch: any failure becomes an absent contribution.
    /// Outcome logging happens in the fetcher, not here.
    async fn fetch_source(&self, target: FetchTarget) -> Option<(&'static str, Value)> {
        match self.fetcher.fetch(&target.path).await {
            Ok(response) => validate_response(target.name, response),
            Err(_) => None,
        }
    }
}

/// Closed mapping from page category to its supplementary sources. Only
/// story pages have any.
fn page_type_targets(
    asset_type: &AssetType,
    service: &str,
    variant: Option<&str>,
    asset_id: Option<&str>,
) -> Option<Vec<FetchTarget>> {
    match asset_type {
        AssetType::Story => {
            let most_read = most_read_endpoint(service, variant);
            Some(vec![
                FetchTarget {
                    name: "mostRead",
                    path: most_read
                        .strip_suffix(".json")
                        .unwrap_or(&most_read)
                        .to_string(),
                },
                FetchTarget {
                    name: "secondaryColumn",
                    path: secondary_column_url(service, variant),
                },
                FetchTarget {
                    name: "recommendations",
                    path: recommendations_url(service, variant, asset_id.unwrap_or_default()),
                },
            ])
        }
        _ => None,
    }
}

/// Keep a source only for a 200 with a non-empty body.
fn validate_response(name: &'static str, response: FetchResponse) -> Option<(&'static str, Value)> {
    if response.status == 200 && !is_empty_json(&response.json) {
        Some((name, response.json))
    } else {
        None
    }
}

/// Null, `{}`, `[]` and `""` all count as "no data".
fn is_empty_json(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
