use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Page category, parsed from the document's `metadata.type` code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetType {
    Story,
    MediaAsset,
    PhotoGallery,
    Other(String),
}

impl AssetType {
    pub(crate) fn from_code(code: &str) -> Self {
        match code {
            "STY" => AssetType::Story,
            "MAP" => AssetType::MediaAsset,
            "PGL" => AssetType::PhotoGallery,
            other => AssetType::Other(other.to_string()),
        }
    }
}

/// A parsed page-data document.
///
/// The document stays opaque JSON; the accessors below pull out the couple
/// of metadata fields the aggregation layer needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageData(Value);

impl PageData {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Page category from `metadata.type`, if the document carries one.
    pub fn asset_type(&self) -> Option<AssetType> {
        self.0
            .pointer("/metadata/type")
            .and_then(Value::as_str)
            .map(AssetType::from_code)
    }

    /// Asset id from `metadata.locators.assetUri`.
    ///
    /// The locator is a path like `/news/world-12345678`; the id is the
    /// segment after the service segment.
    pub fn asset_id(&self) -> Option<String> {
        let uri = self
            .0
            .pointer("/metadata/locators/assetUri")
            .and_then(Value::as_str)?;
        uri.split('/')
            .nth(2)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

impl From<Value> for PageData {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
