use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single RSS item as produced by the feed fetchers.
///
/// Display fields this crate does not interpret are kept in `extra` and
/// serialized back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    /// URL of the feed the item came from; drives annotation.
    pub source_feed_url: String,
    pub pub_date: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
