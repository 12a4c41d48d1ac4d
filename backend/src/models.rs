use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One video of a fetch cycle. Created by the collector, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub view_count: u64,
    pub thumbnail_url: String,
}

/// Channel / include keyword / exclude keyword triple. Also the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FetchQuery {
    pub channel_id: String,
    pub include_keyword: String,
    pub exclude_keyword: String,
}

impl FetchQuery {
    pub fn new(
        channel_id: impl Into<String>,
        include_keyword: impl Into<String>,
        exclude_keyword: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            include_keyword: include_keyword.into(),
            exclude_keyword: exclude_keyword.into(),
        }
    }
}

// Search endpoint, https://developers.google.com/youtube/v3/docs/search/list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub items: Vec<SearchItem>,
    pub next_page_token: Option<String>,
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    pub snippet: SearchSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSnippet {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_results: Option<u64>,
}

/// A ranked entry as shown on both the console and the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedVideo {
    pub rank: usize,
    pub title: String,
    pub view_count: u64,
    pub formatted_views: String,
    pub thumbnail_url: String,
    pub video_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub entries: Vec<RankedVideo>,
    pub total_records: usize,
}

impl Ranking {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankingResponse {
    pub channel_id: String,
    pub query: String,
    pub ranking: Ranking,
    pub complete: bool,
    pub from_cache: bool,
    pub warning: Option<String>,
    /// Set when the ranking has no entries.
    pub notice: Option<String>,
    pub fetched_at: DateTime<Utc>,
}
