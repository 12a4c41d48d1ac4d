use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResponse {
    pub channel_id: String,
    pub query: String,
    pub ranking: Ranking,
    pub complete: bool,
    pub from_cache: bool,
    pub warning: Option<String>,
    pub notice: Option<String>,
    pub fetched_at: DateTime<Utc>,
}
