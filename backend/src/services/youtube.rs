use crate::config::Settings;
use crate::error::{ApiError, ClientError};
use crate::models::{FetchQuery, SearchPage, VideoRecord};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Upper bound of `maxResults` for search and of ids per `videos` call.
pub const MAX_RESULTS: usize = 50;

// Keeps the key out of request URLs, and with it out of error messages.
const API_KEY_HEADER: &str = "X-Goog-Api-Key";

/// The two Data API calls the collector needs.
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// One page of `search.list`, restricted to videos of the query's channel.
    async fn search_page(
        &self,
        query: &FetchQuery,
        page_token: Option<&str>,
    ) -> Result<SearchPage, ApiError>;

    /// Raw `videos.list` items (statistics + snippet) for up to `MAX_RESULTS` ids.
    async fn video_details(&self, video_ids: &[String]) -> Result<Vec<Value>, ApiError>;
}

pub struct YouTubeClient {
    http: Client,
    api_key: String,
    search_url: Url,
    videos_url: Url,
}

impl YouTubeClient {
    pub fn new(settings: &Settings) -> Result<Self, ClientError> {
        let mut base = settings.api_base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base)?;

        let http = Client::builder()
            .timeout(settings.http_timeout)
            .user_agent(concat!("mvrank/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(YouTubeClient {
            http,
            api_key: settings.api_key.clone(),
            search_url: base.join("search")?,
            videos_url: base.join("videos")?,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .get(url.clone())
            .query(params)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_body(status.as_u16(), &body));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl VideoApi for YouTubeClient {
    // Documentation: https://developers.google.com/youtube/v3/docs/search/list
    async fn search_page(
        &self,
        query: &FetchQuery,
        page_token: Option<&str>,
    ) -> Result<SearchPage, ApiError> {
        let max_results = MAX_RESULTS.to_string();
        let mut params = vec![
            ("part", "id,snippet"),
            ("channelId", query.channel_id.as_str()),
            ("q", query.include_keyword.as_str()),
            ("type", "video"),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        debug!(
            "search.list channel={} q={:?} pageToken={:?}",
            query.channel_id, query.include_keyword, page_token
        );
        self.get_json(&self.search_url, &params).await
    }

    // Documentation: https://developers.google.com/youtube/v3/docs/videos/list
    async fn video_details(&self, video_ids: &[String]) -> Result<Vec<Value>, ApiError> {
        if video_ids.len() > MAX_RESULTS {
            return Err(ApiError::Decode(format!(
                "{} ids requested, videos.list accepts at most {MAX_RESULTS}",
                video_ids.len()
            )));
        }

        let ids = video_ids.join(",");
        debug!("videos.list for {} ids", video_ids.len());

        let response: Value = self
            .get_json(&self.videos_url, &[("part", "statistics,snippet"), ("id", ids.as_str())])
            .await?;

        match &response["items"] {
            Value::Array(items) => Ok(items.clone()),
            Value::Null => Ok(Vec::new()),
            other => Err(ApiError::Decode(format!("'items' is not a list: {other}"))),
        }
    }
}

/// Turns one `videos.list` item into a record, or `None` when a required
/// field is missing or malformed.
pub fn parse_video_item(item: &Value) -> Option<VideoRecord> {
    let video_id = item["id"].as_str()?;
    let title = item["snippet"]["title"].as_str()?;

    // The API serialises counts as strings.
    let view_count = match &item["statistics"]["viewCount"] {
        Value::String(s) => s.parse::<u64>().ok()?,
        Value::Number(n) => n.as_u64()?,
        _ => return None,
    };

    let thumbnail_url = item["snippet"]["thumbnails"]["high"]["url"]
        .as_str()
        .filter(|url| !url.is_empty())?;

    Some(VideoRecord {
        video_id: video_id.to_string(),
        title: title.to_string(),
        view_count,
        thumbnail_url: thumbnail_url.to_string(),
    })
}
