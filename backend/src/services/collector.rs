use crate::error::ApiError;
use crate::models::{FetchQuery, PageInfo, SearchPage, VideoRecord};
use crate::services::cache::FetchCache;
use crate::services::youtube::{parse_video_item, VideoApi, MAX_RESULTS};
use crate::utils::contains_ignore_case;
use log::{debug, info, warn};
use serde_json::Value;
use std::collections::HashSet;

/// Emitted after every search page. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchProgress {
    pub pages_fetched: usize,
    pub estimated_pages: usize,
    pub records: usize,
}

impl FetchProgress {
    pub fn fraction(&self) -> f64 {
        if self.estimated_pages == 0 {
            return 0.0;
        }
        (self.pages_fetched as f64 / self.estimated_pages as f64).min(1.0)
    }
}

pub trait ProgressSink: Send + Sync {
    fn on_page(&self, progress: FetchProgress);
}

impl<F> ProgressSink for F
where
    F: Fn(FetchProgress) + Send + Sync,
{
    fn on_page(&self, progress: FetchProgress) {
        self(progress)
    }
}

/// Reports progress through the logger.
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_page(&self, progress: FetchProgress) {
        info!(
            "Fetched search page {}/{} ({} videos so far)",
            progress.pages_fetched, progress.estimated_pages, progress.records
        );
    }
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub records: Vec<VideoRecord>,
    pub pages_fetched: usize,
    /// False when pagination stopped on an error; `records` are then partial.
    pub complete: bool,
    pub from_cache: bool,
    pub error: Option<ApiError>,
}

pub struct Collector<A> {
    api: A,
    cache: Option<FetchCache>,
}

impl<A: VideoApi> Collector<A> {
    pub fn new(api: A) -> Self {
        Collector { api, cache: None }
    }

    pub fn with_cache(mut self, cache: FetchCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Read-through fetch: a fresh cache entry short-circuits the whole cycle,
    /// otherwise every search page is drained and only a complete result is
    /// stored.
    pub async fn fetch_videos(
        &self,
        query: &FetchQuery,
        progress: &dyn ProgressSink,
    ) -> FetchOutcome {
        if let Some(records) = self.cache.as_ref().and_then(|cache| cache.get(query)) {
            info!(
                "Serving {} cached videos for channel {}",
                records.len(),
                query.channel_id
            );
            return FetchOutcome {
                records,
                pages_fetched: 0,
                complete: true,
                from_cache: true,
                error: None,
            };
        }

        let outcome = self.drain_pages(query, progress).await;

        if outcome.complete {
            if let Some(cache) = &self.cache {
                cache.insert(query.clone(), outcome.records.clone());
            }
        }
        outcome
    }

    async fn drain_pages(&self, query: &FetchQuery, progress: &dyn ProgressSink) -> FetchOutcome {
        info!(
            "Collecting videos of channel {} matching {:?} (excluding {:?})",
            query.channel_id, query.include_keyword, query.exclude_keyword
        );

        let mut records = Vec::new();
        let mut seen_ids = HashSet::new();
        let mut page_token: Option<String> = None;
        let mut pages_fetched = 0;
        let mut estimated_pages = 1;

        loop {
            let page = match self.api.search_page(query, page_token.as_deref()).await {
                Ok(page) => page,
                Err(e) => {
                    warn!("Search page {} failed: {e}", pages_fetched + 1);
                    return partial(records, pages_fetched, e);
                }
            };

            pages_fetched += 1;
            if pages_fetched == 1 {
                estimated_pages = estimate_pages(page.page_info.as_ref());
            }

            if page.items.is_empty() {
                debug!("Search page {pages_fetched} was empty");
                progress.on_page(FetchProgress {
                    pages_fetched,
                    estimated_pages: estimated_pages.max(pages_fetched),
                    records: records.len(),
                });
                break;
            }

            let video_ids = kept_video_ids(&page, &query.exclude_keyword, &mut seen_ids);

            for batch in video_ids.chunks(MAX_RESULTS) {
                let items = match self.api.video_details(batch).await {
                    Ok(items) => items,
                    Err(e) => {
                        warn!("Details request for page {pages_fetched} failed: {e}");
                        return partial(records, pages_fetched, e);
                    }
                };

                let dropped = keep_details(&items, &query.exclude_keyword, &mut records);
                if dropped.malformed > 0 {
                    debug!("Dropped {} video entries with missing fields", dropped.malformed);
                }
                if dropped.excluded > 0 {
                    debug!(
                        "Dropped {} videos whose details title is excluded",
                        dropped.excluded
                    );
                }
            }

            progress.on_page(FetchProgress {
                pages_fetched,
                estimated_pages: estimated_pages.max(pages_fetched),
                records: records.len(),
            });

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        info!(
            "Collected {} videos from {} search pages",
            records.len(),
            pages_fetched
        );

        FetchOutcome {
            records,
            pages_fetched,
            complete: true,
            from_cache: false,
            error: None,
        }
    }
}

fn partial(records: Vec<VideoRecord>, pages_fetched: usize, error: ApiError) -> FetchOutcome {
    FetchOutcome {
        records,
        pages_fetched,
        complete: false,
        from_cache: false,
        error: Some(error),
    }
}

fn estimate_pages(page_info: Option<&PageInfo>) -> usize {
    page_info
        .and_then(|info| info.total_results)
        .map(|total| (total as usize).div_ceil(MAX_RESULTS))
        .unwrap_or(1)
        .max(1)
}

#[derive(Debug, Default, PartialEq, Eq)]
struct DroppedDetails {
    malformed: usize,
    excluded: usize,
}

// Parses a details batch into `records`, re-checking titles against the exclusion keyword.
fn keep_details(
    items: &[Value],
    exclude_keyword: &str,
    records: &mut Vec<VideoRecord>,
) -> DroppedDetails {
    let mut dropped = DroppedDetails::default();
    for item in items {
        match parse_video_item(item) {
            None => dropped.malformed += 1,
            Some(record) if contains_ignore_case(&record.title, exclude_keyword) => {
                dropped.excluded += 1
            }
            Some(record) => records.push(record),
        }
    }
    dropped
}

// Ids worth a details lookup: not excluded by title and not seen on an earlier page.
fn kept_video_ids(
    page: &SearchPage,
    exclude_keyword: &str,
    seen_ids: &mut HashSet<String>,
) -> Vec<String> {
    page.items
        .iter()
        .filter(|item| !contains_ignore_case(&item.snippet.title, exclude_keyword))
        .filter_map(|item| item.id.video_id.clone())
        .filter(|id| seen_ids.insert(id.clone()))
        .collect()
}
