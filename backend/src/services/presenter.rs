use crate::models::{RankedVideo, Ranking, VideoRecord};
use crate::utils::{format_number, watch_url};
use std::fmt::Write;

pub const NO_RESULTS_NOTICE: &str = "No videos matched the search, or the data could not be loaded. \
Check the API key and the remaining quota.";

/// Sorts by view count, highest first. The sort is stable, so equal counts
/// keep the order the collector emitted them in.
pub fn sort_by_views(records: &mut [VideoRecord]) {
    records.sort_by(|a, b| b.view_count.cmp(&a.view_count));
}

/// Ranks `records` and keeps the top `limit`.
pub fn present(records: &[VideoRecord], limit: usize) -> Ranking {
    let mut sorted = records.to_vec();
    sort_by_views(&mut sorted);

    let entries = sorted
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, record)| RankedVideo {
            rank: i + 1,
            formatted_views: format_number(record.view_count),
            video_url: watch_url(&record.video_id),
            view_count: record.view_count,
            title: record.title,
            thumbnail_url: record.thumbnail_url,
        })
        .collect();

    Ranking {
        entries,
        total_records: records.len(),
    }
}

pub fn render_console(ranking: &Ranking) -> String {
    if ranking.is_empty() {
        return format!("{NO_RESULTS_NOTICE}\n");
    }

    let mut out = String::new();
    for entry in &ranking.entries {
        let _ = writeln!(out, "--- #{} ---", entry.rank);
        let _ = writeln!(out, "Title: {}", entry.title);
        let _ = writeln!(out, "Views: {}", entry.formatted_views);
        let _ = writeln!(out, "Thumbnail: {}", entry.thumbnail_url);
        let _ = writeln!(out, "{}", "-".repeat(20));
    }

    if ranking.total_records > ranking.entries.len() {
        let _ = writeln!(
            out,
            "Showing top {} of {} videos.",
            ranking.entries.len(),
            ranking.total_records
        );
    }
    out
}
