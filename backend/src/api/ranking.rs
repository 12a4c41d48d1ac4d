use crate::models::{FetchQuery, RankingResponse};
use crate::services::collector::{FetchOutcome, LogProgress};
use crate::services::presenter::{present, NO_RESULTS_NOTICE};
use crate::AppState;
use log::{info, warn};
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/ranking")]
pub async fn get_ranking(state: &State<AppState>) -> Json<RankingResponse> {
    let query = &state.settings.query;
    let outcome = state.collector.fetch_videos(query, &LogProgress).await;

    let response = ranking_response(query, state.settings.ranking_limit, outcome);
    info!(
        "Serving ranking with {} of {} videos (cached: {})",
        response.ranking.entries.len(),
        response.ranking.total_records,
        response.from_cache
    );
    Json(response)
}

pub fn ranking_response(query: &FetchQuery, limit: usize, outcome: FetchOutcome) -> RankingResponse {
    let ranking = present(&outcome.records, limit);

    let warning = outcome.error.map(|e| {
        warn!("Ranking is based on partial data: {e}");
        format!(
            "Loading stopped early ({e}). Showing the {} videos fetched before the error.",
            outcome.records.len()
        )
    });

    let notice = ranking
        .is_empty()
        .then(|| NO_RESULTS_NOTICE.to_string());

    RankingResponse {
        channel_id: query.channel_id.clone(),
        query: query.include_keyword.clone(),
        ranking,
        complete: outcome.complete,
        from_cache: outcome.from_cache,
        warning,
        notice,
        fetched_at: chrono::Utc::now(),
    }
}
