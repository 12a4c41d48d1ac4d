use crate::env_variable_utils::BACKEND_URL;
use crate::models::RankingResponse;
use gloo_net::http::Request;
use yew::prelude::*;

pub async fn fetch_ranking(
    ranking: UseStateHandle<Option<RankingResponse>>,
    error_message: UseStateHandle<Option<String>>,
    loading: UseStateHandle<bool>,
) {
    let url = format!("{}/api/ranking", &*BACKEND_URL);

    match Request::get(&url).send().await {
        Ok(response) => {
            if response.ok() {
                match response.json::<RankingResponse>().await {
                    Ok(data) => {
                        log::info!(
                            "Loaded {} ranked videos (cached: {})",
                            data.ranking.entries.len(),
                            data.from_cache
                        );
                        ranking.set(Some(data));
                    }
                    Err(e) => handle_error(&error_message, format!("Failed to parse ranking: {e}")),
                }
            } else {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                handle_error(
                    &error_message,
                    format!("Loading the ranking failed: HTTP {status} - {text}"),
                );
            }
        }
        Err(e) => handle_error(&error_message, format!("Failed to connect to backend: {e}")),
    }

    loading.set(false);
}

fn handle_error(error_message: &UseStateHandle<Option<String>>, message: String) {
    log::error!("{message}");
    error_message.set(Some(message));
}
