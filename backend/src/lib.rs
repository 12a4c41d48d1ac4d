pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::{create_cors, Settings};
use crate::error::ClientError;
use crate::services::cache::FetchCache;
use crate::services::collector::Collector;
use crate::services::youtube::YouTubeClient;
use rocket::{routes, Build, Rocket};

/// Shared by the Rocket routes. Built once at startup.
pub struct AppState {
    pub collector: Collector<YouTubeClient>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self, ClientError> {
        let client = YouTubeClient::new(&settings)?;
        let collector = Collector::new(client).with_cache(FetchCache::new(settings.cache_ttl));

        Ok(AppState {
            collector,
            settings,
        })
    }
}

pub fn build_rocket(state: AppState) -> anyhow::Result<Rocket<Build>> {
    let cors = create_cors(&state.settings.dashboard_origin)?;

    Ok(rocket::build()
        .manage(state)
        .attach(cors)
        .mount("/", routes![api::index, api::health])
        .mount("/api", routes![api::get_ranking]))
}
