use anyhow::Context;
use log::{info, LevelFilter};
use mvrank::config::{init_logger, load_environment, Settings};
use mvrank::{build_rocket, AppState};

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_loaded = load_environment();
    init_logger(LevelFilter::Info);
    info!("Starting mvrank dashboard backend...");
    if dotenv_loaded {
        info!("Loaded variables from .env");
    }

    let settings = Settings::from_env().context("Invalid configuration")?;
    info!(
        "Ranking channel {} for {:?} (excluding {:?}), cache TTL {}s",
        settings.query.channel_id,
        settings.query.include_keyword,
        settings.query.exclude_keyword,
        settings.cache_ttl.as_secs()
    );

    let state = AppState::new(settings).context("Failed to create YouTube API client")?;

    build_rocket(state)?
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket failed: {e}"))?;

    Ok(())
}
