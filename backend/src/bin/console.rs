use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, LevelFilter};
use mvrank::config::{init_logger, load_environment, Settings};
use mvrank::services::collector::{Collector, FetchProgress};
use mvrank::services::presenter::{present, render_console};
use mvrank::services::youtube::YouTubeClient;

fn progress_bar() -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pages {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░ ");

    let bar = ProgressBar::new(1);
    bar.set_style(style);
    bar.set_message("Loading videos...");
    bar
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_loaded = load_environment();
    init_logger(LevelFilter::Warn);
    if dotenv_loaded {
        info!("Loaded variables from .env");
    }

    let settings = Settings::from_env().context("Invalid configuration")?;
    let client = YouTubeClient::new(&settings).context("Failed to create YouTube API client")?;
    let collector = Collector::new(client);

    let bar = progress_bar();
    let on_page = |progress: FetchProgress| {
        bar.set_length(progress.estimated_pages as u64);
        bar.set_position(progress.pages_fetched as u64);
        bar.set_message(format!(
            "{} videos ({:.0}%)",
            progress.records,
            progress.fraction() * 100.0
        ));
    };
    let outcome = collector.fetch_videos(&settings.query, &on_page).await;
    bar.finish_and_clear();

    if let Some(err) = &outcome.error {
        eprintln!(
            "Warning: loading stopped early: {err}\nShowing the {} videos fetched before the error.\n",
            outcome.records.len()
        );
    }

    let ranking = present(&outcome.records, settings.ranking_limit);
    print!("{}", render_console(&ranking));

    Ok(())
}
