use crate::error::ConfigError;
use crate::models::FetchQuery;
use env_logger::Builder;
use log::LevelFilter;
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";
pub const DEFAULT_CHANNEL_ID: &str = "UC3W19wZg_f22j-3c9x1W8wA"; // HYBE LABELS
pub const DEFAULT_SEARCH_QUERY: &str = "Official MV";
pub const DEFAULT_EXCLUDE_QUERY: &str = "test";
pub const DEFAULT_RANKING_LIMIT: usize = 30;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DASHBOARD_ORIGIN: &str = "http://localhost:8080";

const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub api_base_url: String,
    pub query: FetchQuery,
    pub ranking_limit: usize,
    pub cache_ttl: Duration,
    pub http_timeout: Duration,
    pub dashboard_origin: String,
}

impl Settings {
    /// Reads settings from the process environment (after `load_environment`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("YOUTUBE_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        if api_key == API_KEY_PLACEHOLDER {
            return Err(ConfigError::PlaceholderApiKey(api_key));
        }

        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let ranking_limit = parse_number(&lookup, "RANKING_LIMIT", DEFAULT_RANKING_LIMIT)?;
        if ranking_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "RANKING_LIMIT",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let channel_id = required_text(&lookup, "CHANNEL_ID", DEFAULT_CHANNEL_ID)?;
        let include_keyword = required_text(&lookup, "SEARCH_QUERY", DEFAULT_SEARCH_QUERY)?;

        Ok(Settings {
            api_key,
            api_base_url: text("YOUTUBE_API_BASE_URL", DEFAULT_API_BASE_URL),
            query: FetchQuery::new(
                channel_id,
                include_keyword,
                text("EXCLUDE_QUERY", DEFAULT_EXCLUDE_QUERY),
            ),
            ranking_limit,
            cache_ttl: Duration::from_secs(parse_number(
                &lookup,
                "CACHE_TTL_SECS",
                DEFAULT_CACHE_TTL_SECS,
            )?),
            http_timeout: Duration::from_secs(parse_number(
                &lookup,
                "HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?),
            dashboard_origin: text("DASHBOARD_ORIGIN", DEFAULT_DASHBOARD_ORIGIN),
        })
    }
}

// An empty exclusion keyword is valid (it excludes nothing); these two are not.
fn required_text<F>(lookup: &F, key: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue {
            key,
            value,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn parse_number<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidValue {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

pub fn init_logger(default_level: LevelFilter) {
    Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
}

/// Loads a `.env` file if present. Returns whether one was found.
pub fn load_environment() -> bool {
    dotenv::dotenv().is_ok()
}

pub fn create_cors(origin: &str) -> anyhow::Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[origin]))
        .allowed_methods(
            vec![Method::Get, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let settings = Settings::from_lookup(lookup_from(&[("YOUTUBE_API_KEY", "abc")])).unwrap();

        assert_eq!(settings.api_key, "abc");
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.query.channel_id, DEFAULT_CHANNEL_ID);
        assert_eq!(settings.query.include_keyword, "Official MV");
        assert_eq!(settings.query.exclude_keyword, "test");
        assert_eq!(settings.ranking_limit, 30);
        assert_eq!(settings.cache_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn missing_key_is_fatal() {
        let err = Settings::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));

        let err = Settings::from_lookup(lookup_from(&[("YOUTUBE_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn empty_channel_or_query_is_rejected() {
        for key in ["CHANNEL_ID", "SEARCH_QUERY"] {
            let err = Settings::from_lookup(lookup_from(&[("YOUTUBE_API_KEY", "abc"), (key, " ")]))
                .unwrap_err();

            match err {
                ConfigError::InvalidValue { key: reported, .. } => assert_eq!(reported, key),
                other => panic!("unexpected error: {other:?}"),
            }
        }

        let settings = Settings::from_lookup(lookup_from(&[
            ("YOUTUBE_API_KEY", "abc"),
            ("CHANNEL_ID", "  UC123 "),
            ("EXCLUDE_QUERY", ""),
        ]))
        .unwrap();
        assert_eq!(settings.query.channel_id, "UC123");
        assert_eq!(settings.query.exclude_keyword, "");
    }

    #[test]
    fn placeholder_key_is_rejected() {
        let err =
            Settings::from_lookup(lookup_from(&[("YOUTUBE_API_KEY", "YOUR_API_KEY")])).unwrap_err();
        assert!(matches!(err, ConfigError::PlaceholderApiKey(_)));
    }

    #[test]
    fn bad_numbers_are_reported_with_their_key() {
        let err = Settings::from_lookup(lookup_from(&[
            ("YOUTUBE_API_KEY", "abc"),
            ("CACHE_TTL_SECS", "an hour"),
        ]))
        .unwrap_err();

        match err {
            ConfigError::InvalidValue { key, value, .. } => {
                assert_eq!(key, "CACHE_TTL_SECS");
                assert_eq!(value, "an hour");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = Settings::from_lookup(lookup_from(&[
            ("YOUTUBE_API_KEY", "abc"),
            ("RANKING_LIMIT", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "RANKING_LIMIT", .. }));
    }
}
