use thiserror::Error;

/// Startup configuration problems. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YOUTUBE_API_KEY is not set. Add it to the environment or to a .env file")]
    MissingApiKey,

    #[error("YOUTUBE_API_KEY still holds the placeholder value '{0}'")]
    PlaceholderApiKey(String),

    #[error("{key} has an invalid value '{value}': {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// The YouTube client could not be built. Always fatal.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// A single search or details request failed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    #[error("YouTube API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),
}

// The request URL is stripped so it never reaches logs or API responses.
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.without_url())
    }
}

impl ApiError {
    /// Builds an `Api` error from a non-success response body.
    ///
    /// The Data API wraps failures as `{"error": {"code": 403, "message": "..."}}`;
    /// anything else is reported verbatim.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(String::from))
            .unwrap_or_else(|| body.trim().to_string());

        ApiError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_uses_platform_message() {
        let body = r#"{"error": {"code": 403, "message": "The request cannot be completed because you have exceeded your quota."}}"#;
        let err = ApiError::from_body(403, body);

        assert_eq!(
            err.to_string(),
            "YouTube API returned 403: The request cannot be completed because you have exceeded your quota."
        );
    }

    #[test]
    fn api_error_falls_back_to_raw_body() {
        let err = ApiError::from_body(502, "  Bad Gateway\n");
        assert_eq!(err.to_string(), "YouTube API returned 502: Bad Gateway");
    }
}
