use std::{env, time::Duration};

use thiserror::Error;
use url::Url;

/// Environment variable supplying the backend base URL.
pub const BASE_URL_ENV: &str = "LOAN_API_URL";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{BASE_URL_ENV} is not set")]
    MissingBaseUrl,
    #[error("backend base URL is empty")]
    EmptyBaseUrl,
    #[error("invalid backend base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("backend base URL '{0}' must be an absolute http(s) URL")]
    UnsupportedScheme(String),
}

/// Explicit client configuration. Construction fails fast on a missing or
/// malformed base URL instead of letting the gateway issue requests against
/// a relative origin.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
        }
        Ok(Self {
            base_url: parsed,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var(BASE_URL_ENV).map_err(|_| ConfigError::MissingBaseUrl)?;
        Self::new(&raw)
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Absolute URL for a backend path such as `/borrowers`.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}{path}")
    }
}
