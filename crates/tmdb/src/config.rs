//! Connection configuration: where the API lives and how to authenticate.

use std::fmt;
use std::time::Duration;

use crate::error::{Result, TmdbError};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("tmdb-rs/", env!("CARGO_PKG_VERSION"));

pub const ENV_API_KEY: &str = "TMDB_API_KEY";
pub const ENV_BASE_URL: &str = "TMDB_BASE_URL";
pub const ENV_LANGUAGE: &str = "TMDB_LANGUAGE";
pub const ENV_TIMEOUT_SECS: &str = "TMDB_TIMEOUT_SECS";

/// Everything needed to talk to TMDb.
///
/// The API key is sent as the `api_key` query parameter on every request.
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    /// ISO 639-1 code used by localized endpoints when a call passes none
    pub language: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            language: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Point the client somewhere else (a proxy, a local stub server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Read the configuration from `TMDB_*` environment variables.
    ///
    /// `TMDB_API_KEY` is required; `TMDB_BASE_URL`, `TMDB_LANGUAGE` and
    /// `TMDB_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env`, with the variable source injected
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = value(ENV_API_KEY)
            .ok_or_else(|| TmdbError::Config(format!("{ENV_API_KEY} is not set")))?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = value(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(language) = value(ENV_LANGUAGE) {
            config.language = Some(language);
        }
        if let Some(secs) = value(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                TmdbError::Config(format!("{ENV_TIMEOUT_SECS} must be a number of seconds: {e}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can produce working requests
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(TmdbError::Config("API key must not be empty".to_string()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(TmdbError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(TmdbError::Config("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// Full URL of an endpoint path such as `movie/550`
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

// The API key stays out of logs and panic messages
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("language", &self.language)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
