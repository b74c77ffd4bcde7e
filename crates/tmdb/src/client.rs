//! The `Tmdb` manager: shared configuration + transport, and the entry
//! point to every resource service.

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{Result, TmdbError};
use crate::request::{ApiRequest, PARAM_LANGUAGE};
use crate::services::{ConfigurationService, MoviesService, PeopleService, SearchService};
use crate::transport::{ReqwestTransport, Transport};

const PARAM_API_KEY: &str = "api_key";

/// Client for the TMDb v3 API.
///
/// Cloning is cheap: configuration and transport are shared behind `Arc`s,
/// and `reqwest::Client` pools connections internally. Every call is an
/// independent one-shot request.
#[derive(Clone)]
pub struct Tmdb {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl Tmdb {
    /// Validate the configuration and build a reqwest-backed client
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        })
    }

    /// Build from `TMDB_*` environment variables (see [`ClientConfig::from_env`])
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Use a custom transport, e.g. one serving recorded responses
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn movies(&self) -> MoviesService<'_> {
        MoviesService::new(self)
    }

    pub fn people(&self) -> PeopleService<'_> {
        PeopleService::new(self)
    }

    pub fn search(&self) -> SearchService<'_> {
        SearchService::new(self)
    }

    pub fn configuration(&self) -> ConfigurationService<'_> {
        ConfigurationService::new(self)
    }

    /// Perform `request` and decode the body into `T`.
    ///
    /// Non-2xx responses become [`TmdbError::Api`]; bodies that don't match
    /// `T` become [`TmdbError::Decode`].
    pub(crate) async fn get<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let path = request.path().to_string();
        let url = self.config.endpoint_url(&path);
        let mut query = self.finalize_query(request);

        debug!(
            path = %path,
            params = ?query.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
            "sending TMDb request"
        );

        let start = Instant::now();
        query.push((PARAM_API_KEY.to_string(), self.config.api_key.clone()));
        let response = self.transport.get(&url, &query).await?;

        debug!(
            path = %path,
            status = response.status,
            bytes = response.body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "received TMDb response"
        );

        if !response.is_success() {
            let err = TmdbError::from_response(response.status, &response.body);
            warn!(path = %path, status = response.status, error = %err, "TMDb returned an error");
            return Err(err);
        }

        serde_json::from_str(&response.body).map_err(|source| {
            warn!(path = %path, error = %source, "TMDb response did not match the expected shape");
            TmdbError::Decode { path, source }
        })
    }

    /// Query parameters for the wire, minus the API key
    fn finalize_query(&self, request: ApiRequest) -> Vec<(String, String)> {
        let needs_default_language = request.is_localized() && !request.has_param(PARAM_LANGUAGE);
        let mut query = request.into_query();

        if needs_default_language {
            if let Some(language) = &self.config.language {
                query.push((PARAM_LANGUAGE.to_string(), language.clone()));
            }
        }
        query
    }
}

impl std::fmt::Debug for Tmdb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tmdb").field("config", &self.config).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = Tmdb::new(ClientConfig::new("")).unwrap_err();
        assert!(matches!(err, TmdbError::Config(_)));
    }

    #[test]
    fn test_default_language_only_for_localized_requests() {
        let tmdb = Tmdb::new(ClientConfig::new("key").with_language("de")).unwrap();

        let localized = tmdb.finalize_query(ApiRequest::new("movie/550").language(None));
        assert_eq!(localized, vec![("language".to_string(), "de".to_string())]);

        let explicit = tmdb.finalize_query(ApiRequest::new("movie/550").language(Some("pt")));
        assert_eq!(explicit, vec![("language".to_string(), "pt".to_string())]);

        let plain = tmdb.finalize_query(ApiRequest::new("movie/550/credits"));
        assert!(plain.is_empty());
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let tmdb = Tmdb::new(ClientConfig::new("secret-key")).unwrap();
        assert!(!format!("{tmdb:?}").contains("secret-key"));
    }
}
