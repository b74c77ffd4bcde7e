//! Configuration service (`configuration`).

use entities::Configuration;

use crate::client::Tmdb;
use crate::error::Result;
use crate::request::ApiRequest;

pub struct ConfigurationService<'a> {
    tmdb: &'a Tmdb,
}

impl<'a> ConfigurationService<'a> {
    pub(crate) fn new(tmdb: &'a Tmdb) -> Self {
        Self { tmdb }
    }

    /// Image base URLs, available sizes and change keys.
    ///
    /// The data changes rarely; callers that build many image URLs should
    /// fetch it once and keep it.
    pub async fn configuration(&self) -> Result<Configuration> {
        self.tmdb.get(ApiRequest::new("configuration")).await
    }
}
