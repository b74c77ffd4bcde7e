//! Movies service (`movie/...` endpoints).

use entities::{
    AppendToResponse, Credits, Images, ListResultsPage, Movie, MovieAlternativeTitles, MovieId,
    MovieKeywords, MovieResultsPage, Releases, ReviewResultsPage, Translations, Videos,
};
use tracing::instrument;

use crate::client::Tmdb;
use crate::error::Result;
use crate::request::ApiRequest;

pub struct MoviesService<'a> {
    tmdb: &'a Tmdb,
}

impl<'a> MoviesService<'a> {
    pub(crate) fn new(tmdb: &'a Tmdb) -> Self {
        Self { tmdb }
    }

    /// Primary information about a movie.
    ///
    /// # Arguments
    /// * `id` - TMDb movie id
    /// * `language` - ISO 639-1 code for translated fields
    /// * `append` - sub-resources to inline into the response
    #[instrument(skip(self, append))]
    pub async fn summary(
        &self,
        id: MovieId,
        language: Option<&str>,
        append: Option<&AppendToResponse>,
    ) -> Result<Movie> {
        let request = ApiRequest::new(format!("movie/{id}"))
            .language(language)
            .append(append);
        self.tmdb.get(request).await
    }

    /// Alternative titles, optionally restricted to one ISO 3166-1 country
    pub async fn alternative_titles(
        &self,
        id: MovieId,
        country: Option<&str>,
    ) -> Result<MovieAlternativeTitles> {
        let request =
            ApiRequest::new(format!("movie/{id}/alternative_titles")).opt_param("country", country);
        self.tmdb.get(request).await
    }

    pub async fn credits(&self, id: MovieId) -> Result<Credits> {
        self.tmdb
            .get(ApiRequest::new(format!("movie/{id}/credits")))
            .await
    }

    pub async fn images(&self, id: MovieId, language: Option<&str>) -> Result<Images> {
        let request = ApiRequest::new(format!("movie/{id}/images")).language(language);
        self.tmdb.get(request).await
    }

    pub async fn keywords(&self, id: MovieId) -> Result<MovieKeywords> {
        self.tmdb
            .get(ApiRequest::new(format!("movie/{id}/keywords")))
            .await
    }

    /// Release dates and certifications per country
    pub async fn releases(&self, id: MovieId) -> Result<Releases> {
        self.tmdb
            .get(ApiRequest::new(format!("movie/{id}/releases")))
            .await
    }

    /// Trailers, teasers and clips
    pub async fn videos(&self, id: MovieId, language: Option<&str>) -> Result<Videos> {
        let request = ApiRequest::new(format!("movie/{id}/videos")).language(language);
        self.tmdb.get(request).await
    }

    pub async fn translations(
        &self,
        id: MovieId,
        append: Option<&AppendToResponse>,
    ) -> Result<Translations> {
        let request = ApiRequest::new(format!("movie/{id}/translations")).append(append);
        self.tmdb.get(request).await
    }

    pub async fn similar(
        &self,
        id: MovieId,
        page: Option<u32>,
        language: Option<&str>,
    ) -> Result<MovieResultsPage> {
        let request = ApiRequest::new(format!("movie/{id}/similar"))
            .page(page)
            .language(language);
        self.tmdb.get(request).await
    }

    pub async fn reviews(
        &self,
        id: MovieId,
        page: Option<u32>,
        language: Option<&str>,
    ) -> Result<ReviewResultsPage> {
        let request = ApiRequest::new(format!("movie/{id}/reviews"))
            .page(page)
            .language(language);
        self.tmdb.get(request).await
    }

    /// User lists that contain this movie
    pub async fn lists(
        &self,
        id: MovieId,
        page: Option<u32>,
        language: Option<&str>,
    ) -> Result<ListResultsPage> {
        let request = ApiRequest::new(format!("movie/{id}/lists"))
            .page(page)
            .language(language);
        self.tmdb.get(request).await
    }

    /// Most recently created movie. Often sparsely filled.
    pub async fn latest(&self) -> Result<Movie> {
        self.tmdb.get(ApiRequest::new("movie/latest")).await
    }

    pub async fn upcoming(&self, page: Option<u32>, language: Option<&str>) -> Result<MovieResultsPage> {
        self.listing("movie/upcoming", page, language).await
    }

    pub async fn now_playing(
        &self,
        page: Option<u32>,
        language: Option<&str>,
    ) -> Result<MovieResultsPage> {
        self.listing("movie/now_playing", page, language).await
    }

    pub async fn popular(&self, page: Option<u32>, language: Option<&str>) -> Result<MovieResultsPage> {
        self.listing("movie/popular", page, language).await
    }

    pub async fn top_rated(&self, page: Option<u32>, language: Option<&str>) -> Result<MovieResultsPage> {
        self.listing("movie/top_rated", page, language).await
    }

    async fn listing(
        &self,
        path: &str,
        page: Option<u32>,
        language: Option<&str>,
    ) -> Result<MovieResultsPage> {
        let request = ApiRequest::new(path).page(page).language(language);
        self.tmdb.get(request).await
    }
}
