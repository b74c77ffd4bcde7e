//! Search service (`search/...` endpoints).
//!
//! Simple searches take the query and page directly. Movie, person and TV
//! search accept enough filters that they take a parameter struct built
//! with `new(query)` plus `with_*` methods.

use entities::{
    CollectionResultsPage, CompanyResultsPage, KeywordResultsPage, MovieResultsPage,
    PersonResultsPage, SearchType, TvResultsPage,
};

use crate::client::Tmdb;
use crate::error::Result;
use crate::request::{ApiRequest, PARAM_QUERY};

// =============================================================================
// Parameter structs
// =============================================================================

/// Parameters for `search/movie`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieSearch {
    pub query: String,
    pub page: Option<u32>,
    pub language: Option<String>,
    pub include_adult: Option<bool>,
    /// Matches any release date in the year
    pub year: Option<i32>,
    /// Matches only the primary release date
    pub primary_release_year: Option<i32>,
    pub search_type: Option<SearchType>,
}

impl MovieSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = Some(include_adult);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_primary_release_year(mut self, year: i32) -> Self {
        self.primary_release_year = Some(year);
        self
    }

    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = Some(search_type);
        self
    }

    fn to_request(&self) -> ApiRequest {
        ApiRequest::new("search/movie")
            .param(PARAM_QUERY, &self.query)
            .page(self.page)
            .language(self.language.as_deref())
            .opt_param("include_adult", self.include_adult)
            .opt_param("year", self.year)
            .opt_param("primary_release_year", self.primary_release_year)
            .opt_param("search_type", self.search_type)
    }
}

/// Parameters for `search/person`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonSearch {
    pub query: String,
    pub page: Option<u32>,
    pub include_adult: Option<bool>,
    pub search_type: Option<SearchType>,
}

impl PersonSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = Some(include_adult);
        self
    }

    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = Some(search_type);
        self
    }

    fn to_request(&self) -> ApiRequest {
        ApiRequest::new("search/person")
            .param(PARAM_QUERY, &self.query)
            .page(self.page)
            .opt_param("include_adult", self.include_adult)
            .opt_param("search_type", self.search_type)
    }
}

/// Parameters for `search/tv`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TvSearch {
    pub query: String,
    pub page: Option<u32>,
    pub language: Option<String>,
    pub first_air_date_year: Option<i32>,
    pub search_type: Option<SearchType>,
}

impl TvSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_first_air_date_year(mut self, year: i32) -> Self {
        self.first_air_date_year = Some(year);
        self
    }

    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = Some(search_type);
        self
    }

    fn to_request(&self) -> ApiRequest {
        ApiRequest::new("search/tv")
            .param(PARAM_QUERY, &self.query)
            .page(self.page)
            .language(self.language.as_deref())
            .opt_param("first_air_date_year", self.first_air_date_year)
            .opt_param("search_type", self.search_type)
    }
}

// =============================================================================
// Service
// =============================================================================

pub struct SearchService<'a> {
    tmdb: &'a Tmdb,
}

impl<'a> SearchService<'a> {
    pub(crate) fn new(tmdb: &'a Tmdb) -> Self {
        Self { tmdb }
    }

    pub async fn company(&self, query: &str, page: Option<u32>) -> Result<CompanyResultsPage> {
        let request = ApiRequest::new("search/company")
            .param(PARAM_QUERY, query)
            .page(page);
        self.tmdb.get(request).await
    }

    pub async fn collection(
        &self,
        query: &str,
        page: Option<u32>,
        language: Option<&str>,
    ) -> Result<CollectionResultsPage> {
        let request = ApiRequest::new("search/collection")
            .param(PARAM_QUERY, query)
            .page(page)
            .language(language);
        self.tmdb.get(request).await
    }

    pub async fn keyword(&self, query: &str, page: Option<u32>) -> Result<KeywordResultsPage> {
        let request = ApiRequest::new("search/keyword")
            .param(PARAM_QUERY, query)
            .page(page);
        self.tmdb.get(request).await
    }

    pub async fn movie(&self, search: &MovieSearch) -> Result<MovieResultsPage> {
        self.tmdb.get(search.to_request()).await
    }

    pub async fn person(&self, search: &PersonSearch) -> Result<PersonResultsPage> {
        self.tmdb.get(search.to_request()).await
    }

    pub async fn tv(&self, search: &TvSearch) -> Result<TvResultsPage> {
        self.tmdb.get(search.to_request()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_search_request() {
        let search = MovieSearch::new("Fight Club")
            .with_year(1999)
            .with_include_adult(false)
            .with_search_type(SearchType::Ngram);

        let request = search.to_request();
        assert_eq!(request.path(), "search/movie");
        assert_eq!(
            request.query(),
            &[
                ("query".to_string(), "Fight Club".to_string()),
                ("include_adult".to_string(), "false".to_string()),
                ("year".to_string(), "1999".to_string()),
                ("search_type".to_string(), "ngram".to_string()),
            ]
        );
        assert!(request.is_localized());
    }

    #[test]
    fn test_person_search_is_not_localized() {
        let request = PersonSearch::new("Brad Pitt").with_page(2).to_request();

        assert_eq!(request.path(), "search/person");
        assert!(!request.is_localized());
        assert!(request.has_param("page"));
    }

    #[test]
    fn test_tv_search_request() {
        let request = TvSearch::new("Breaking Bad")
            .with_language("en")
            .with_first_air_date_year(2008)
            .to_request();

        assert_eq!(
            request.query(),
            &[
                ("query".to_string(), "Breaking Bad".to_string()),
                ("language".to_string(), "en".to_string()),
                ("first_air_date_year".to_string(), "2008".to_string()),
            ]
        );
    }
}
