//! Result types that only show up in search, plus the search mode switch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::{CompanyId, ResultsPage, TvShowId, dates};
use crate::movie::BaseCollection;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: Option<String>,
    pub logo_path: Option<String>,
    pub origin_country: Option<String>,
}

pub type CompanyResultsPage = ResultsPage<Company>;

pub type CollectionResultsPage = ResultsPage<BaseCollection>;

/// TV show entry in `search/tv`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseTvShow {
    pub id: TvShowId,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub first_air_date: Option<NaiveDate>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i32>,
    #[serde(default)]
    pub origin_country: Vec<String>,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

pub type TvResultsPage = ResultsPage<BaseTvShow>;

/// How the query text is matched
///
/// - `Phrase`: match the query as typed (default on TMDb)
/// - `Ngram`: partial word matching, better for autocomplete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Phrase,
    Ngram,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Phrase => "phrase",
            SearchType::Ngram => "ngram",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
