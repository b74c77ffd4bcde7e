//! Movie records and the per-movie sub-resources.
//!
//! `Movie` is the full summary record. The sub-resource types double as the
//! payload of the dedicated endpoints (`movie/{id}/videos`, ...) and as the
//! inlined copies that `append_to_response` adds to a summary. Inlined
//! copies carry no `id`, which is why every sub-resource id is optional.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{CollectionId, CompanyId, KeywordId, MovieId, ResultsPage, dates, string_ids};
use crate::credits::Credits;
use crate::images::Images;

// =============================================================================
// Movie
// =============================================================================

/// Full movie record from `movie/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub adult: Option<bool>,
    pub video: Option<bool>,
    pub status: Option<String>,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub belongs_to_collection: Option<BaseCollection>,
    pub budget: Option<i64>,
    pub revenue: Option<i64>,
    /// Runtime in minutes
    pub runtime: Option<i32>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub release_date: Option<NaiveDate>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,

    // Only present when requested through append_to_response
    pub alternative_titles: Option<MovieAlternativeTitles>,
    pub credits: Option<Credits>,
    pub external_ids: Option<MovieExternalIds>,
    pub images: Option<Images>,
    pub keywords: Option<MovieKeywords>,
    pub releases: Option<Releases>,
    pub similar: Option<MovieResultsPage>,
    pub translations: Option<Translations>,
    pub videos: Option<Videos>,
    pub reviews: Option<ReviewResultsPage>,
    pub lists: Option<ListResultsPage>,
}

/// Movie entry as it appears in listings and search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseMovie {
    pub id: MovieId,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub release_date: Option<NaiveDate>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub adult: Option<bool>,
    pub video: Option<bool>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i32>,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

pub type MovieResultsPage = ResultsPage<BaseMovie>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: CompanyId,
    pub name: Option<String>,
    pub logo_path: Option<String>,
    pub origin_country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionCountry {
    pub iso_3166_1: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub iso_639_1: Option<String>,
    pub name: Option<String>,
    pub english_name: Option<String>,
}

/// Collection summary, used both for `belongs_to_collection` and collection search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseCollection {
    pub id: CollectionId,
    pub name: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

// =============================================================================
// Sub-resources
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieAlternativeTitles {
    pub id: Option<MovieId>,
    #[serde(default)]
    pub titles: Vec<AlternativeTitle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeTitle {
    pub iso_3166_1: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub title_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieKeywords {
    pub id: Option<MovieId>,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: KeywordId,
    pub name: String,
}

pub type KeywordResultsPage = ResultsPage<Keyword>;

/// Release dates and certifications per country
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Releases {
    pub id: Option<MovieId>,
    #[serde(default)]
    pub countries: Vec<CountryRelease>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRelease {
    pub iso_3166_1: Option<String>,
    pub certification: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub release_date: Option<NaiveDate>,
    pub primary: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translations {
    pub id: Option<MovieId>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub iso_639_1: Option<String>,
    pub iso_3166_1: Option<String>,
    pub name: Option<String>,
    pub english_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Videos {
    pub id: Option<MovieId>,
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: Option<String>,
    pub iso_639_1: Option<String>,
    pub iso_3166_1: Option<String>,
    /// Site-specific key, e.g. the YouTube video id
    pub key: Option<String>,
    pub name: Option<String>,
    pub site: Option<String>,
    /// Vertical resolution (360, 480, 720, 1080)
    pub size: Option<i32>,
    /// Trailer, Teaser, Clip, Featurette, ...
    #[serde(rename = "type")]
    pub video_type: Option<String>,
}

impl Video {
    /// Browser URL for videos hosted on YouTube
    pub fn youtube_url(&self) -> Option<String> {
        match (self.site.as_deref(), self.key.as_deref()) {
            (Some("YouTube"), Some(key)) => Some(format!("https://www.youtube.com/watch?v={key}")),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
}

pub type ReviewResultsPage = ResultsPage<Review>;

/// Ids of a movie on other sites (`external_ids`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieExternalIds {
    pub id: Option<MovieId>,
    pub imdb_id: Option<String>,
    pub wikidata_id: Option<String>,
    pub facebook_id: Option<String>,
    pub instagram_id: Option<String>,
    pub twitter_id: Option<String>,
}

/// A user list that contains a given movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseList {
    /// Older lists have hex string ids, newer ones numeric ids
    #[serde(default, deserialize_with = "string_ids::deserialize_optional")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub favorite_count: Option<i32>,
    pub item_count: Option<i32>,
    pub iso_639_1: Option<String>,
    pub list_type: Option<String>,
    pub poster_path: Option<String>,
}

pub type ListResultsPage = ResultsPage<BaseList>;
