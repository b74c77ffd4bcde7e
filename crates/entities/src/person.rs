//! People: full records, listing entries and external ids.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{PersonId, ResultsPage, dates};

/// Full person record from `person/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: Option<String>,
    #[serde(default)]
    pub also_known_as: Vec<String>,
    pub biography: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub deathday: Option<NaiveDate>,
    pub place_of_birth: Option<String>,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
    pub profile_path: Option<String>,
    pub known_for_department: Option<String>,
    /// 0 unknown, 1 female, 2 male, 3 non-binary
    pub gender: Option<i32>,
    pub adult: Option<bool>,
    pub popularity: Option<f64>,
}

/// Person entry in `person/popular` and `search/person`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasePerson {
    pub id: PersonId,
    pub name: Option<String>,
    pub profile_path: Option<String>,
    pub adult: Option<bool>,
    pub popularity: Option<f64>,
    pub known_for_department: Option<String>,
    #[serde(default)]
    pub known_for: Vec<Media>,
}

pub type PersonResultsPage = ResultsPage<BasePerson>;

/// Movie or TV show a person is known for, tagged by `media_type`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub id: i32,
    /// "movie" or "tv"
    pub media_type: Option<String>,
    pub adult: Option<bool>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i32>,

    // Movie
    pub title: Option<String>,
    pub original_title: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub release_date: Option<NaiveDate>,

    // TV
    pub name: Option<String>,
    pub original_name: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub first_air_date: Option<NaiveDate>,
}

impl Media {
    pub fn is_movie(&self) -> bool {
        self.media_type.as_deref() == Some("movie")
    }

    pub fn is_tv(&self) -> bool {
        self.media_type.as_deref() == Some("tv")
    }

    /// Title for movies, name for TV shows
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }
}

/// Ids of a person on other sites (`person/{id}/external_ids`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonIds {
    pub id: Option<PersonId>,
    pub imdb_id: Option<String>,
    pub freebase_mid: Option<String>,
    pub freebase_id: Option<String>,
    pub tvrage_id: Option<i32>,
    pub facebook_id: Option<String>,
    pub instagram_id: Option<String>,
    pub twitter_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kinds() {
        let page: PersonResultsPage = serde_json::from_str(
            r#"{
                "page": 1, "total_pages": 1, "total_results": 1,
                "results": [{
                    "id": 287, "name": "Brad Pitt", "adult": false, "popularity": 10.5,
                    "known_for": [
                        {"id": 550, "media_type": "movie", "title": "Fight Club", "release_date": "1999-10-15"},
                        {"id": 1399, "media_type": "tv", "name": "Game of Thrones", "first_air_date": "2011-04-17"}
                    ]
                }]
            }"#,
        )
        .unwrap();

        let known_for = &page.results[0].known_for;
        assert!(known_for[0].is_movie());
        assert_eq!(known_for[0].display_title(), Some("Fight Club"));
        assert!(known_for[1].is_tv());
        assert_eq!(known_for[1].display_title(), Some("Game of Thrones"));
        assert_eq!(known_for[1].first_air_date, NaiveDate::from_ymd_opt(2011, 4, 17));
    }
}
