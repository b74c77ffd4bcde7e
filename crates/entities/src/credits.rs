//! Cast and crew credits, from the movie side and the person side.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{MovieId, PersonId, dates};

/// Cast and crew of a movie (`movie/{id}/credits`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credits {
    pub id: Option<MovieId>,
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

impl Credits {
    /// Crew members holding the given job, e.g. "Director"
    pub fn crew_with_job<'a>(&'a self, job: &'a str) -> impl Iterator<Item = &'a CrewMember> + 'a {
        self.crew
            .iter()
            .filter(move |member| member.job.as_deref() == Some(job))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub id: PersonId,
    pub cast_id: Option<i32>,
    pub credit_id: Option<String>,
    pub name: Option<String>,
    pub character: Option<String>,
    /// Billing order, 0 is top billed
    pub order: Option<i32>,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: PersonId,
    pub credit_id: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub job: Option<String>,
    pub profile_path: Option<String>,
}

/// Credits of a person (`person/{id}/movie_credits`, `tv_credits`, `combined_credits`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonCredits {
    pub id: Option<PersonId>,
    #[serde(default)]
    pub cast: Vec<PersonCastCredit>,
    #[serde(default)]
    pub crew: Vec<PersonCrewCredit>,
}

/// A role played by a person.
///
/// Movie credits fill `title`/`release_date`, TV credits fill
/// `name`/`first_air_date`/`episode_count`. Only combined credits carry
/// `media_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonCastCredit {
    pub id: i32,
    pub credit_id: Option<String>,
    pub media_type: Option<String>,
    pub character: Option<String>,
    pub adult: Option<bool>,
    pub poster_path: Option<String>,

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
    pub episode_count: Option<i32>,
}

impl PersonCastCredit {
    /// Title for movies, name for TV shows
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonCrewCredit {
    pub id: i32,
    pub credit_id: Option<String>,
    pub media_type: Option<String>,
    pub department: Option<String>,
    pub job: Option<String>,
    pub poster_path: Option<String>,

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
    pub episode_count: Option<i32>,
}

impl PersonCrewCredit {
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }
}
