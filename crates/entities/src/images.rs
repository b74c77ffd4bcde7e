//! Image metadata. File paths are relative; combine them with the
//! `ImagesConfiguration` from `configuration` to get a full URL.

use serde::{Deserialize, Serialize};

use crate::common::{MovieId, PersonId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub file_path: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    /// Language of any text in the image, `None` for language-neutral art
    pub iso_639_1: Option<String>,
    pub aspect_ratio: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i32>,
}

/// Backdrops and posters of a movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Images {
    pub id: Option<MovieId>,
    #[serde(default)]
    pub backdrops: Vec<Image>,
    #[serde(default)]
    pub posters: Vec<Image>,
    #[serde(default)]
    pub logos: Vec<Image>,
}

/// Profile pictures of a person
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonImages {
    pub id: Option<PersonId>,
    #[serde(default)]
    pub profiles: Vec<Image>,
}
