//! # Entities Crate
//!
//! Typed response shapes for the TMDb v3 API.
//!
//! ## Main Components
//!
//! - **common**: id aliases, the generic `ResultsPage<T>`, error body, date decoding
//! - **movie**: `Movie`, listing entries and per-movie sub-resources
//! - **credits**: cast and crew, for movies and for people
//! - **images**: image metadata for movies and people
//! - **person**: `Person`, listing entries, external ids
//! - **search**: search-only result types and `SearchType`
//! - **configuration**: global API configuration and image URL building
//! - **append**: the `append_to_response` item set
//!
//! Every type is a plain data holder built from exactly one response body.
//! Fields the API may leave out are `Option`s; lists default to empty.
//!
//! ## Example Usage
//!
//! ```ignore
//! use entities::{Movie, AppendToResponse, AppendToResponseItem};
//!
//! let movie: Movie = serde_json::from_str(&body)?;
//! println!("{} ({:?})", movie.title.unwrap_or_default(), movie.release_date);
//!
//! let append = AppendToResponse::new([AppendToResponseItem::Credits, AppendToResponseItem::Videos]);
//! assert_eq!(append.to_string(), "credits,videos");
//! ```

// Public modules
pub mod append;
pub mod common;
pub mod configuration;
pub mod credits;
pub mod images;
pub mod movie;
pub mod person;
pub mod search;

// Re-export commonly used types for convenience
pub use append::{AppendToResponse, AppendToResponseItem, UnknownAppendItem};
pub use common::{
    // Type aliases
    CollectionId,
    CompanyId,
    KeywordId,
    MovieId,
    PersonId,
    TvShowId,
    // Shared shapes
    ResultsPage,
    StatusMessage,
};
pub use configuration::{Configuration, ImagesConfiguration};
pub use credits::{CastMember, Credits, CrewMember, PersonCastCredit, PersonCredits, PersonCrewCredit};
pub use images::{Image, Images, PersonImages};
pub use movie::{
    AlternativeTitle, BaseCollection, BaseList, BaseMovie, CountryRelease, Genre, Keyword,
    KeywordResultsPage, ListResultsPage, Movie, MovieAlternativeTitles, MovieExternalIds,
    MovieKeywords, MovieResultsPage, ProductionCompany, ProductionCountry, Releases, Review,
    ReviewResultsPage, SpokenLanguage, Translation, Translations, Video, Videos,
};
pub use person::{BasePerson, Media, Person, PersonIds, PersonResultsPage};
pub use search::{
    BaseTvShow, CollectionResultsPage, Company, CompanyResultsPage, SearchType, TvResultsPage,
};
