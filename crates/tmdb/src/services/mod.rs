//! Per-resource services. Each method maps onto exactly one endpoint.
//!
//! Services are thin borrowed views over a [`Tmdb`](crate::Tmdb); get them
//! through `tmdb.movies()`, `tmdb.people()`, `tmdb.search()` and
//! `tmdb.configuration()`.

pub mod configuration;
pub mod movies;
pub mod people;
pub mod search;

// Re-export for convenience
pub use configuration::ConfigurationService;
pub use movies::MoviesService;
pub use people::PeopleService;
pub use search::{MovieSearch, PersonSearch, SearchService, TvSearch};
