//! # TMDb Client Crate
//!
//! Async client for the TMDb v3 REST API. Every method issues one GET
//! request and decodes the JSON body into a type from the `entities` crate.
//!
//! ## Main Components
//!
//! - **config**: base URL, API key, default language, timeout
//! - **error**: `TmdbError` and the crate `Result` alias
//! - **request**: `ApiRequest`, an endpoint path plus query parameters
//! - **transport**: the `Transport` seam and its reqwest implementation
//! - **client**: `Tmdb`, the shared manager handing out services
//! - **services**: movies, people, search and configuration endpoints
//!
//! ## Example Usage
//!
//! ```ignore
//! use tmdb::{ClientConfig, Tmdb};
//! use tmdb::entities::{AppendToResponse, AppendToResponseItem};
//!
//! let tmdb = Tmdb::new(ClientConfig::new(api_key))?;
//!
//! let append = AppendToResponse::new([AppendToResponseItem::Credits]);
//! let movie = tmdb.movies().summary(550, None, Some(&append)).await?;
//! println!("{:?} directed by {:?}", movie.title, movie.credits);
//!
//! let results = tmdb.search().movie(&MovieSearch::new("Fight Club")).await?;
//! ```
//!
//! Nothing is cached or retried: errors come back to the caller unchanged.

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod services;
pub mod transport;

// Re-export the entity crate so callers need a single dependency
pub use entities;

// Re-export commonly used types for convenience
pub use client::Tmdb;
pub use config::ClientConfig;
pub use error::{Result, TmdbError};
pub use request::ApiRequest;
pub use services::{
    ConfigurationService, MovieSearch, MoviesService, PeopleService, PersonSearch, SearchService,
    TvSearch,
};
pub use transport::{RawResponse, ReqwestTransport, Transport};
