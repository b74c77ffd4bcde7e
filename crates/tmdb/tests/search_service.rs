//! Integration tests for the search service.

mod common;

use std::sync::Arc;

use common::{client, client_with, FixtureTransport, API_KEY};
use tmdb::entities::SearchType;
use tmdb::{ClientConfig, MovieSearch, PersonSearch, TvSearch};

const COMPANIES: &str = include_str!("fixtures/search_company.json");
const COLLECTIONS: &str = include_str!("fixtures/search_collection.json");
const KEYWORDS: &str = include_str!("fixtures/search_keyword.json");
const MOVIES: &str = include_str!("fixtures/search_movie.json");
const PEOPLE: &str = include_str!("fixtures/search_person.json");
const TV: &str = include_str!("fixtures/search_tv.json");

#[tokio::test]
async fn test_company() {
    let transport = Arc::new(FixtureTransport::new().route("search/company", COMPANIES));
    let tmdb = client(&transport);

    let page = tmdb.search().company("Marvel", None).await.unwrap();

    assert_eq!(page.total_results, 2);
    assert_eq!(page.results[0].name.as_deref(), Some("Marvel Entertainment"));
    assert!(!page.has_next_page());

    let request = transport.last_request();
    assert_eq!(request.param("query"), Some("Marvel"));
    assert!(request.param("page").is_none());
}

#[tokio::test]
async fn test_collection() {
    let transport = Arc::new(FixtureTransport::new().route("search/collection", COLLECTIONS));
    let tmdb = client(&transport);

    let page = tmdb
        .search()
        .collection("Harry Potter", Some(1), Some("en"))
        .await
        .unwrap();

    assert_eq!(page.results[0].id, 1241);
    assert_eq!(
        page.results[0].name.as_deref(),
        Some("Harry Potter Collection")
    );

    let request = transport.last_request();
    assert_eq!(request.param("query"), Some("Harry Potter"));
    assert_eq!(request.param("page"), Some("1"));
    assert_eq!(request.param("language"), Some("en"));
}

#[tokio::test]
async fn test_keyword() {
    let transport = Arc::new(FixtureTransport::new().route("search/keyword", KEYWORDS));
    let tmdb = client(&transport);

    let page = tmdb.search().keyword("support group", None).await.unwrap();

    assert_eq!(page.results[0].id, 825);
    assert_eq!(page.results[0].name, "support group");
}

#[tokio::test]
async fn test_movie() {
    let transport = Arc::new(FixtureTransport::new().route("search/movie", MOVIES));
    let tmdb = client(&transport);

    let search = MovieSearch::new("Fight Club")
        .with_page(1)
        .with_include_adult(false)
        .with_year(1999)
        .with_primary_release_year(1999)
        .with_search_type(SearchType::Phrase);
    let page = tmdb.search().movie(&search).await.unwrap();

    assert_eq!(page.results[0].id, 550);
    assert_eq!(page.next_page(), Some(2));
    assert!(page.results[1].release_date.is_none());

    let request = transport.last_request();
    assert_eq!(
        request.param_names(),
        vec![
            "query",
            "page",
            "include_adult",
            "year",
            "primary_release_year",
            "search_type",
            "api_key"
        ]
    );
    assert_eq!(request.param("search_type"), Some("phrase"));
    assert_eq!(request.param("api_key"), Some(API_KEY));
}

#[tokio::test]
async fn test_movie_query_only() {
    let transport = Arc::new(FixtureTransport::new().route("search/movie", MOVIES));
    let tmdb = client(&transport);

    tmdb.search()
        .movie(&MovieSearch::new("Fight Club"))
        .await
        .unwrap();

    assert_eq!(
        transport.last_request().param_names(),
        vec!["query", "api_key"]
    );
}

#[tokio::test]
async fn test_movie_uses_default_language() {
    let transport = Arc::new(FixtureTransport::new().route("search/movie", MOVIES));
    let tmdb = client_with(ClientConfig::new(API_KEY).with_language("fr"), &transport);

    tmdb.search()
        .movie(&MovieSearch::new("Fight Club"))
        .await
        .unwrap();
    assert_eq!(transport.last_request().param("language"), Some("fr"));

    tmdb.search()
        .movie(&MovieSearch::new("Fight Club").with_language("pt"))
        .await
        .unwrap();
    assert_eq!(transport.last_request().param("language"), Some("pt"));
}

#[tokio::test]
async fn test_person() {
    let transport = Arc::new(FixtureTransport::new().route("search/person", PEOPLE));
    let tmdb = client_with(ClientConfig::new(API_KEY).with_language("fr"), &transport);

    let page = tmdb
        .search()
        .person(&PersonSearch::new("Brad Pitt").with_include_adult(true))
        .await
        .unwrap();

    assert_eq!(page.results[0].id, 287);

    let request = transport.last_request();
    assert_eq!(request.param("include_adult"), Some("true"));
    // person search takes no language, default or otherwise
    assert!(request.param("language").is_none());
}

#[tokio::test]
async fn test_tv() {
    let transport = Arc::new(FixtureTransport::new().route("search/tv", TV));
    let tmdb = client(&transport);

    let search = TvSearch::new("Breaking Bad")
        .with_first_air_date_year(2008)
        .with_search_type(SearchType::Ngram);
    let page = tmdb.search().tv(&search).await.unwrap();

    let show = &page.results[0];
    assert_eq!(show.id, 1396);
    assert_eq!(show.name.as_deref(), Some("Breaking Bad"));
    assert_eq!(show.origin_country, vec!["US".to_string()]);
    assert_eq!(show.first_air_date, chrono::NaiveDate::from_ymd_opt(2008, 1, 20));

    let request = transport.last_request();
    assert_eq!(request.param("first_air_date_year"), Some("2008"));
    assert_eq!(request.param("search_type"), Some("ngram"));
}
