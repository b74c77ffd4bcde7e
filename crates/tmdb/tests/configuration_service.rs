//! Integration tests for the configuration service.

mod common;

use std::sync::Arc;

use common::{client, FixtureTransport};

const CONFIGURATION: &str = include_str!("fixtures/configuration.json");

#[tokio::test]
async fn test_configuration() {
    let transport = Arc::new(FixtureTransport::new().route("configuration", CONFIGURATION));
    let tmdb = client(&transport);

    let config = tmdb.configuration().configuration().await.unwrap();

    let images = &config.images;
    assert_eq!(images.base_url, "http://image.tmdb.org/t/p/");
    assert_eq!(images.secure_base_url, "https://image.tmdb.org/t/p/");
    assert!(images.supports_poster_size("w500"));
    assert!(!images.supports_poster_size("w9999"));
    assert!(images.profile_sizes.contains(&"h632".to_string()));
    assert!(config.change_keys.contains(&"budget".to_string()));

    assert_eq!(transport.last_request().param_names(), vec!["api_key"]);
}

#[tokio::test]
async fn test_configuration_builds_image_urls() {
    let transport = Arc::new(FixtureTransport::new().route("configuration", CONFIGURATION));
    let tmdb = client(&transport);

    let config = tmdb.configuration().configuration().await.unwrap();

    assert_eq!(
        config
            .images
            .image_url("w500", "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg", true),
        "https://image.tmdb.org/t/p/w500/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg"
    );
    assert_eq!(
        config
            .images
            .image_url("original", "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg", false),
        "http://image.tmdb.org/t/p/original/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg"
    );
}
