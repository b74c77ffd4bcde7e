//! Shared test helpers: an in-memory transport serving recorded TMDb bodies.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tmdb::{ClientConfig, RawResponse, Tmdb, Transport};

pub const API_KEY: &str = "test-key";
pub const BASE_URL: &str = "https://api.themoviedb.org/3";

pub const NOT_FOUND_BODY: &str = include_str!("../fixtures/error_not_found.json");

/// A request as the transport saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Endpoint path relative to the base URL
    pub fn path(&self) -> &str {
        self.url
            .strip_prefix(BASE_URL)
            .unwrap_or(&self.url)
            .trim_start_matches('/')
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn param_names(&self) -> Vec<&str> {
        self.query.iter().map(|(k, _)| k.as_str()).collect()
    }
}

struct Route {
    path: String,
    required: Vec<(String, String)>,
    response: RawResponse,
}

/// Routes by endpoint path, optionally narrowed by query pairs. The most
/// specific matching route wins; anything unrouted gets TMDb's 404 body.
#[derive(Default)]
pub struct FixtureTransport {
    routes: Vec<Route>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, path: &str, body: &str) -> Self {
        self.respond(path, &[], RawResponse::new(200, body))
    }

    pub fn route_with(self, path: &str, required: &[(&str, &str)], body: &str) -> Self {
        self.respond(path, required, RawResponse::new(200, body))
    }

    pub fn respond(mut self, path: &str, required: &[(&str, &str)], response: RawResponse) -> Self {
        self.routes.push(Route {
            path: path.to_string(),
            required: required
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            response,
        });
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("no request reached the transport")
    }

    fn lookup(&self, url: &str, query: &[(String, String)]) -> RawResponse {
        let path = url.strip_prefix(BASE_URL).unwrap_or(url).trim_start_matches('/');

        self.routes
            .iter()
            .filter(|route| route.path == path)
            .filter(|route| route.required.iter().all(|pair| query.contains(pair)))
            .max_by_key(|route| route.required.len())
            .map(|route| route.response.clone())
            .unwrap_or_else(|| RawResponse::new(404, NOT_FOUND_BODY))
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn get(&self, url: &str, query: &[(String, String)]) -> tmdb::Result<RawResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            query: query.to_vec(),
        });
        Ok(self.lookup(url, query))
    }
}

/// Client over `transport` with the test key and no default language
pub fn client(transport: &Arc<FixtureTransport>) -> Tmdb {
    client_with(ClientConfig::new(API_KEY), transport)
}

pub fn client_with(config: ClientConfig, transport: &Arc<FixtureTransport>) -> Tmdb {
    let transport: Arc<dyn Transport> = transport.clone();
    Tmdb::with_transport(config, transport).unwrap()
}
