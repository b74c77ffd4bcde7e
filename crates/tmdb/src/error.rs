//! Error types for the tmdb crate.
//!
//! Failures are surfaced to the caller as they happen: nothing is retried
//! and nothing is recovered locally.

use entities::StatusMessage;
use thiserror::Error;

/// TMDb status code for "The resource you requested could not be found."
const STATUS_CODE_NOT_FOUND: i32 = 34;

/// Errors that can occur while calling the TMDb API
#[derive(Error, Debug)]
pub enum TmdbError {
    /// Client configuration is unusable (missing key, bad base URL, ...)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The HTTP request itself failed (network, DNS, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// TMDb answered with a non-2xx status
    #[error("TMDb API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// TMDb's own `status_code`, when the body carried one
        code: Option<i32>,
        message: String,
    },

    /// The body did not match the expected entity
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TmdbError {
    /// Build an `Api` error from a failed response, preferring TMDb's
    /// status body over the raw text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<StatusMessage>(body).ok();
        let code = parsed.as_ref().and_then(|m| m.status_code);
        let message = parsed
            .and_then(|m| m.status_message)
            .unwrap_or_else(|| body.trim().to_string());

        TmdbError::Api {
            status,
            code,
            message,
        }
    }

    /// HTTP status of an `Api` error
    pub fn status(&self) -> Option<u16> {
        match self {
            TmdbError::Api { status, .. } => Some(*status),
            TmdbError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            TmdbError::Api { status, code, .. } => {
                *status == 404 || *code == Some(STATUS_CODE_NOT_FOUND)
            }
            _ => false,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, TmdbError>;
