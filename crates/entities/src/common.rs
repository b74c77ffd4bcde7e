//! Shared building blocks for TMDb response shapes.
//!
//! - Type aliases for the numeric ids used across resources
//! - The generic paginated list returned by every listing endpoint
//! - The status body TMDb sends alongside error responses
//! - Date decoding that tolerates the empty strings TMDb uses for "unknown"

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// TMDb movie identifier (e.g. 550 for Fight Club)
pub type MovieId = i32;

/// TMDb person identifier
pub type PersonId = i32;

/// TMDb collection identifier
pub type CollectionId = i32;

/// TMDb production company identifier
pub type CompanyId = i32;

/// TMDb keyword identifier
pub type KeywordId = i32;

/// TMDb TV show identifier
pub type TvShowId = i32;

// =============================================================================
// Pagination
// =============================================================================

/// One page of a paginated TMDb listing.
///
/// Review and list pages additionally carry the `id` of the movie they
/// belong to; plain listings leave it empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsPage<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> ResultsPage<T> {
    /// Whether the remote listing has pages after this one
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page number to request next, if any
    pub fn next_page(&self) -> Option<u32> {
        self.has_next_page().then(|| self.page + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T> Default for ResultsPage<T> {
    fn default() -> Self {
        Self {
            id: None,
            page: 0,
            total_pages: 0,
            total_results: 0,
            results: Vec::new(),
        }
    }
}

// =============================================================================
// Error body
// =============================================================================

/// Body TMDb returns with non-2xx responses, e.g.
/// `{"status_code": 34, "status_message": "The resource you requested could not be found."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub status_code: Option<i32>,
    pub status_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

// =============================================================================
// Dates
// =============================================================================

/// Serde helpers for `YYYY-MM-DD` dates.
///
/// TMDb sends `null`, a missing field or `""` when a date is unknown; all
/// three decode to `None`. Anything else must be a valid calendar date.
pub mod dates {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, de::Error};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => NaiveDate::parse_from_str(value, FORMAT)
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid date {value:?}: {e}"))),
        }
    }
}

/// Ids TMDb has sent both as strings and as integers (list ids).
/// Either form decodes to its string rendering.
pub mod string_ids {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<RawId> = Option::deserialize(deserializer)?;
        Ok(raw.map(|id| match id {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }))
    }
}
