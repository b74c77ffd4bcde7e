//! The `append_to_response` query mechanism.
//!
//! TMDb lets a summary request inline several sub-resources (credits,
//! videos, ...) into one response. The requested names travel as a single
//! comma-separated query value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A sub-resource that can be appended to a summary request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppendToResponseItem {
    AlternativeTitles,
    Credits,
    ExternalIds,
    Images,
    Keywords,
    Lists,
    Releases,
    Reviews,
    Similar,
    Translations,
    Videos,
}

impl AppendToResponseItem {
    pub const ALL: [AppendToResponseItem; 11] = [
        Self::AlternativeTitles,
        Self::Credits,
        Self::ExternalIds,
        Self::Images,
        Self::Keywords,
        Self::Lists,
        Self::Releases,
        Self::Reviews,
        Self::Similar,
        Self::Translations,
        Self::Videos,
    ];

    /// Name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlternativeTitles => "alternative_titles",
            Self::Credits => "credits",
            Self::ExternalIds => "external_ids",
            Self::Images => "images",
            Self::Keywords => "keywords",
            Self::Lists => "lists",
            Self::Releases => "releases",
            Self::Reviews => "reviews",
            Self::Similar => "similar",
            Self::Translations => "translations",
            Self::Videos => "videos",
        }
    }
}

impl fmt::Display for AppendToResponseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a wire name, e.g. from a command line flag
impl FromStr for AppendToResponseItem {
    type Err = UnknownAppendItem;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|item| item.as_str() == name)
            .ok_or_else(|| UnknownAppendItem(name.to_string()))
    }
}

/// A name that is not an appendable sub-resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAppendItem(pub String);

impl fmt::Display for UnknownAppendItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sub-resource {:?} (expected one of: ", self.0)?;
        for (idx, item) in AppendToResponseItem::ALL.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            f.write_str(item.as_str())?;
        }
        f.write_str(")")
    }
}

impl std::error::Error for UnknownAppendItem {}

/// Ordered set of sub-resources to inline.
///
/// Duplicates are dropped; the first occurrence keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppendToResponse {
    items: Vec<AppendToResponseItem>,
}

impl AppendToResponse {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = AppendToResponseItem>,
    {
        let mut append = Self::default();
        for item in items {
            append.push(item);
        }
        append
    }

    /// Builder-style add
    pub fn with(mut self, item: AppendToResponseItem) -> Self {
        self.push(item);
        self
    }

    pub fn push(&mut self, item: AppendToResponseItem) {
        if !self.items.contains(&item) {
            self.items.push(item);
        }
    }

    pub fn contains(&self, item: AppendToResponseItem) -> bool {
        self.items.contains(&item)
    }

    pub fn items(&self) -> &[AppendToResponseItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<AppendToResponseItem> for AppendToResponse {
    fn from(item: AppendToResponseItem) -> Self {
        Self::new([item])
    }
}

impl FromIterator<AppendToResponseItem> for AppendToResponse {
    fn from_iter<I: IntoIterator<Item = AppendToResponseItem>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Renders the query value, e.g. `releases,credits,videos`
impl fmt::Display for AppendToResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            f.write_str(item.as_str())?;
        }
        Ok(())
    }
}
