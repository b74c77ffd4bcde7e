//! Global API configuration (`configuration`).
//!
//! The image section tells clients where to fetch the files referenced by
//! `poster_path`, `backdrop_path` and friends, and in which sizes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    pub images: ImagesConfiguration,
    /// Field names that can show up in the changes endpoints
    #[serde(default)]
    pub change_keys: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesConfiguration {
    pub base_url: String,
    pub secure_base_url: String,
    #[serde(default)]
    pub backdrop_sizes: Vec<String>,
    #[serde(default)]
    pub logo_sizes: Vec<String>,
    #[serde(default)]
    pub poster_sizes: Vec<String>,
    #[serde(default)]
    pub profile_sizes: Vec<String>,
    #[serde(default)]
    pub still_sizes: Vec<String>,
}

impl ImagesConfiguration {
    /// Full URL of an image file, e.g.
    /// `https://image.tmdb.org/t/p/w500/adw6Lq9FiC9zjYEpOqfq03ituwp.jpg`.
    ///
    /// `size` is one of the advertised sizes ("w500", "original", ...);
    /// `file_path` is the relative path from an entity, leading slash included.
    pub fn image_url(&self, size: &str, file_path: &str, secure: bool) -> String {
        let base = if secure {
            &self.secure_base_url
        } else {
            &self.base_url
        };
        let base = base.trim_end_matches('/');
        let size = size.trim_matches('/');
        let file_path = file_path.trim_start_matches('/');
        format!("{base}/{size}/{file_path}")
    }

    /// Whether `size` is advertised for posters
    pub fn supports_poster_size(&self, size: &str) -> bool {
        self.poster_sizes.iter().any(|s| s == size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images() -> ImagesConfiguration {
        ImagesConfiguration {
            base_url: "http://image.tmdb.org/t/p/".to_string(),
            secure_base_url: "https://image.tmdb.org/t/p/".to_string(),
            backdrop_sizes: vec!["w300".into(), "w780".into(), "original".into()],
            logo_sizes: vec!["w45".into(), "original".into()],
            poster_sizes: vec!["w92".into(), "w500".into(), "original".into()],
            profile_sizes: vec!["w45".into(), "h632".into(), "original".into()],
            still_sizes: vec![],
        }
    }

    #[test]
    fn test_image_url_joins_parts() {
        let config = images();

        assert_eq!(
            config.image_url("w500", "/adw6Lq9FiC9zjYEpOqfq03ituwp.jpg", true),
            "https://image.tmdb.org/t/p/w500/adw6Lq9FiC9zjYEpOqfq03ituwp.jpg"
        );
        assert_eq!(
            config.image_url("original", "poster.jpg", false),
            "http://image.tmdb.org/t/p/original/poster.jpg"
        );
    }

    #[test]
    fn test_supports_poster_size() {
        let config = images();
        assert!(config.supports_poster_size("w500"));
        assert!(!config.supports_poster_size("w1280"));
    }
}
