//! Common types and data structures

use serde::Deserialize;
use std::fmt;

/// One of the four fixed movie groupings served by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    NowPlaying,
    TopRated,
    Popular,
    Upcoming,
}

impl Category {
    /// All categories, in slot order
    pub const ALL: [Category; 4] = [
        Category::NowPlaying,
        Category::TopRated,
        Category::Popular,
        Category::Upcoming,
    ];

    /// Order the rows appear on screen
    pub const DISPLAY_ORDER: [Category; 4] = [
        Category::TopRated,
        Category::NowPlaying,
        Category::Popular,
        Category::Upcoming,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::NowPlaying => "Now Playing",
            Category::TopRated => "Top rated",
            Category::Popular => "Popular",
            Category::Upcoming => "Upcoming",
        }
    }

    /// Path segment under the catalog base URL
    pub fn endpoint(self) -> &'static str {
        match self {
            Category::NowPlaying => "now_playing",
            Category::TopRated => "top_rated",
            Category::Popular => "popular",
            Category::Upcoming => "upcoming",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::NowPlaying => 0,
            Category::TopRated => 1,
            Category::Popular => 2,
            Category::Upcoming => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// Movie entry as returned by the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl MovieRecord {
    /// Absolute poster URL, or `None` when the catalog has no poster for this movie
    pub fn poster_full_path(&self, image_base_url: &str) -> Option<String> {
        let path = self.poster_path.as_deref().filter(|p| !p.is_empty())?;
        Some(format!(
            "{}/{}",
            image_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }
}

/// Response body shared by all four list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieResponse {
    #[serde(default)]
    pub results: Option<Vec<MovieRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_ignores_extra_fields() {
        let json = r#"{
            "page": 1,
            "dates": {"maximum": "2024-06-01", "minimum": "2024-05-01"},
            "results": [
                {"id": 7, "title": "Heat", "overview": "Cops and robbers", "poster_path": "/heat.jpg", "adult": false},
                {"id": 3, "title": "Alien", "overview": "In space", "poster_path": null}
            ],
            "total_pages": 10
        }"#;
        let response: MovieResponse = serde_json::from_str(json).unwrap();
        let results = response.results.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 7);
        assert_eq!(results[1].title, "Alien");
        assert_eq!(results[1].poster_path, None);
    }

    #[test]
    fn test_missing_results_is_none() {
        let response: MovieResponse = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(response.results.is_none());

        let response: MovieResponse = serde_json::from_str(r#"{"results": null}"#).unwrap();
        assert!(response.results.is_none());
    }

    #[test]
    fn test_missing_overview_defaults_to_empty() {
        let movie: MovieRecord = serde_json::from_str(r#"{"id": 1, "title": "Up"}"#).unwrap();
        assert_eq!(movie.overview, "");
    }

    #[test]
    fn test_poster_full_path_joins_base() {
        let movie = MovieRecord {
            id: 1,
            title: "Heat".into(),
            overview: String::new(),
            poster_path: Some("/abc.jpg".into()),
        };
        assert_eq!(
            movie.poster_full_path("https://image.tmdb.org/t/p/w500").as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(
            movie.poster_full_path("https://img.example/").as_deref(),
            Some("https://img.example/abc.jpg")
        );
    }

    #[test]
    fn test_poster_full_path_absent() {
        let mut movie = MovieRecord {
            id: 1,
            title: "Heat".into(),
            overview: String::new(),
            poster_path: None,
        };
        assert_eq!(movie.poster_full_path("https://img.example"), None);
        movie.poster_path = Some(String::new());
        assert_eq!(movie.poster_full_path("https://img.example"), None);
    }

    #[test]
    fn test_category_indices_are_distinct() {
        let mut seen: Vec<usize> = Category::ALL.iter().map(|c| c.index()).collect();
        seen.sort();
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(Category::DISPLAY_ORDER[0].label(), "Top rated");
    }
}
