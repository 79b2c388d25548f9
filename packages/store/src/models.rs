//! # Domain models for movies and sessions
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Movie`] | One entry of the externally supplied catalog (`window.movies`). Field names follow the page scripts that populate it (`imageUrl` in camelCase). |
//! | [`MovieCatalog`] | The catalog as seen by the UI: either not loaded yet, or an ordered list whose positions are the movie ids. |
//! | [`SessionRecord`] | The identity payload stored in the session cookie. Not verified, only used to decide what the UI shows. |

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

/// Position of a movie in the catalog. Watchlist entries and the player's
/// `id` query parameter both use it.
pub type MovieId = usize;

/// A movie as published by the catalog script.
///
/// Missing or `null` fields read as empty. An entry without a title keeps its
/// position in the catalog but is never listed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Movie {
    #[serde(deserialize_with = "text_or_number")]
    pub title: String,
    #[serde(deserialize_with = "text_or_number")]
    pub genre: String,
    #[serde(deserialize_with = "string_list")]
    pub categories: Vec<String>,
    /// Shown verbatim; the catalog mixes numbers and strings here.
    #[serde(deserialize_with = "text_or_number")]
    pub year: String,
    #[serde(deserialize_with = "text_or_number")]
    pub rating: String,
    #[serde(deserialize_with = "text_or_number")]
    pub image_url: String,
    #[serde(deserialize_with = "text_or_number")]
    pub description: String,
}

impl Movie {
    pub fn new(title: impl Into<String>, genre: impl Into<String>, categories: &[&str]) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Whether the movie can be shown in listings and search results.
    pub fn is_listed(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Case-insensitive substring match on title, genre or any category.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.genre.to_lowercase().contains(needle)
            || self
                .categories
                .iter()
                .any(|c| c.to_lowercase().contains(needle))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
    Null,
    Other(serde::de::IgnoredAny),
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
        TextOrNumber::Null | TextOrNumber::Other(_) => String::new(),
    })
}

#[derive(Deserialize)]
struct Label(#[serde(deserialize_with = "text_or_number")] String);

fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let labels = Option::<Vec<Label>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(labels
        .into_iter()
        .map(|Label(label)| label)
        .filter(|label| !label.is_empty())
        .collect())
}

/// The movie list shared by the search box, the overlay and the pages.
///
/// `None` means the catalog script has not published anything yet, which is
/// a normal state rather than an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovieCatalog {
    movies: Option<Arc<Vec<Movie>>>,
}

impl MovieCatalog {
    pub fn not_loaded() -> Self {
        Self::default()
    }

    pub fn loaded(movies: Vec<Movie>) -> Self {
        Self {
            movies: Some(Arc::new(movies)),
        }
    }

    /// The movie list, or `None` while it is missing or empty.
    pub fn movies(&self) -> Option<&[Movie]> {
        self.movies
            .as_deref()
            .map(Vec::as_slice)
            .filter(|m| !m.is_empty())
    }

    pub fn is_loaded(&self) -> bool {
        self.movies().is_some()
    }

    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies()?.get(id)
    }
}

/// Identity payload stored (JSON, URL-encoded once) in the session cookie.
///
/// The login flow that writes it owns the shape, so every field is optional
/// and `id` is kept as whatever JSON value it was written with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionRecord {
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub id: serde_json::Value,
    #[serde(deserialize_with = "text_or_number")]
    pub login: String,
    #[serde(deserialize_with = "text_or_number")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_from_catalog_json() {
        let json = r#"{
            "title": "Inception",
            "genre": "Sci-Fi",
            "categories": ["thriller", "akcja"],
            "year": 2010,
            "rating": "8.8",
            "imageUrl": "/img/inception.jpg",
            "description": "Sny."
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.year, "2010");
        assert_eq!(movie.rating, "8.8");
        assert_eq!(movie.image_url, "/img/inception.jpg");
        assert_eq!(movie.categories.len(), 2);
    }

    #[test]
    fn test_movie_tolerates_nulls_and_missing_fields() {
        let movie: Movie =
            serde_json::from_str(r#"{"genre":"Dramat","categories":null,"rating":null}"#).unwrap();
        assert_eq!(movie.genre, "Dramat");
        assert!(movie.categories.is_empty());
        assert!(!movie.is_listed());

        let movie: Movie =
            serde_json::from_str(r#"{"title":"Ida","categories":["historyczny",null,2013]}"#)
                .unwrap();
        assert_eq!(movie.categories, vec!["historyczny", "2013"]);
        assert!(movie.is_listed());
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let movie = Movie::new("Inception", "Sci-Fi", &["Thriller"]);
        assert!(movie.matches("incep"));
        assert!(movie.matches("sci"));
        assert!(movie.matches("thrill"));
        assert!(!movie.matches("comedy"));
    }

    #[test]
    fn test_empty_catalog_counts_as_not_loaded() {
        assert!(!MovieCatalog::not_loaded().is_loaded());
        assert!(!MovieCatalog::loaded(Vec::new()).is_loaded());

        let catalog = MovieCatalog::loaded(vec![Movie::new("Amelie", "Romance", &[])]);
        assert!(catalog.is_loaded());
        assert_eq!(catalog.get(0).map(|m| m.title.as_str()), Some("Amelie"));
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn test_session_record_ignores_unknown_fields() {
        let record: SessionRecord =
            serde_json::from_str(r#"{"id":6,"login":"Naterek","email":"x@y.pl","role":"user"}"#)
                .unwrap();
        assert_eq!(record.id, 6);
        assert_eq!(record.login, "Naterek");
    }

    #[test]
    fn test_session_record_accepts_other_shapes() {
        let record: SessionRecord =
            serde_json::from_str(r#"{"id":"u-6","login":"Naterek"}"#).unwrap();
        assert_eq!(record.id, "u-6");
        assert_eq!(record.email, "");

        let record: SessionRecord = serde_json::from_str(r#"{"id":6,"name":"Naterek"}"#).unwrap();
        assert_eq!(record.id, 6);
        assert_eq!(record.login, "");
    }
}
