//! # Movie search
//!
//! Pure filtering behind the navbar search box and the listing page.
//!
//! A movie matches when the lowercase term is a substring of its lowercase
//! title, genre or any category. Results keep catalog order and carry the
//! movie's catalog position, which is also its id for the overlay, the player
//! and the watchlist.
//!
//! [`search`] maps a term onto the four things the dropdown can show:
//!
//! | Outcome | When |
//! |---------|------|
//! | [`SearchOutcome::Cleared`] | blank term: remove the dropdown |
//! | [`SearchOutcome::NotLoaded`] | the catalog has not been published yet |
//! | [`SearchOutcome::NoResults`] | nothing matched |
//! | [`SearchOutcome::Results`] | up to `limit` hits plus a link to the full listing |

use crate::models::{Movie, MovieCatalog, MovieId};

/// Path of the page listing every match for `?search=`.
pub const LISTING_PATH: &str = "/movies";
/// Path of the player page taking `?id=`.
pub const PLAYER_PATH: &str = "/player";

/// A matching movie and its catalog position.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchHit {
    pub index: MovieId,
    pub movie: Movie,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Cleared,
    NotLoaded,
    NoResults { term: String },
    Results { term: String, hits: Vec<SearchHit> },
}

impl SearchOutcome {
    /// Link to the listing page for this search, if it has a term.
    pub fn view_all_href(&self) -> Option<String> {
        match self {
            SearchOutcome::Results { term, .. } | SearchOutcome::NoResults { term } => {
                Some(listing_href(term))
            }
            SearchOutcome::Cleared | SearchOutcome::NotLoaded => None,
        }
    }
}

/// Matches for `term` in catalog order, at most `limit` of them.
pub fn filter(movies: &[Movie], term: &str, limit: usize) -> Vec<SearchHit> {
    let needle = term.to_lowercase();
    movies
        .iter()
        .enumerate()
        .filter(|(_, movie)| movie.is_listed() && movie.matches(&needle))
        .take(limit)
        .map(|(index, movie)| SearchHit {
            index,
            movie: movie.clone(),
        })
        .collect()
}

/// What the dropdown should show for `term`.
pub fn search(catalog: &MovieCatalog, term: &str, limit: usize) -> SearchOutcome {
    let term = term.trim();
    if term.is_empty() {
        return SearchOutcome::Cleared;
    }
    let Some(movies) = catalog.movies() else {
        tracing::debug!("Movies not loaded yet, cannot search for {term:?}");
        return SearchOutcome::NotLoaded;
    };
    let hits = filter(movies, term, limit);
    if hits.is_empty() {
        SearchOutcome::NoResults {
            term: term.to_string(),
        }
    } else {
        SearchOutcome::Results {
            term: term.to_string(),
            hits,
        }
    }
}

/// `/movies?search=<term>`, with the term URL-encoded.
pub fn listing_href(term: &str) -> String {
    format!("{LISTING_PATH}?search={}", urlencoding::encode(term))
}

/// `/player?id=<id>`.
pub fn player_href(id: MovieId) -> String {
    format!("{PLAYER_PATH}?id={id}")
}
