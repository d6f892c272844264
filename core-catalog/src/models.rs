//! Domain models for the movie catalog
//!
//! This module contains the persisted catalog document, movie records and
//! the shapes callers hand to the catalog (candidates and fetch conditions).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::error::{CatalogError, Result};

/// Maximum length of free-text headline fields
pub const MAX_TEXT_LENGTH: usize = 255;

// =============================================================================
// Catalog Document
// =============================================================================

/// The full persisted catalog: genre vocabulary plus movie records
///
/// Keys other than `genres` and `movies` are kept in `extra` so that a
/// read/write cycle leaves them untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Controlled genre vocabulary
    pub genres: Vec<String>,
    /// Movie records in creation order
    pub movies: Vec<Movie>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogDocument {
    pub fn new(genres: Vec<String>, movies: Vec<Movie>) -> Self {
        Self {
            genres,
            movies,
            extra: Map::new(),
        }
    }

    /// Genres referenced by `genres` that are missing from the vocabulary
    pub fn unknown_genres<'a>(&self, genres: &'a [String]) -> Vec<&'a String> {
        genres
            .iter()
            .filter(|genre| !self.genres.contains(genre))
            .collect()
    }

    /// Identifier the next created movie receives
    ///
    /// Ids are strictly increasing, so this is one past the largest id. An
    /// empty catalog starts at 1. Returns `None` once the largest id is
    /// `u64::MAX`.
    pub fn next_id(&self) -> Option<u64> {
        match self.movies.iter().map(|movie| movie.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }
}

// =============================================================================
// Movies
// =============================================================================

/// A movie as submitted for creation, before an id is assigned
///
/// Missing fields deserialize as empty; [`validate`](Self::validate) decides
/// whether that is acceptable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MovieCandidate {
    pub title: String,
    /// Release year as a numeric string
    pub year: String,
    /// Runtime in minutes as a numeric string
    pub runtime: String,
    pub genres: Vec<String>,
    pub director: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MovieCandidate {
    /// Validate the payload shape
    ///
    /// Checks field presence and format only. Genre membership in the
    /// vocabulary is checked by the repository against the stored catalog.
    pub fn validate(&self) -> Result<()> {
        check_text("title", &self.title)?;

        if !is_numeric_string(&self.year) {
            return Err(CatalogError::invalid_input(
                "year",
                "year must be a number string",
            ));
        }

        if !is_numeric_string(&self.runtime) {
            return Err(CatalogError::invalid_input(
                "runtime",
                "runtime must be a number string",
            ));
        }

        if self.genres.is_empty() {
            return Err(CatalogError::invalid_input(
                "genres",
                "genres should not be empty",
            ));
        }

        let has_duplicates = self
            .genres
            .iter()
            .enumerate()
            .any(|(i, genre)| self.genres[..i].contains(genre));
        if has_duplicates {
            return Err(CatalogError::invalid_input(
                "genres",
                "All genres's elements must be unique",
            ));
        }

        check_text("director", &self.director)?;

        if let Some(poster_url) = &self.poster_url {
            let valid = Url::parse(poster_url)
                .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
                .unwrap_or(false);
            if !valid {
                return Err(CatalogError::invalid_input(
                    "posterUrl",
                    "posterUrl must be a URL address",
                ));
            }
        }

        Ok(())
    }
}

fn check_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::invalid_input(
            field,
            format!("{} should not be empty", field),
        ));
    }

    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(CatalogError::invalid_input(
            field,
            format!(
                "{} must be shorter than or equal to {} characters",
                field, MAX_TEXT_LENGTH
            ),
        ));
    }

    Ok(())
}

/// Optional sign, digits, at most one decimal point, ending in a digit
fn is_numeric_string(value: &str) -> bool {
    let digits = value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value);

    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => ("", digits),
    };

    !fraction.is_empty()
        && fraction.chars().all(|c| c.is_ascii_digit())
        && whole.chars().all(|c| c.is_ascii_digit())
}

/// A stored movie record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique, strictly increasing identifier
    pub id: u64,
    #[serde(flatten)]
    pub details: MovieCandidate,
}

impl Movie {
    /// Build a record, dropping any `id` key the payload carried
    pub fn new(id: u64, mut details: MovieCandidate) -> Self {
        details.extra.remove("id");
        Self { id, details }
    }

    pub fn title(&self) -> &str {
        &self.details.title
    }

    pub fn genres(&self) -> &[String] {
        &self.details.genres
    }

    /// Runtime in minutes, if the stored string is a finite number
    pub fn runtime_minutes(&self) -> Option<f64> {
        self.details
            .runtime
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|minutes| minutes.is_finite())
    }
}

// =============================================================================
// Queries
// =============================================================================

/// Conditions a caller may attach to a fetch
///
/// Which fields are present decides the retrieval strategy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FetchConditions {
    /// Target runtime in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Requested genres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
}

impl FetchConditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = Some(genres.into_iter().map(Into::into).collect());
        self
    }
}
