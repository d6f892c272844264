//! # Query Helpers
//!
//! Filtering and ranking primitives shared by the retrieval strategies.
//!
//! ## Duration window
//!
//! A requested duration matches every movie whose runtime lies in the
//! inclusive band `[duration - 10, duration + 10]`. The tolerance is fixed.
//!
//! ## Genre ranking
//!
//! A movie's relevance to a genre query is its overlap count: how many of
//! its genres appear in the requested set. Ranking sorts by overlap count,
//! highest first, with a stable sort so ties keep catalog order.

use std::cmp::Reverse;

use crate::models::Movie;

/// Tolerance in minutes on either side of a requested duration
pub const DURATION_TOLERANCE: f64 = 10.0;

/// Inclusive runtime band around a requested duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationWindow {
    min: f64,
    max: f64,
}

impl DurationWindow {
    pub fn around(duration: f64) -> Self {
        Self {
            min: duration - DURATION_TOLERANCE,
            max: duration + DURATION_TOLERANCE,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, runtime: f64) -> bool {
        runtime >= self.min && runtime <= self.max
    }

    /// Movies without a numeric runtime never match
    pub fn matches(&self, movie: &Movie) -> bool {
        movie
            .runtime_minutes()
            .is_some_and(|runtime| self.contains(runtime))
    }
}

/// A set of requested genres
#[derive(Debug, Clone, Copy)]
pub struct GenreQuery<'a> {
    genres: &'a [String],
}

impl<'a> GenreQuery<'a> {
    pub fn new(genres: &'a [String]) -> Self {
        Self { genres }
    }

    /// Number of the movie's genres found in the query
    pub fn overlap(&self, movie: &Movie) -> usize {
        movie
            .genres()
            .iter()
            .filter(|genre| self.genres.contains(genre))
            .count()
    }

    /// Whether the movie shares at least one genre with the query
    pub fn matches(&self, movie: &Movie) -> bool {
        self.genres
            .iter()
            .any(|genre| movie.genres().contains(genre))
    }

    /// Sort movies by descending overlap, keeping catalog order on ties
    pub fn rank(&self, movies: &mut [Movie]) {
        movies.sort_by_cached_key(|movie| Reverse(self.overlap(movie)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieCandidate;

    fn movie(id: u64, genres: &[&str], runtime: &str) -> Movie {
        Movie::new(
            id,
            MovieCandidate {
                title: format!("Movie {}", id),
                year: "2000".to_string(),
                runtime: runtime.to_string(),
                genres: genres.iter().map(|g| g.to_string()).collect(),
                director: "Someone".to_string(),
                ..Default::default()
            },
        )
    }

    fn genres(names: &[&str]) -> Vec<String> {
        names.iter().map(|g| g.to_string()).collect()
    }

    #[test]
    fn test_duration_window_is_inclusive() {
        let window = DurationWindow::around(100.0);
        assert_eq!(window.min(), 90.0);
        assert_eq!(window.max(), 110.0);

        assert!(window.contains(90.0));
        assert!(window.contains(100.0));
        assert!(window.contains(110.0));
        assert!(!window.contains(89.9));
        assert!(!window.contains(111.0));
    }

    #[test]
    fn test_duration_window_matches_movies() {
        let window = DurationWindow::around(100.0);
        assert!(window.matches(&movie(1, &["A"], "95")));
        assert!(!window.matches(&movie(2, &["A"], "80")));
        assert!(!window.matches(&movie(3, &["A"], "")));
        assert!(!window.matches(&movie(4, &["A"], "unknown")));
    }

    #[test]
    fn test_overlap_and_matches() {
        let requested = genres(&["A", "B", "C"]);
        let query = GenreQuery::new(&requested);

        assert_eq!(query.overlap(&movie(1, &["A", "D"], "90")), 1);
        assert_eq!(query.overlap(&movie(2, &["A", "B", "C", "D"], "90")), 3);
        assert_eq!(query.overlap(&movie(3, &["D"], "90")), 0);

        assert!(query.matches(&movie(1, &["D", "C"], "90")));
        assert!(!query.matches(&movie(3, &["D"], "90")));
    }

    #[test]
    fn test_rank_is_stable() {
        let requested = genres(&["A", "B"]);
        let query = GenreQuery::new(&requested);
        let mut movies = vec![
            movie(1, &["A"], "90"),
            movie(2, &["A", "B"], "90"),
            movie(3, &["B"], "90"),
            movie(4, &["A", "B"], "90"),
            movie(5, &["A"], "90"),
        ];

        query.rank(&mut movies);

        let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let requested: Vec<String> = vec![];
        let query = GenreQuery::new(&requested);
        assert!(!query.matches(&movie(1, &["A"], "90")));
    }
}
