//! Movie repository trait and implementation

use crate::error::{CatalogError, Result};
use crate::models::{Movie, MovieCandidate};
use crate::query::{DurationWindow, GenreQuery};
use crate::store::CatalogStore;
use async_trait::async_trait;
use bridge_traits::random::RandomSource;
use std::sync::Arc;
use tracing::debug;

/// Movie repository interface for retrieval and creation
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Pick one movie uniformly at random from the whole catalog
    ///
    /// # Returns
    /// - A single-element list with the picked movie
    /// - An empty list if the catalog has no movies
    async fn fetch_random(&self) -> Result<Vec<Movie>>;

    /// Pick one movie at random among those close to `duration`
    ///
    /// Candidates are movies whose runtime lies within ±10 minutes of
    /// `duration`, bounds included. Returns an empty list when none match.
    async fn fetch_by_duration(&self, duration: f64) -> Result<Vec<Movie>>;

    /// List movies sharing at least one genre with `genres`
    ///
    /// Results are ordered by overlap count, highest first; ties keep
    /// catalog order. When `duration` is given, results are further limited
    /// to the duration window. Never samples.
    async fn fetch_by_genres(
        &self,
        genres: &[String],
        duration: Option<f64>,
    ) -> Result<Vec<Movie>>;

    /// Append a new movie and persist the catalog
    ///
    /// The new movie gets `id = max(existing ids) + 1`. Reads and writes are
    /// not serialized: concurrent saves may assign the same id.
    ///
    /// # Errors
    /// Returns error if:
    /// - A genre is not in the catalog vocabulary (nothing is written)
    /// - The largest existing id is `u64::MAX` (nothing is written)
    /// - The catalog cannot be read or written
    async fn save(&self, candidate: MovieCandidate) -> Result<Movie>;
}

/// Store-backed implementation of MovieRepository
pub struct CatalogMovieRepository {
    store: Arc<dyn CatalogStore>,
    random: Arc<dyn RandomSource>,
}

impl CatalogMovieRepository {
    /// Create a new movie repository
    pub fn new(store: Arc<dyn CatalogStore>, random: Arc<dyn RandomSource>) -> Self {
        Self { store, random }
    }

    async fn read_movies(&self) -> Result<Vec<Movie>> {
        Ok(self.store.read().await?.movies)
    }

    fn pick_one(&self, mut movies: Vec<Movie>) -> Vec<Movie> {
        let len = movies.len();
        match self.random.pick_index(len).filter(|index| *index < len) {
            Some(index) => vec![movies.swap_remove(index)],
            None => Vec::new(),
        }
    }
}

#[async_trait]
impl MovieRepository for CatalogMovieRepository {
    async fn fetch_random(&self) -> Result<Vec<Movie>> {
        let movies = self.read_movies().await?;
        debug!(candidates = movies.len(), "Picking random movie");
        Ok(self.pick_one(movies))
    }

    async fn fetch_by_duration(&self, duration: f64) -> Result<Vec<Movie>> {
        let window = DurationWindow::around(duration);
        let movies: Vec<Movie> = self
            .read_movies()
            .await?
            .into_iter()
            .filter(|movie| window.matches(movie))
            .collect();

        debug!(duration, candidates = movies.len(), "Picking movie by duration");
        Ok(self.pick_one(movies))
    }

    async fn fetch_by_genres(
        &self,
        genres: &[String],
        duration: Option<f64>,
    ) -> Result<Vec<Movie>> {
        let query = GenreQuery::new(genres);
        let window = duration.map(DurationWindow::around);

        let mut movies: Vec<Movie> = self
            .read_movies()
            .await?
            .into_iter()
            .filter(|movie| query.matches(movie))
            .filter(|movie| window.map_or(true, |w| w.matches(movie)))
            .collect();

        query.rank(&mut movies);

        debug!(
            genres = ?genres,
            duration = ?duration,
            count = movies.len(),
            "Ranked movies by genres"
        );
        Ok(movies)
    }

    async fn save(&self, candidate: MovieCandidate) -> Result<Movie> {
        let mut document = self.store.read().await?;

        let unknown = document.unknown_genres(&candidate.genres);
        if !unknown.is_empty() {
            return Err(CatalogError::InvalidGenres {
                unknown: unknown.into_iter().cloned().collect(),
                allowed: document.genres.clone(),
            });
        }

        let id = document.next_id().ok_or(CatalogError::IdExhausted)?;
        let movie = Movie::new(id, candidate);
        document.movies.push(movie.clone());
        self.store.write(&document).await?;

        debug!(id = movie.id, title = %movie.title(), "Created movie");
        Ok(movie)
    }
}
