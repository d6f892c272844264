//! Core service façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (filesystem and
//! randomness) into the catalog core and exposes the query dispatcher that
//! routes each fetch to a retrieval strategy. Desktop apps typically enable
//! the `desktop-shims` feature (which depends on `bridge-desktop`) so that
//! missing bridges are filled in with the native defaults.

pub mod error;

pub use error::{CoreError, Result};

use std::sync::Arc;

use core_catalog::{
    CatalogMovieRepository, FetchConditions, JsonCatalogStore, Movie, MovieCandidate,
    MovieRepository,
};
use core_runtime::config::CatalogConfig;
use tracing::{debug, info};

/// Query dispatcher exposed to host applications.
///
/// Holds no state besides the repository handle. Creation is not
/// serialized: hosts must not issue concurrent `create` calls against the
/// same catalog.
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn MovieRepository>,
}

impl CatalogService {
    /// Create a new service over the provided repository.
    pub fn new(repository: Arc<dyn MovieRepository>) -> Self {
        Self { repository }
    }

    /// Fetch movies, picking the strategy from the supplied conditions.
    ///
    /// - `genres` present: every movie sharing a genre, ranked by overlap and
    ///   narrowed to the duration window when `duration` is also present
    /// - only `duration` present: one random movie from the duration window
    /// - otherwise: one random movie from the whole catalog
    pub async fn fetch(&self, conditions: Option<&FetchConditions>) -> Result<Vec<Movie>> {
        let duration = conditions.and_then(|c| c.duration);
        let genres = conditions.and_then(|c| c.genres.as_deref());

        let movies = match (genres, duration) {
            (Some(genres), duration) => {
                debug!(strategy = "genres", "Dispatching fetch");
                self.repository.fetch_by_genres(genres, duration).await?
            }
            (None, Some(duration)) => {
                debug!(strategy = "duration", "Dispatching fetch");
                self.repository.fetch_by_duration(duration).await?
            }
            (None, None) => {
                debug!(strategy = "random", "Dispatching fetch");
                self.repository.fetch_random().await?
            }
        };

        Ok(movies)
    }

    /// Append a movie to the catalog.
    ///
    /// Only the genre vocabulary is checked here; use [`submit`] for
    /// untrusted payloads.
    ///
    /// [`submit`]: CatalogService::submit
    pub async fn create(&self, candidate: MovieCandidate) -> Result<Movie> {
        Ok(self.repository.save(candidate).await?)
    }

    /// Validate an incoming payload, then create it.
    pub async fn submit(&self, candidate: MovieCandidate) -> Result<Movie> {
        candidate.validate()?;
        self.create(candidate).await
    }
}

/// Wire a JSON-backed catalog from a validated configuration.
///
/// `config.logging` is left to the host; call
/// [`core_runtime::logging::init_logging`] once before bootstrapping.
///
/// ```no_run
/// # fn example() -> core_service::Result<()> {
/// use core_runtime::config::CatalogConfig;
/// use core_service::bootstrap;
///
/// let config = CatalogConfig::builder()
///     .catalog_path("/srv/catalog/db.json")
///     .build()?;
/// let service = bootstrap(config)?;
/// # Ok(())
/// # }
/// ```
pub fn bootstrap(config: CatalogConfig) -> Result<CatalogService> {
    config
        .validate()
        .map_err(|err| CoreError::InitializationFailed(err.to_string()))?;

    let store = JsonCatalogStore::new(config.file_system.clone(), config.catalog_path.clone());
    let repository = CatalogMovieRepository::new(Arc::new(store), config.random_source.clone());

    info!(path = ?config.catalog_path, "Catalog service ready");
    Ok(CatalogService::new(Arc::new(repository)))
}

/// Build the configuration from the environment and bootstrap it.
///
/// See [`CatalogConfig::from_env`] for the variables read. Logging is not
/// installed here: hosts that want the environment's logging settings pass
/// `config.logging` to [`core_runtime::logging::init_logging`] themselves.
pub fn bootstrap_from_env() -> Result<CatalogService> {
    let config = CatalogConfig::from_env()?;
    bootstrap(config)
}
