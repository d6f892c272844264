//! # Repository Pattern Implementation
//!
//! Repository traits and implementations over the catalog store.
//!
//! ## Architecture
//!
//! - Traits define the interface for each repository
//! - Implementations load the whole catalog document from a `CatalogStore`
//!   per call, operate on that transient copy, and write it back in full
//! - All operations return `Result<T>` for error handling
//!
//! ## Available Repositories
//!
//! - `MovieRepository` - Random, duration-bounded and genre-ranked retrieval,
//!   plus the validated append-and-save write path

pub mod movie;

pub use movie::{CatalogMovieRepository, MovieRepository};
