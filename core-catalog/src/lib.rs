//! # Movie Catalog Module
//!
//! Owns the persisted movie catalog and provides repository patterns for
//! retrieving and appending movies.
//!
//! ## Overview
//!
//! This module manages:
//! - The catalog document (genre vocabulary plus movie records)
//! - JSON persistence through the platform file system bridge
//! - Random, duration-bounded and genre-ranked retrieval
//! - Validated creation with sequential ids

pub mod error;
pub mod models;
pub mod query;
pub mod repositories;
pub mod store;

pub use error::{CatalogError, Result};
pub use models::{CatalogDocument, FetchConditions, Movie, MovieCandidate};
pub use repositories::{CatalogMovieRepository, MovieRepository};
pub use store::{CatalogStore, JsonCatalogStore};
