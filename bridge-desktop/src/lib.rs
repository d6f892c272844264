//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! - `FileSystemAccess` using `tokio::fs`
//! - `RandomSource` using the thread-local `rand` generator, plus a seeded
//!   variant for reproducible runs
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{ThreadRandomSource, TokioFileSystem};
//! use std::sync::Arc;
//!
//! let fs = Arc::new(TokioFileSystem::new());
//! let random = Arc::new(ThreadRandomSource);
//! // Hand both to `CatalogConfig::builder()`
//! ```

mod filesystem;
mod random;

pub use filesystem::TokioFileSystem;
pub use random::{SeededRandomSource, ThreadRandomSource};
