//! Catalog store trait and JSON file implementation
//!
//! The store owns the on-disk representation of the catalog. Every read
//! re-parses the whole document and every write replaces it in full; there
//! is no cache and no partial update.

use async_trait::async_trait;
use bridge_traits::storage::FileSystemAccess;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::models::CatalogDocument;

/// Catalog store interface
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Load the full catalog document
    ///
    /// # Errors
    /// Returns `StorageRead` if the medium is unreadable or the content is
    /// not a well-formed catalog document
    async fn read(&self) -> Result<CatalogDocument>;

    /// Replace the stored catalog with `document`
    ///
    /// A failed write leaves the previous content in an undefined state.
    ///
    /// # Errors
    /// Returns `StorageWrite` on serialization or I/O failure
    async fn write(&self, document: &CatalogDocument) -> Result<()>;
}

/// Catalog stored as a pretty-printed JSON document
///
/// Relative paths are resolved against the file system's data directory.
pub struct JsonCatalogStore {
    fs: Arc<dyn FileSystemAccess>,
    path: PathBuf,
}

impl JsonCatalogStore {
    /// Create a new JSON catalog store
    pub fn new(fs: Arc<dyn FileSystemAccess>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    /// Configured location, as given
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn resolve_path(&self) -> std::result::Result<PathBuf, String> {
        if self.path.is_absolute() {
            return Ok(self.path.clone());
        }

        let data_dir = self
            .fs
            .get_data_directory()
            .await
            .map_err(|e| e.to_string())?;
        Ok(data_dir.join(&self.path))
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

#[async_trait]
impl CatalogStore for JsonCatalogStore {
    async fn read(&self) -> Result<CatalogDocument> {
        let read_error = |message: String| CatalogError::StorageRead {
            path: self.display_path(),
            message,
        };

        let path = self.resolve_path().await.map_err(read_error)?;
        let data = self
            .fs
            .read_file(&path)
            .await
            .map_err(|e| read_error(e.to_string()))?;

        let document: CatalogDocument =
            serde_json::from_slice(&data).map_err(|e| read_error(e.to_string()))?;

        debug!(
            path = ?path,
            genres = document.genres.len(),
            movies = document.movies.len(),
            "Loaded catalog"
        );
        Ok(document)
    }

    async fn write(&self, document: &CatalogDocument) -> Result<()> {
        let write_error = |message: String| CatalogError::StorageWrite {
            path: self.display_path(),
            message,
        };

        let path = self.resolve_path().await.map_err(write_error)?;
        let data = serde_json::to_vec_pretty(document).map_err(|e| write_error(e.to_string()))?;
        let size = data.len();

        self.fs
            .write_file(&path, Bytes::from(data))
            .await
            .map_err(|e| write_error(e.to_string()))?;

        debug!(path = ?path, size, movies = document.movies.len(), "Saved catalog");
        Ok(())
    }
}
