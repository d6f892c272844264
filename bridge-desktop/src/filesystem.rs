//! File System Access Implementation using Tokio

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    storage::FileSystemAccess,
};
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Tokio-based file system implementation
///
/// Whole-file reads and writes through `tokio::fs`, rooted at a platform
/// data directory for relative catalog locations.
pub struct TokioFileSystem {
    data_dir: PathBuf,
}

impl TokioFileSystem {
    /// Create a new file system accessor with the default data directory
    pub fn new() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".local")
                    .join("share")
            })
            .join("movie-catalog");

        Self { data_dir }
    }

    /// Create a new file system accessor with a custom data directory
    pub fn with_data_directory(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn map_io_error(e: std::io::Error) -> BridgeError {
        BridgeError::Io(e)
    }
}

impl Default for TokioFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileSystemAccess for TokioFileSystem {
    async fn get_data_directory(&self) -> Result<PathBuf> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir)
                .await
                .map_err(Self::map_io_error)?;
            debug!(path = ?self.data_dir, "Created data directory");
        }
        Ok(self.data_dir.clone())
    }

    async fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .await
            .map_err(Self::map_io_error)?;
        debug!(path = ?path, "Created directory");
        Ok(())
    }

    async fn read_file(&self, path: &Path) -> Result<Bytes> {
        let data = fs::read(path).await.map_err(Self::map_io_error)?;
        debug!(path = ?path, size = data.len(), "Read file");
        Ok(Bytes::from(data))
    }

    async fn write_file(&self, path: &Path, data: Bytes) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent).await?;
        }

        fs::write(path, data.as_ref())
            .await
            .map_err(Self::map_io_error)?;
        debug!(path = ?path, size = data.len(), "Wrote file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_custom_data_directory() {
        let temp = tempfile::tempdir().unwrap();
        let data = temp.path().join("nested").join("data");
        let fs = TokioFileSystem::with_data_directory(data.clone());

        let data_dir = fs.get_data_directory().await.unwrap();
        assert_eq!(data_dir, data);
        assert!(data.is_dir());
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let temp = tempfile::tempdir().unwrap();
        let fs = TokioFileSystem::with_data_directory(temp.path().to_path_buf());
        let test_file = temp.path().join("sub").join("catalog.json");

        let data = Bytes::from("{\"genres\":[],\"movies\":[]}");
        fs.write_file(&test_file, data.clone()).await.unwrap();

        let read_data = fs.read_file(&test_file).await.unwrap();
        assert_eq!(data, read_data);
    }

    #[tokio::test]
    async fn test_write_replaces_content() {
        let temp = tempfile::tempdir().unwrap();
        let fs = TokioFileSystem::with_data_directory(temp.path().to_path_buf());
        let test_file = temp.path().join("catalog.json");

        fs.write_file(&test_file, Bytes::from("first, longer content"))
            .await
            .unwrap();
        fs.write_file(&test_file, Bytes::from("second")).await.unwrap();

        let read_data = fs.read_file(&test_file).await.unwrap();
        assert_eq!(read_data, Bytes::from("second"));
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let fs = TokioFileSystem::with_data_directory(temp.path().to_path_buf());

        let result = fs.read_file(&temp.path().join("missing.json")).await;
        assert!(matches!(result, Err(BridgeError::Io(_))));
    }
}
