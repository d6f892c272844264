//! # Core Configuration Module
//!
//! Provides configuration management for the movie catalog core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! `CatalogConfig` holding the catalog location and the bridge
//! implementations the core needs. It validates eagerly so that a bad
//! location or a missing bridge fails at startup rather than on the first
//! request.
//!
//! ## Required Dependencies
//!
//! - `FileSystemAccess` - Reads and rewrites the catalog document
//! - `RandomSource` - Drives the random retrieval strategies
//!
//! When the `desktop-shims` feature is enabled, `TokioFileSystem` and
//! `ThreadRandomSource` are injected automatically if not provided.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CatalogConfig;
//!
//! let config = CatalogConfig::builder()
//!     .catalog_path("/srv/catalog/db.json")
//!     .build()
//!     .expect("Failed to build config");
//! ```
//!
//! Relative catalog paths are resolved by the store against the file
//! system's data directory.

use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use bridge_traits::{FileSystemAccess, RandomSource};
use std::path::PathBuf;
use std::sync::Arc;

/// Environment variable holding the catalog document location
pub const CATALOG_PATH_ENV: &str = "CATALOG_PATH";

/// Core configuration for the movie catalog.
///
/// Use [`CatalogConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CatalogConfig {
    /// Location of the JSON catalog document
    pub catalog_path: PathBuf,

    /// File system access used by the catalog store
    pub file_system: Arc<dyn FileSystemAccess>,

    /// Random choice capability used by the random strategies
    pub random_source: Arc<dyn RandomSource>,

    /// Logging settings for the host to apply at startup
    ///
    /// Nothing in the core installs them; the host passes this value to
    /// [`crate::logging::init_logging`].
    pub logging: LoggingConfig,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("catalog_path", &self.catalog_path)
            .field("file_system", &"FileSystemAccess { ... }")
            .field("random_source", &"RandomSource { ... }")
            .field("logging", &self.logging)
            .finish()
    }
}

impl CatalogConfig {
    /// Creates a new builder for constructing a `CatalogConfig`.
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::default()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads `CATALOG_PATH` (required) and the logging variables understood
    /// by [`LoggingConfig::from_env`]. Bridges fall back to the desktop
    /// defaults when the `desktop-shims` feature is enabled.
    pub fn from_env() -> Result<Self> {
        let catalog_path = std::env::var(CATALOG_PATH_ENV).map_err(|_| {
            Error::Config(format!(
                "{} is not set. Point it at the catalog JSON document.",
                CATALOG_PATH_ENV
            ))
        })?;

        Self::builder()
            .catalog_path(catalog_path)
            .logging(LoggingConfig::from_env()?)
            .build()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - Catalog path is not empty
    /// - Catalog path names a `.json` document
    pub fn validate(&self) -> Result<()> {
        if self.catalog_path.as_os_str().is_empty() {
            return Err(Error::Config("Catalog path cannot be empty".to_string()));
        }

        let is_json = self
            .catalog_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if !is_json {
            return Err(Error::Config(format!(
                "Catalog path must point to a .json document, got {}",
                self.catalog_path.display()
            )));
        }

        Ok(())
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn file_system_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "FileSystemAccess".to_string(),
        message: "FileSystemAccess implementation is required to read and write the catalog. \
                 Desktop: enable the 'desktop-shims' feature to use TokioFileSystem. \
                 Tests: inject an in-memory implementation."
            .to_string(),
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn random_source_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "RandomSource".to_string(),
        message: "RandomSource implementation is required for random movie picks. \
                 Desktop: enable the 'desktop-shims' feature to use ThreadRandomSource. \
                 Tests: inject FixedRandomSource or a seeded source."
            .to_string(),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_file_system() -> Result<Arc<dyn FileSystemAccess>> {
    use bridge_desktop::TokioFileSystem;

    let fs: Arc<dyn FileSystemAccess> = Arc::new(TokioFileSystem::new());
    Ok(fs)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_file_system() -> Result<Arc<dyn FileSystemAccess>> {
    Err(file_system_missing_error())
}

#[cfg(feature = "desktop-shims")]
fn provide_default_random_source() -> Result<Arc<dyn RandomSource>> {
    use bridge_desktop::ThreadRandomSource;

    let random: Arc<dyn RandomSource> = Arc::new(ThreadRandomSource);
    Ok(random)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_random_source() -> Result<Arc<dyn RandomSource>> {
    Err(random_source_missing_error())
}

/// Builder for constructing [`CatalogConfig`] instances.
#[derive(Default)]
pub struct CatalogConfigBuilder {
    catalog_path: Option<PathBuf>,
    file_system: Option<Arc<dyn FileSystemAccess>>,
    random_source: Option<Arc<dyn RandomSource>>,
    logging: Option<LoggingConfig>,
}

impl CatalogConfigBuilder {
    /// Sets the catalog document location.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_runtime::config::CatalogConfig;
    ///
    /// let builder = CatalogConfig::builder()
    ///     .catalog_path("/srv/catalog/db.json");
    /// ```
    pub fn catalog_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Sets the file system implementation.
    pub fn file_system(mut self, fs: Arc<dyn FileSystemAccess>) -> Self {
        self.file_system = Some(fs);
        self
    }

    /// Sets the random source implementation.
    pub fn random_source(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random_source = Some(random);
        self
    }

    /// Sets the logging configuration.
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Builds the final `CatalogConfig` instance.
    ///
    /// # Returns
    ///
    /// Returns `Ok(CatalogConfig)` on success, or an error if:
    /// - The catalog path is missing or invalid
    /// - A required bridge is missing and no desktop default is available
    pub fn build(self) -> Result<CatalogConfig> {
        let catalog_path = self.catalog_path.ok_or_else(|| {
            Error::Config("Catalog path is required. Use .catalog_path() to set it.".to_string())
        })?;

        let file_system = match self.file_system {
            Some(fs) => fs,
            None => provide_default_file_system()?,
        };

        let random_source = match self.random_source {
            Some(random) => random,
            None => provide_default_random_source()?,
        };

        let config = CatalogConfig {
            catalog_path,
            file_system,
            random_source,
            logging: self.logging.unwrap_or_default(),
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use async_trait::async_trait;
    use bridge_traits::error::Result as BridgeResult;
    use bridge_traits::{BridgeError, FixedRandomSource};
    use std::path::Path;

    // Minimal file system for builder tests; never touched by I/O here
    struct NullFileSystem;

    #[async_trait]
    impl FileSystemAccess for NullFileSystem {
        async fn get_data_directory(&self) -> BridgeResult<PathBuf> {
            Ok(PathBuf::from("/data"))
        }

        async fn create_dir_all(&self, _path: &Path) -> BridgeResult<()> {
            Ok(())
        }

        async fn read_file(&self, _path: &Path) -> BridgeResult<bytes::Bytes> {
            Err(BridgeError::NotAvailable("read_file".to_string()))
        }

        async fn write_file(&self, _path: &Path, _data: bytes::Bytes) -> BridgeResult<()> {
            Err(BridgeError::NotAvailable("write_file".to_string()))
        }
    }

    fn builder_with_bridges() -> CatalogConfigBuilder {
        CatalogConfig::builder()
            .file_system(Arc::new(NullFileSystem))
            .random_source(Arc::new(FixedRandomSource::first()))
    }

    #[test]
    fn test_builder_requires_catalog_path() {
        let result = builder_with_bridges().build();

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Catalog path is required"));
    }

    #[test]
    fn test_builder_with_all_required_fields() {
        let config = builder_with_bridges()
            .catalog_path("/srv/catalog/db.json")
            .build()
            .unwrap();

        assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog/db.json"));
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_builder_accepts_relative_path() {
        let config = builder_with_bridges()
            .catalog_path(PathBuf::from("data/db.json"))
            .build()
            .unwrap();

        assert!(config.catalog_path.is_relative());
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let result = builder_with_bridges().catalog_path("").build();

        assert!(result
            .unwrap_err()
            .to_string()
            .contains("cannot be empty"));
    }

    #[test]
    fn test_validate_rejects_non_json_path() {
        let result = builder_with_bridges()
            .catalog_path("/srv/catalog/db.yaml")
            .build();

        assert!(result.unwrap_err().to_string().contains(".json"));
    }

    #[test]
    fn test_builder_keeps_logging_config() {
        let config = builder_with_bridges()
            .catalog_path("db.JSON")
            .logging(LoggingConfig::default().with_level(LogLevel::Debug))
            .build()
            .unwrap();

        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_builder_requires_file_system() {
        let result = CatalogConfig::builder()
            .catalog_path("/srv/catalog/db.json")
            .random_source(Arc::new(FixedRandomSource::first()))
            .build();

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("FileSystemAccess"));
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_builder_requires_random_source() {
        let result = CatalogConfig::builder()
            .catalog_path("/srv/catalog/db.json")
            .file_system(Arc::new(NullFileSystem))
            .build();

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("RandomSource"));
    }

    #[cfg(feature = "desktop-shims")]
    #[test]
    fn test_build_with_desktop_defaults() {
        let config = CatalogConfig::builder()
            .catalog_path("/srv/catalog/db.json")
            .build()
            .unwrap();

        assert_eq!(config.random_source.pick_index(0), None);
    }

    #[test]
    fn test_config_is_cloneable() {
        let config = builder_with_bridges()
            .catalog_path("/srv/catalog/db.json")
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.catalog_path, config.catalog_path);
        assert!(format!("{:?}", cloned).contains("CatalogConfig"));
    }
}
