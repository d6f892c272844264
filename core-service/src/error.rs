use core_catalog::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Core initialization failed: {0}")]
    InitializationFailed(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] core_runtime::Error),
}

impl CoreError {
    /// Whether the failure was caused by the caller's request
    ///
    /// Storage, configuration and initialization failures are server-side.
    pub fn is_client_error(&self) -> bool {
        match self {
            CoreError::Catalog(err) => err.is_validation(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        let err = CoreError::from(CatalogError::InvalidGenres {
            unknown: vec!["fake".to_string()],
            allowed: vec!["a".to_string(), "b".to_string()],
        });
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "genres must be one of a, b");

        let err = CoreError::from(CatalogError::InvalidInput {
            field: "title".to_string(),
            message: "title should not be empty".to_string(),
        });
        assert!(err.is_client_error());
    }

    #[test]
    fn test_server_errors() {
        let err = CoreError::from(CatalogError::StorageRead {
            path: "/srv/db.json".to_string(),
            message: "unreadable".to_string(),
        });
        assert!(!err.is_client_error());

        let err = CoreError::from(core_runtime::Error::Config("bad path".to_string()));
        assert!(!err.is_client_error());

        assert!(!CoreError::InitializationFailed("boom".to_string()).is_client_error());
    }
}
