use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog at {path}: {message}")]
    StorageRead { path: String, message: String },

    #[error("Failed to write catalog at {path}: {message}")]
    StorageWrite { path: String, message: String },

    #[error("genres must be one of {}", .allowed.join(", "))]
    InvalidGenres {
        unknown: Vec<String>,
        allowed: Vec<String>,
    },

    #[error("Movie id space exhausted")]
    IdExhausted,

    #[error("Invalid input: {field} - {message}")]
    InvalidInput { field: String, message: String },
}

impl CatalogError {
    pub(crate) fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Whether the caller can fix the request and retry
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidGenres { .. } | Self::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
