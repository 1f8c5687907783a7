use thiserror::Error;

/// All the ways things can go wrong in the explorer core
///
/// None of these are fatal. Transport errors become a retry banner,
/// storage errors are logged and swallowed at the favorites boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport failure: {0}")]
    TransportError(String),

    #[error("Storage operation failed: {0}")]
    StorageError(#[from] recipe_explorer_store::StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<recipe_explorer_api::ApiError> for Error {
    fn from(err: recipe_explorer_api::ApiError) -> Self {
        Error::TransportError(err.to_string())
    }
}
