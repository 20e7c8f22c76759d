//! Error types for the remote.it CLI

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for remoteit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("No host IP provided and device '{alias}' has no last known IP")]
    UnresolvedTarget { alias: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid status from server: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration and credential errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("API key not provided. Pass --apikey or set REMOTEIT_APIKEY.")]
    MissingApiKey,

    #[error("Token not provided and no cached login found. Run `remoteit login` first.")]
    MissingToken,

    #[error("Username not provided. Pass it as an argument or set REMOTEIT_USERNAME.")]
    MissingUsername,

    #[error("Password not provided")]
    MissingPassword,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Local store errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine home directory")]
    NoHome,

    #[error("Record not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Storage error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Wrap an I/O error, mapping "not found" to [`StorageError::NotFound`]
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            StorageError::NotFound(path)
        } else {
            StorageError::Io { path, source }
        }
    }
}
