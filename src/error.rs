//! Error types for geobrief

use thiserror::Error;

use crate::client::models::DecodeError;

/// Result type alias for geobrief operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Country '{0}' is not in the cached country list. Run `geobrief countries` to see known names.")]
    UnknownCountry(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Remote provider errors.
///
/// Non-success HTTP statuses are not errors: clients report them as an absent
/// payload. Only transport failures and missing credentials end up here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No API key configured for the {0} provider. Run `geobrief init` to set one.")]
    MissingApiKey(&'static str),

    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to provider".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}. Run `geobrief init` to create one.")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Cache storage errors
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Could not determine a cache directory for this user")]
    NoHome,

    #[error("No cached payload for {0}")]
    NotFound(String),

    #[error("Cache I/O error: {0}")]
    Io(String),

    #[error("Cache index error: {0}")]
    Database(String),
}

impl From<rusqlite::Error> for CacheError {
    fn from(err: rusqlite::Error) -> Self {
        CacheError::Database(err.to_string())
    }
}

/// Errors surfaced by a collector's `read`.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("No cached data for {0} yet")]
    CacheMissing(String),

    #[error("Cached data for {key} is malformed: {source}")]
    Decode {
        key: String,
        #[source]
        source: DecodeError,
    },

    #[error(transparent)]
    Storage(CacheError),
}
