//! Error types for gammasweep-ui

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a [`PreferenceStore`](crate::store::PreferenceStore).
///
/// These never reach the page: the theme controller logs them and keeps
/// working from memory.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file is not valid JSON
    #[error("preference file is not valid json: {0}")]
    Json(#[from] serde_json::Error),

    /// Backing file parsed, but the top level is not an object
    #[error("preference file {0} does not hold a json object")]
    NotAnObject(PathBuf),
}

/// Errors raised while validating a [`LandingConfig`](crate::config::LandingConfig).
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Scroll threshold must be a finite, non-negative pixel count
    #[error("invalid scroll threshold: {0}")]
    InvalidScrollThreshold(f64),

    /// Storage key must not be empty
    #[error("storage key must not be empty")]
    EmptyStorageKey,

    /// Window dimensions must be positive
    #[error("invalid window size: {width}x{height}")]
    InvalidWindowSize { width: f64, height: f64 },
}

/// Result alias for preference storage
pub type StoreResult<T> = std::result::Result<T, StoreError>;
