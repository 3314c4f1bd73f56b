//! Unified error type hierarchy for GPU Bench
//!
//! Provides structured error handling with ValidationError, CatalogError,
//! ConfigError, and AppError.

use std::io;
use thiserror::Error;

/// Record admission and identifier parsing errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Record is not a JSON object")]
    NotAnObject,

    #[error("Record name is missing or not a string")]
    MissingName,

    #[error("Record name is empty")]
    EmptyName,

    #[error("Score field '{0}' is missing")]
    MissingScore(String),

    #[error("Score field '{0}' is not numeric")]
    NonNumericScore(String),

    #[error("Score field '{0}' is negative")]
    NegativeScore(String),

    #[error("Score field '{0}' is not a whole number")]
    NonIntegerScore(String),

    #[error("Score field '{0}' is out of range")]
    ScoreOutOfRange(String),

    #[error("Unknown form factor: {0}")]
    UnknownFormFactor(String),

    #[error("Unknown score type: {0}")]
    UnknownScoreType(String),

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Unknown brand: {0}")]
    UnknownBrand(String),

    #[error("Unknown sort order: {0}")]
    UnknownSortOrder(String),
}

/// External catalog loading errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid JSON in catalog: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Catalog root must be an object keyed by brand")]
    InvalidLayout,

    #[error("Catalog entries for brand '{0}' must be an array")]
    InvalidBrandSection(String),

    #[error("IO error during catalog operations: {0}")]
    IoError(#[from] io::Error),
}

/// Configuration file parsing and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid TOML in config: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error("Config serialization failed: {0}")]
    SerializeFailed(#[from] toml::ser::Error),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("IO error during config operations: {0}")]
    IoError(#[from] io::Error),
}

/// Global error type surfaced to the UI
///
/// Startup problems that do not stop the app (a broken settings file, an
/// unreadable extra catalog) are kept as `AppError`s and shown as dismissable
/// warnings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Catalog could not be assembled
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Settings load or validate error
    #[error("Settings error: {0}")]
    Settings(String),

    /// Logging pipeline could not start
    #[error("Logging error: {0}")]
    Logging(String),
}

impl AppError {
    /// Get a user-facing error message suitable for UI display
    pub fn user_message(&self) -> String {
        match self {
            AppError::Catalog(msg) => format!("Extra GPU catalog was not loaded: {}", msg),
            AppError::Settings(msg) => format!("Settings ignored, using defaults: {}", msg),
            AppError::Logging(msg) => format!("Logging unavailable: {}", msg),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        AppError::Catalog(e.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Settings(e.to_string())
    }
}
