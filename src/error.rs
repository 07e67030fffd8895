//! Unified error types for the service.

use thiserror::Error as ThisError;

/// Unified error type for the service.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration validation error.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// System clock error while building the health payload.
    #[error("clock error: {0}")]
    Clock(#[from] std::time::SystemTimeError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
