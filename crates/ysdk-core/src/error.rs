//! Error types for the SDK adapter

use thiserror::Error;

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, Error>;

/// SDK adapter error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Exception raised or promise rejected by the platform SDK
    #[error("Platform error: {0}")]
    PlatformError(String),

    /// Fullscreen ad could not be shown because the device is offline
    #[error("offline")]
    Offline,

    /// Every ad callback was dropped before any of them fired
    #[error("Ad callbacks dropped without an outcome")]
    AdAborted,

    /// The SDK script could not be loaded
    #[error("Script load failed: {0}")]
    ScriptLoadError(String),

    /// A required browser object is missing
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
