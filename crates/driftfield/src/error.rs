//! # Engine Error Types
//!
//! The running engine never surfaces errors to its host. These types exist
//! for the edges: loading configuration and talking to host services.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by host collaborators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The container is not attached to a live surface.
    #[error("container is detached")]
    Detached,

    /// The event source refused to register a listener.
    #[error("listener registration refused: {0}")]
    Refused(String),
}

/// Errors from configuration loading and host setup.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for [`EngineConfig`](crate::EngineConfig).
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// A host service failed.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Result type for engine setup operations.
pub type EngineResult<T> = Result<T, EngineError>;
