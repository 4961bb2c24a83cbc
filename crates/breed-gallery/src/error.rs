//! Error types for the breed gallery
//!
//! Provides error handling for:
//! - Loading the breed collection (status, transport, decode)
//! - Reading gallery configuration

use std::path::PathBuf;

/// Errors while loading the breed collection
///
/// The `Display` text is what the error panel shows verbatim.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Resource answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status {
        /// Status code of the response
        status: u16,
    },

    /// Resource could not be reached at all
    #[error("failed to fetch {path}: {source}")]
    Transport {
        /// Requested resource path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Body is not a JSON array of breed records
    #[error("invalid JSON in {path}: {source}")]
    Decode {
        /// Requested resource path
        path: PathBuf,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Create status error
    #[inline]
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Create transport error for path
    pub fn transport(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Transport {
            path: path.into(),
            source,
        }
    }

    /// Create decode error for path
    pub fn decode(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// Status code carried by the error, if it came from a response
    #[inline]
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// Errors while reading gallery configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during config read
    #[error("io error reading {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected shape
    #[error("invalid config in {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Result type alias for load operations
pub type LoadResult<T> = Result<T, LoadError>;
