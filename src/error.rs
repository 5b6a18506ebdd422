//! Error types for svn-look
//!
//! All modules use `LookResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for svn-look operations
pub type LookResult<T> = Result<T, LookError>;

/// All errors that can occur while querying a repository
#[derive(Error, Debug)]
pub enum LookError {
    // Process errors
    #[error("Failed to run {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed: {command}, exit code: {code}")]
    CommandFailed { command: String, code: i32 },

    #[error("Process terminated by signal: {command}")]
    ProcessSignaled { command: String },

    // Output errors
    #[error("Unexpected output from svnlook {query}: {detail}")]
    ParseAnomaly { query: String, detail: String },

    #[error("svnlook {found} is too old, {required} or newer is required")]
    UnsupportedVersion {
        found: semver::Version,
        required: semver::Version,
    },

    #[error("Could not parse svnlook version: {0}")]
    VersionUnparseable(String),

    // Argument errors
    #[error("A revision and a transaction cannot both be selected")]
    SelectorConflict,

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LookError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a spawn failure error
    pub fn spawn_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::SpawnFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a parse anomaly error for a query
    pub fn parse(query: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::ParseAnomaly {
            query: query.into(),
            detail: detail.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::SpawnFailed { .. } => {
                Some("Install Subversion or set [svnlook] program in the config file")
            }
            Self::UnsupportedVersion { .. } => Some("Upgrade Subversion to a newer release"),
            Self::SelectorConflict => Some("Pass either -r REV or -t TXN, not both"),
            _ => None,
        }
    }
}
