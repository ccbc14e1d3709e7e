//! Error types for installer packaging operations.
//!
//! Every failure is classified by the part of the run it belongs to, so
//! callers can tell a bad configuration from a broken tool invocation.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for packager operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type for all packager operations
#[derive(Error, Debug)]
pub enum PackagerError {
    /// Caller options or merged metadata failed validation
    #[error("Invalid configuration: {reason}")]
    Configuration {
        /// Reason for the error
        reason: String,
    },

    /// No readable application manifest at either recognized location
    #[error("No application manifest found under {path}: {reason}")]
    ManifestNotFound {
        /// Application root that was searched
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// Packaging workspace could not be acquired
    #[error("Failed to create packaging workspace: {source}")]
    Workspace {
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Nuspec rendering or NuGet packaging failed
    #[error("Packaging failed: {reason}")]
    Packaging {
        /// Reason for the error
        reason: String,
    },

    /// Synchronizing the remote release feed failed
    #[error("Release sync failed: {reason}")]
    Sync {
        /// Reason for the error
        reason: String,
    },

    /// Releasify or setup finalization failed
    #[error("Setup creation failed: {reason}")]
    Release {
        /// Reason for the error
        reason: String,
    },

    /// A required Squirrel.Windows or NuGet tool was not found
    #[error("{tool} not found: {hint}")]
    ToolMissing {
        /// Tool binary name
        tool: String,
        /// How to make the tool available
        hint: String,
    },
}

impl PackagerError {
    /// Configuration error from any displayable reason
    pub fn configuration(reason: impl fmt::Display) -> Self {
        Self::Configuration {
            reason: reason.to_string(),
        }
    }

    /// Packaging error from any displayable reason
    pub fn packaging(reason: impl fmt::Display) -> Self {
        Self::Packaging {
            reason: reason.to_string(),
        }
    }

    /// Sync error from any displayable reason
    pub fn sync(reason: impl fmt::Display) -> Self {
        Self::Sync {
            reason: reason.to_string(),
        }
    }

    /// Release error from any displayable reason
    pub fn release(reason: impl fmt::Display) -> Self {
        Self::Release {
            reason: reason.to_string(),
        }
    }
}
