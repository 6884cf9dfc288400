//! Error handling for add-on publishing
//!
//! This module provides the error taxonomy for the sign-and-upload
//! pipeline using the thiserror crate for ergonomic error handling.

use thiserror::Error;

/// Main error type for add-on publishing operations
#[derive(Error, Debug)]
pub enum PublishError {
    // Manifest errors
    #[error("Invalid manifest {path}: {message}")]
    Manifest { path: String, message: String },

    // Package file errors
    #[error("Failed to read package {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Token errors
    #[error("Token signing failed: {message}")]
    Signing { message: String },

    // Upload errors
    #[error("{status_text}: {message}")]
    Rejected { status_text: String, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl PublishError {
    /// Check if this error is recoverable by rerunning the pipeline step
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Rejected { .. })
    }

    /// Get error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Manifest { .. } => "MANIFEST_ERROR",
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::Signing { .. } => "SIGNING_ERROR",
            Self::Rejected { .. } => "UPLOAD_REJECTED",
            Self::Network(_) => "NETWORK_ERROR",
        }
    }
}
