//! Custom error types for triage.
//!
//! Most file-level failures in this crate are recovered locally by the
//! store collaborator; the error type covers what remains.

use thiserror::Error;

/// Main error type for triage operations
#[derive(Error, Debug)]
pub enum TriageError {
    /// Strategy analysis map lacks a key the fallback branch needs
    #[error("Analysis results missing key: {key}")]
    MissingAnalysisKey { key: String },

    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error wrapper
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TriageError {
    /// Create a missing-analysis-key error
    pub fn missing_analysis_key(key: impl Into<String>) -> Self {
        Self::MissingAnalysisKey { key: key.into() }
    }
}

/// Type alias for triage results
pub type Result<T> = std::result::Result<T, TriageError>;
