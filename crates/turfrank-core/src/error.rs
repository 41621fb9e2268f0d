//! Error types and exit codes for turfrank
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (turf not found, invalid store, bad artifacts)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the turfrank CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing turf, invalid store or artifacts (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during turfrank operations
#[derive(Error, Debug)]
pub enum TurfRankError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("turf not found: {id}")]
    TurfNotFound { id: String },

    #[error("invalid store {path:?}: {reason}")]
    InvalidStore { path: PathBuf, reason: String },

    #[error("invalid artifact {name}: {reason}")]
    InvalidArtifact { name: String, reason: String },

    #[error("feature width {actual} does not match model input width {expected}")]
    ArtifactMismatch { expected: usize, actual: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl TurfRankError {
    /// Create an error for a turf absent from the store
    pub fn turf_not_found(id: impl Into<String>) -> Self {
        TurfRankError::TurfNotFound { id: id.into() }
    }

    /// Create an error for a malformed or unreadable fitted artifact
    pub fn invalid_artifact(name: &str, reason: impl std::fmt::Display) -> Self {
        TurfRankError::InvalidArtifact {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed operation with context
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        TurfRankError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TurfRankError::UnknownFormat(_) | TurfRankError::UsageError(_) => ExitCode::Usage,

            TurfRankError::TurfNotFound { .. }
            | TurfRankError::InvalidStore { .. }
            | TurfRankError::InvalidArtifact { .. }
            | TurfRankError::ArtifactMismatch { .. } => ExitCode::Data,

            TurfRankError::Io(_)
            | TurfRankError::Json(_)
            | TurfRankError::Toml(_)
            | TurfRankError::FailedOperation { .. }
            | TurfRankError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in structured output
    fn error_type(&self) -> &'static str {
        match self {
            TurfRankError::UnknownFormat(_) => "unknown_format",
            TurfRankError::UsageError(_) => "usage_error",
            TurfRankError::TurfNotFound { .. } => "turf_not_found",
            TurfRankError::InvalidStore { .. } => "invalid_store",
            TurfRankError::InvalidArtifact { .. } => "invalid_artifact",
            TurfRankError::ArtifactMismatch { .. } => "artifact_mismatch",
            TurfRankError::Io(_) => "io_error",
            TurfRankError::Json(_) => "json_error",
            TurfRankError::Toml(_) => "toml_error",
            TurfRankError::FailedOperation { .. } => "failed_operation",
            TurfRankError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for turfrank operations
pub type Result<T> = std::result::Result<T, TurfRankError>;
