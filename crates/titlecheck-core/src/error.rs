//! Error types and exit codes for titlecheck
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, empty title)
//! - 3: Artifact error (missing or corrupt corpus, vectorizer or classifier)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the titlecheck CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or blank input (2)
    Usage = 2,
    /// Artifact error - corpus, vectorizer or classifier could not be loaded (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during titlecheck operations
#[derive(Error, Debug)]
pub enum TitlecheckError {
    // Usage errors (exit code 2)
    #[error("title must not be empty")]
    EmptyInput,

    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Artifact errors (exit code 3)
    #[error("failed to load {artifact} from {path:?}: {reason}")]
    ArtifactLoad {
        artifact: String,
        path: PathBuf,
        reason: String,
    },

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

impl TitlecheckError {
    /// Create an error for an artifact that could not be loaded
    pub fn artifact_load(
        artifact: &str,
        path: impl Into<PathBuf>,
        reason: impl std::fmt::Display,
    ) -> Self {
        TitlecheckError::ArtifactLoad {
            artifact: artifact.to_string(),
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TitlecheckError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed_operation(operation: &str, reason: impl std::fmt::Display) -> Self {
        TitlecheckError::FailedOperation {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error should be surfaced as a warning rather than a failure
    pub fn is_warning(&self) -> bool {
        matches!(self, TitlecheckError::EmptyInput)
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TitlecheckError::EmptyInput
            | TitlecheckError::UnknownFormat(_)
            | TitlecheckError::DuplicateFormat
            | TitlecheckError::UsageError(_)
            | TitlecheckError::InvalidValue { .. } => ExitCode::Usage,

            TitlecheckError::ArtifactLoad { .. } => ExitCode::Data,

            TitlecheckError::Io(_)
            | TitlecheckError::Json(_)
            | TitlecheckError::Toml(_)
            | TitlecheckError::FailedOperation { .. }
            | TitlecheckError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TitlecheckError::EmptyInput => "empty_input",
            TitlecheckError::UnknownFormat(_) => "unknown_format",
            TitlecheckError::DuplicateFormat => "duplicate_format",
            TitlecheckError::UsageError(_) => "usage_error",
            TitlecheckError::InvalidValue { .. } => "invalid_value",
            TitlecheckError::ArtifactLoad { .. } => "artifact_load",
            TitlecheckError::Io(_) => "io_error",
            TitlecheckError::Json(_) => "json_error",
            TitlecheckError::Toml(_) => "toml_error",
            TitlecheckError::FailedOperation { .. } => "failed_operation",
            TitlecheckError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let TitlecheckError::ArtifactLoad { artifact, path, .. } = self {
            error_obj["artifact"] = serde_json::json!(artifact);
            error_obj["path"] = serde_json::json!(path.display().to_string());
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for titlecheck operations
pub type Result<T> = std::result::Result<T, TitlecheckError>;
