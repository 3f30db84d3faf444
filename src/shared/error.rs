use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a model that was
/// extracted cleanly, one that carries failed configurations, and a run
/// where the extraction mechanism itself broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - model extracted (failed configurations are recorded as data)
    Success = 0,
    /// At least one configuration failed to resolve and the caller asked to fail on it
    ResolutionFailures = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (snapshot unreadable, transport failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ResolutionFailures => write!(f, "Resolution Failures (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for model extraction.
///
/// Only failures of the extraction mechanism itself end up here. A
/// configuration that cannot be resolved is recorded on the model instead.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Build snapshot not found: {path}\n\n💡 Hint: {suggestion}")]
    SnapshotNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse build snapshot: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the snapshot is valid YAML or JSON")]
    SnapshotParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Tooling connection failed in {project_dir}\nDetails: {details}\n\n💡 Hint: Check that the helper program is installed and can build the model for this project")]
    Transport { project_dir: PathBuf, details: String },

    #[error("Failed to decode model: {details}\n\n💡 Hint: The model was produced by an incompatible version or the stream was truncated")]
    ModelDecode { details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
