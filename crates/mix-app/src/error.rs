//! Error types for the mix-app service layer.

use std::path::PathBuf;

use mix_design::{DesignError, ErrorKind};

/// Unified error for CLI and other frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Design file error: {0}")]
    Project(String),

    #[error("Failed to read design file: {path}")]
    DesignFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write design file: {path}")]
    DesignFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported design file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Design file validation failed: {0}")]
    Validation(String),

    #[error("Unknown exposure condition: {0}")]
    UnknownExposure(String),

    #[error("Mix design failed: {message}")]
    Design { kind: ErrorKind, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<mix_project::ProjectError> for AppError {
    fn from(err: mix_project::ProjectError) -> Self {
        match err {
            mix_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<DesignError> for AppError {
    fn from(err: DesignError) -> Self {
        AppError::Design {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
