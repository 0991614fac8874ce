//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No accepted marker file between `start` and the filesystem root.
    #[error("Not inside a Necesse mod project (searched upward from {start})", start = .start.display())]
    NotAProjectDirectory { start: PathBuf },

    /// Marker file found but a required field or directory is missing.
    #[error("Malformed project at {path}: {reason}", path = .path.display())]
    MalformedProjectConfig { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}", path = .path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// `git init` (or another VCS) could not be run or exited non-zero.
    #[error("Version control initialization failed: {reason}")]
    VersionControlFailed { reason: String },
}

impl ApplicationError {
    /// Build a `FilesystemError` from an io error.
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::FilesystemError {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotAProjectDirectory { .. } => vec![
                "cd into your mod directory (the one containing build.gradle)".into(),
                "Or create a new mod first: modsmith new \"My Mod\"".into(),
            ],
            Self::MalformedProjectConfig { path, reason } => vec![
                format!("Inspect {}", path.display()),
                format!("Cause: {}", reason),
                "build.gradle must assign project.ext.modID = \"<id>\"".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure there is free disk space".into(),
            ],
            Self::VersionControlFailed { .. } => vec![
                "Make sure git is installed and on PATH".into(),
                "Or skip repository creation with --no-git".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotAProjectDirectory { .. } => ErrorCategory::NotFound,
            Self::MalformedProjectConfig { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::VersionControlFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
