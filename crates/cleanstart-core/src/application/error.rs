//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.
//!
//! The run recognizes exactly two fatal failure kinds: config copy failures
//! and dependency install failures. Neither is retried or recovered.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Config copy failed: source bundle missing/unreadable, or a
    /// destination write failed. Files already copied stay in place.
    #[error("Config copy failed at {path}: {reason}")]
    ConfigCopy { path: PathBuf, reason: String },

    /// A dependency install subprocess failed (non-zero exit, or the
    /// package-manager executable was not found). Installs after the
    /// failing one are never started.
    #[error("Failed to install '{package}': {detail}")]
    DependencyInstall { package: String, detail: String },

    /// A subprocess could not be spawned at all.
    #[error("Failed to run '{program}': {reason}")]
    CommandSpawn { program: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigCopy { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions in the target directory".into(),
                "If you passed --bundle-dir, check the directory exists and is readable".into(),
            ],
            Self::DependencyInstall { package, .. } => vec![
                format!("The install command for '{}' failed", package),
                "Packages installed before the failure remain installed".into(),
                "Check the captured output above, then re-run to continue".into(),
            ],
            Self::CommandSpawn { program, .. } => vec![
                format!("Could not execute '{}'", program),
                "Ensure the package manager is installed and in your PATH".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigCopy { .. } => ErrorCategory::Internal,
            Self::DependencyInstall { .. } => ErrorCategory::Internal,
            Self::CommandSpawn { .. } => ErrorCategory::Internal,
        }
    }
}
