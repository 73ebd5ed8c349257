use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Unknown package manager '{name}'")]
    UnknownPackageManager { name: String },

    #[error("Unknown project type '{name}'")]
    UnknownProjectType { name: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("No config bundle for project type '{project_type}'")]
    NoBundleForProjectType { project_type: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownPackageManager { name } => vec![
                format!("'{}' is not a supported package manager", name),
                "Supported package managers: npm, yarn".into(),
            ],
            Self::UnknownProjectType { name } => vec![
                format!("'{}' is not a supported project type", name),
                "Supported project types: node, react".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("Bundle entry uses an absolute path: {}", path),
                "Config bundle paths must be relative to the target directory".into(),
            ],
            Self::NoBundleForProjectType { project_type } => vec![
                format!("No config files are bundled for '{}'", project_type),
                "Check the bundle directory layout (one subdirectory per project type)".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownPackageManager { .. }
            | Self::UnknownProjectType { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::NoBundleForProjectType { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
