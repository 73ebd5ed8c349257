//! Config bundles: the static file sets copied into the target project.
//!
//! A bundle is copied verbatim - no templating, no variable substitution.
//! Paths inside a bundle are relative; the copier joins them onto the
//! destination directory.

use std::fmt;
use std::path::{Path, PathBuf};

use super::error::DomainError;
use super::value_objects::ProjectType;

/// A filesystem path guaranteed to be relative.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or("")
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// One file inside a config bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    path: RelativePath,
    contents: String,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            path: RelativePath::try_new(path)?,
            contents: contents.into(),
        })
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// The ordered file set for one project type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBundle {
    project_type: ProjectType,
    files: Vec<ConfigFile>,
}

impl ConfigBundle {
    pub fn new(project_type: ProjectType) -> Self {
        Self {
            project_type,
            files: Vec::new(),
        }
    }

    /// Builder-style append, preserving insertion order.
    pub fn with_file(mut self, file: ConfigFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn files(&self) -> &[ConfigFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
