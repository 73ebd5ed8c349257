//! On-disk config bundle source.
//!
//! Layout: one subdirectory per project type under the bundle root,
//!
//! ```text
//! <root>/
//!   node/
//!     .eslintrc.json
//!     .prettierrc
//!   react/
//!     .eslintrc.json
//!     ...
//! ```
//!
//! Files are read eagerly at resolution time so copy failures surface before
//! any file is written to the destination.

use std::path::PathBuf;

use tracing::{debug, warn};
use walkdir::WalkDir;

use cleanstart_core::{
    application::{ApplicationError, ports::ConfigSource},
    domain::{ConfigBundle, ConfigFile, DomainError, ProjectType},
    error::CleanstartResult,
};

/// Bundle source rooted at a user-supplied directory.
#[derive(Debug, Clone)]
pub struct DirBundles {
    root: PathBuf,
}

impl DirBundles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl ConfigSource for DirBundles {
    fn bundle(&self, project_type: ProjectType) -> CleanstartResult<ConfigBundle> {
        let source = self.root.join(project_type.as_str());

        if !source.is_dir() {
            return Err(ApplicationError::ConfigCopy {
                path: source,
                reason: "bundle source directory does not exist".into(),
            }
            .into());
        }

        let mut bundle = ConfigBundle::new(project_type);
        for entry in WalkDir::new(&source).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::ConfigCopy {
                path: source.clone(),
                reason: format!("Failed to walk bundle directory: {e}"),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&source)
                .map_err(|e| ApplicationError::ConfigCopy {
                    path: entry.path().to_path_buf(),
                    reason: format!("Bundle entry outside its root: {e}"),
                })?
                .to_path_buf();

            let contents = std::fs::read_to_string(entry.path()).map_err(|e| {
                ApplicationError::ConfigCopy {
                    path: entry.path().to_path_buf(),
                    reason: format!("Failed to read bundle file: {e}"),
                }
            })?;

            debug!(path = %relative.display(), "bundle file loaded");
            bundle = bundle.with_file(ConfigFile::new(relative, contents)?);
        }

        if bundle.is_empty() {
            warn!(path = %source.display(), "bundle directory exists but contains no files");
            return Err(DomainError::NoBundleForProjectType {
                project_type: project_type.to_string(),
            }
            .into());
        }

        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn seed_bundle_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let node = dir.path().join("node");
        fs::create_dir_all(node.join("ci")).unwrap();
        fs::write(node.join(".eslintrc.json"), "{}").unwrap();
        fs::write(node.join("ci/lint.yml"), "jobs: {}").unwrap();
        dir
    }

    #[test]
    fn walks_nested_files_with_relative_paths() {
        let dir = seed_bundle_dir();
        let source = DirBundles::new(dir.path());

        let bundle = source.bundle(ProjectType::Node).unwrap();
        let mut paths: Vec<String> = bundle
            .files()
            .iter()
            .map(|f| f.path().to_string())
            .collect();
        paths.sort();
        assert_eq!(paths, vec![".eslintrc.json", "ci/lint.yml"]);
    }

    #[test]
    fn missing_project_type_directory_is_copy_error() {
        let dir = seed_bundle_dir();
        let source = DirBundles::new(dir.path());

        let err = source.bundle(ProjectType::React).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn empty_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("node")).unwrap();
        let source = DirBundles::new(dir.path());

        assert!(source.bundle(ProjectType::Node).is_err());
    }
}
