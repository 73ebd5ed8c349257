//! Setup Service - main application orchestrator.
//!
//! This service implements the two mutating phases of a run:
//! 1. Copy the config bundle for the chosen project type into the target
//!    directory (overwriting collisions, no rollback on failure).
//! 2. Install the dev-dependency list, one subprocess per package,
//!    sequentially, aborting on the first failure.
//!
//! The caller (the CLI) sequences the phases; a copy failure means the
//! installer is never reached.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, ConfigSource, Filesystem},
    },
    domain::{Dependency, PackageManager, ProjectType, dependencies_for},
    error::CleanstartResult,
};

/// Result of the config-copy phase: every file written, in bundle order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub files: Vec<PathBuf>,
}

/// Result of the install phase: every dependency installed, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub installed: Vec<Dependency>,
}

/// Main setup service.
///
/// Orchestrates bundle resolution, file writing, and package installation
/// through the driven ports.
pub struct SetupService {
    bundles: Box<dyn ConfigSource>,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
}

impl SetupService {
    /// Create a new setup service with the given adapters.
    pub fn new(
        bundles: Box<dyn ConfigSource>,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            bundles,
            filesystem,
            runner,
        }
    }

    /// Copy the config bundle for `project_type` into `dest`.
    ///
    /// Relative paths inside the bundle are preserved; existing files are
    /// overwritten so a second run in the same directory succeeds. Any I/O
    /// error aborts immediately - files already written stay in place.
    #[instrument(skip_all, fields(project_type = %project_type, dest = %dest.display()))]
    pub fn copy_configs(
        &self,
        project_type: ProjectType,
        dest: &Path,
    ) -> CleanstartResult<CopyReport> {
        let bundle = self.bundles.bundle(project_type)?;
        info!(files = bundle.len(), "Config bundle resolved");

        let mut written = Vec::with_capacity(bundle.len());
        for file in bundle.files() {
            let target = dest.join(file.path());

            if let Some(parent) = target.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&target, file.contents())?;

            debug!(path = %target.display(), "Config file written");
            written.push(target);
        }

        info!(count = written.len(), "Config copy completed");
        Ok(CopyReport { files: written })
    }

    /// Install the dev-dependency list for `project_type` via `manager`.
    ///
    /// One subprocess per package, sequential, bound to `cwd`. The loop
    /// short-circuits on the first failure: packages after it are never
    /// started, packages before it remain installed.
    #[instrument(skip_all, fields(manager = %manager, project_type = %project_type))]
    pub fn install_dependencies(
        &self,
        manager: PackageManager,
        project_type: ProjectType,
        cwd: &Path,
    ) -> CleanstartResult<InstallReport> {
        let deps = dependencies_for(project_type);
        info!(count = deps.len(), "Installing dev dependencies");

        for dep in &deps {
            let args = manager.dev_install_args(dep);
            debug!(package = %dep, "Running install command");

            let output = self
                .runner
                .run(manager.program(), &args, cwd)
                .map_err(|e| ApplicationError::DependencyInstall {
                    package: dep.spec(),
                    detail: e.to_string(),
                })?;

            if !output.success() {
                return Err(ApplicationError::DependencyInstall {
                    package: dep.spec(),
                    detail: output.detail().to_string(),
                }
                .into());
            }

            info!(package = %dep, "Installed");
        }

        Ok(InstallReport { installed: deps })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
