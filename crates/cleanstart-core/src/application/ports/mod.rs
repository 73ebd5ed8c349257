//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `cleanstart-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ConfigBundle, ProjectType};
use crate::error::CleanstartResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cleanstart_adapters::filesystem::LocalFilesystem` (production)
/// - `cleanstart_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Writes overwrite existing files; the copier relies on this for
///   idempotent re-runs
/// - There is deliberately no `remove` operation - copy failures never
///   roll back files already written
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CleanstartResult<()>;

    /// Write content to a file, overwriting if it exists.
    fn write_file(&self, path: &Path, contents: &str) -> CleanstartResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for resolving the config bundle for a project type.
///
/// Implemented by:
/// - `cleanstart_adapters::bundles::BuiltinBundles` (embedded file sets)
/// - `cleanstart_adapters::bundles::DirBundles` (on-disk bundle root)
pub trait ConfigSource: Send + Sync {
    /// The bundle to copy for a project type.
    fn bundle(&self, project_type: ProjectType) -> CleanstartResult<ConfigBundle>;
}

/// Captured result of a finished subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, if the process exited normally.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Stderr if non-empty, otherwise stdout - the most useful stream to
    /// show a user when an install fails.
    pub fn detail(&self) -> &str {
        if self.stderr.trim().is_empty() {
            self.stdout.trim()
        } else {
            self.stderr.trim()
        }
    }
}

/// Port for running external commands.
///
/// Implemented by:
/// - `cleanstart_adapters::runner::ProcessRunner` (production)
/// - `cleanstart_adapters::runner::RecordingRunner` (testing)
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, bound to `cwd`, waiting for exit and
    /// capturing output. A spawn failure (e.g. executable not found) is an
    /// `Err`; a non-zero exit is an `Ok` with `success() == false`.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> CleanstartResult<CommandOutput>;
}
