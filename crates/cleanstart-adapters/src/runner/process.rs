//! Subprocess runner using std::process.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use cleanstart_core::{
    application::{ApplicationError, ports::{CommandOutput, CommandRunner}},
    error::CleanstartResult,
};

/// Production command runner.
///
/// Each `run` spawns one subprocess bound to the given working directory and
/// waits for it to exit, capturing stdout and stderr. Nothing is streamed;
/// captured output is only surfaced when an install fails.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> CleanstartResult<CommandOutput> {
        debug!(program, ?args, cwd = %cwd.display(), "spawning");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| ApplicationError::CommandSpawn {
                program: program.to_string(),
                reason: e.to_string(),
            })?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
