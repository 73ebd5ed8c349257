//! Recording command runner for testing.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use cleanstart_core::{
    application::ports::{CommandOutput, CommandRunner},
    error::CleanstartResult,
};

/// One recorded `run` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Test runner that records every invocation instead of spawning anything.
///
/// By default every call succeeds with empty output; `failing_at` scripts a
/// non-zero exit for the Nth call (0-based) so tests can assert the
/// short-circuit-on-first-failure behavior.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    invocations: Arc<Mutex<Vec<Invocation>>>,
    fail_at: Option<usize>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a failure (exit status 1) for the call at `index`.
    pub fn failing_at(index: usize) -> Self {
        Self {
            invocations: Arc::default(),
            fail_at: Some(index),
        }
    }

    /// Everything recorded so far, in call order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> CleanstartResult<CommandOutput> {
        let mut invocations = self.invocations.lock().unwrap();
        let index = invocations.len();
        invocations.push(Invocation {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
        });

        if self.fail_at == Some(index) {
            return Ok(CommandOutput {
                status: Some(1),
                stdout: String::new(),
                stderr: format!("{program} exited with status 1"),
            });
        }

        Ok(CommandOutput {
            status: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}
