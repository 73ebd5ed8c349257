//! Phase spinners for the copy and install phases.
//!
//! Wraps `indicatif` so command code only deals with start / succeed / fail.
//! The spinner draws to stderr; when stderr is not a terminal (or quiet mode
//! is on) nothing animates and only the final line is printed through the
//! [`OutputManager`].

use std::io::{self, IsTerminal};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::output::OutputManager;

/// A spinner covering one phase of the run.
pub struct PhaseSpinner {
    bar: Option<ProgressBar>,
}

impl PhaseSpinner {
    /// Start a spinner with the given message.
    ///
    /// Disabled (no animation, no output) when quiet mode is on or stderr is
    /// not a terminal; the succeed/fail line still goes through the
    /// `OutputManager`.
    pub fn start(message: &str, out: &OutputManager) -> Self {
        let animate =
            !out.is_quiet() && out.supports_color() && std::io::stderr().is_terminal();

        if !animate {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("static spinner template is valid"),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar: Some(bar) }
    }

    /// Update the message while the phase runs (e.g. the current package).
    pub fn update(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.to_string());
        }
    }

    /// Stop the spinner and print a success line.
    pub fn succeed(self, message: &str, out: &OutputManager) -> io::Result<()> {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
        out.success(message)
    }

    /// Stop the spinner and print a failure line.
    pub fn fail(self, message: &str, out: &OutputManager) -> io::Result<()> {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
        out.error(message)
    }
}
