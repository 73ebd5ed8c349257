//! Interactive prompts (compiled with the default `interactive` feature).
//!
//! Both prompts are single-select lists with a default: the selection is
//! structurally restricted to the presented choices, so no further input
//! validation exists. Esc or `q` cancels the run.

#[cfg(feature = "interactive")]
use dialoguer::{Select, console::Term};

use cleanstart_core::domain::{PackageManager, ProjectType};

use crate::error::{CliError, CliResult};

/// Ask `What is your package manager?` — npm/yarn, default npm.
#[cfg(feature = "interactive")]
pub fn select_package_manager() -> CliResult<PackageManager> {
    let choices = [PackageManager::Npm, PackageManager::Yarn];
    let items: Vec<&str> = choices.iter().map(|c| c.as_str()).collect();

    let selection = Select::new()
        .with_prompt("What is your package manager?")
        .items(&items)
        .default(0)
        .interact_on_opt(&Term::stderr())
        .map_err(prompt_error)?;

    match selection {
        Some(index) => Ok(choices[index]),
        None => Err(CliError::Cancelled),
    }
}

/// Ask `What is your project type?` — node/react, default node.
#[cfg(feature = "interactive")]
pub fn select_project_type() -> CliResult<ProjectType> {
    let choices = ProjectType::all();
    let items: Vec<&str> = choices.iter().map(|c| c.as_str()).collect();

    let selection = Select::new()
        .with_prompt("What is your project type?")
        .items(&items)
        .default(0)
        .interact_on_opt(&Term::stderr())
        .map_err(prompt_error)?;

    match selection {
        Some(index) => Ok(choices[index]),
        None => Err(CliError::Cancelled),
    }
}

#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> CliError {
    let dialoguer::Error::IO(io_err) = err;
    CliError::IoError {
        message: "prompt failed".into(),
        source: io_err,
    }
}

// Non-interactive builds: the setup command surfaces a FeatureNotAvailable
// error before these are reached; the stubs keep call-sites feature-free.

#[cfg(not(feature = "interactive"))]
pub fn select_package_manager() -> CliResult<PackageManager> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
pub fn select_project_type() -> CliResult<ProjectType> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
