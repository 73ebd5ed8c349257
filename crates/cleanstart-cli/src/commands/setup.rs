//! Implementation of the `cleanstart setup` command — the whole workflow.
//!
//! Responsibility: resolve the two choices (flags, config defaults, or
//! prompts), then drive the core setup service phase by phase:
//! prompt → copy configs → install dependencies → report. A phase failure
//! aborts the run; later phases are never reached.

use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info, instrument};

use cleanstart_adapters::{BuiltinBundles, DirBundles, LocalFilesystem, ProcessRunner};
use cleanstart_core::{
    application::{SetupService, ports::ConfigSource},
    domain::{Dependency, PackageManager, ProjectType, dependencies_for},
};

use crate::{
    cli::{SetupArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
    progress::PhaseSpinner,
    prompt,
};

/// Execute the `cleanstart setup` command.
///
/// Dispatch sequence:
/// 1. Resolve package manager and project type (flag → default → prompt)
/// 2. Resolve the bundle source and destination directory
/// 3. Early-exit if `--dry-run`
/// 4. Copy phase (spinner)
/// 5. Install phase (spinner), unless `--skip-install`
/// 6. Report the installed dependency list
#[instrument(skip_all)]
pub fn execute(
    args: SetupArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve choices. Both are immutable for the rest of the run.
    // Quiet mode cannot prompt, so it behaves like --yes.
    let assume_defaults = args.yes || global.quiet;
    let manager = resolve_package_manager(&args, &config, assume_defaults)?;
    let project_type = resolve_project_type(&args, &config, assume_defaults)?;

    debug!(
        manager = %manager,
        project_type = %project_type,
        dry_run = args.dry_run,
        skip_install = args.skip_install,
        "Choices resolved"
    );

    // 2. Destination is always the invocation directory.
    let dest =
        std::env::current_dir().with_cli_context(|| "Failed to resolve current directory")?;
    let bundles = bundle_source(&args, &config);

    // 3. Dry run: describe but do not write or install.
    if args.dry_run {
        return dry_run(bundles.as_ref(), manager, project_type, &dest, &output);
    }

    let service = SetupService::new(
        bundles,
        Box::new(LocalFilesystem::new()),
        Box::new(ProcessRunner::new()),
    );

    // 4. Copy phase.
    let spinner = PhaseSpinner::start("Copying config files", &output);
    let copied = match service.copy_configs(project_type, &dest) {
        Ok(report) => {
            spinner.succeed("Config files copied!", &output)?;
            report
        }
        Err(e) => {
            spinner.fail("Error while copying config files!", &output)?;
            return Err(e.into());
        }
    };
    info!(files = copied.files.len(), "Copy phase complete");

    if args.skip_install {
        output.info(&format!(
            "Skipped dependency installation ({} config files copied)",
            copied.files.len()
        ))?;
        return Ok(());
    }

    // 5. Install phase. The targeted list is computed here as well so the
    // reporter prints exactly what the installer was given.
    let deps = dependencies_for(project_type);
    let spinner = PhaseSpinner::start("Installing dev dependencies", &output);
    spinner.update(&format!(
        "Installing {} dev dependencies with {}",
        deps.len(),
        manager
    ));

    let report = match service.install_dependencies(manager, project_type, &dest) {
        Ok(report) => {
            spinner.succeed("Dev dependencies installed!", &output)?;
            report
        }
        Err(e) => {
            spinner.fail("Error while installing dev dependencies!", &output)?;
            return Err(e.into());
        }
    };
    info!(count = report.installed.len(), "Install phase complete");

    // 6. Reporter.
    print_report(&report.installed, &output)?;

    Ok(())
}

// ── Choice resolution ─────────────────────────────────────────────────────────

/// Flag beats config default beats prompt. `assume_defaults` (from `--yes`
/// or `--quiet`) answers any unanswered prompt with the configured (or
/// built-in) default.
fn resolve_package_manager(
    args: &SetupArgs,
    config: &AppConfig,
    assume_defaults: bool,
) -> CliResult<PackageManager> {
    if let Some(flag) = args.package_manager {
        return Ok(flag.into());
    }

    let configured = parse_default(
        config.defaults.package_manager.as_deref(),
        PackageManager::from_str,
        "defaults.package_manager",
    )?;

    if assume_defaults {
        return Ok(configured.unwrap_or_default());
    }
    prompt::select_package_manager()
}

fn resolve_project_type(
    args: &SetupArgs,
    config: &AppConfig,
    assume_defaults: bool,
) -> CliResult<ProjectType> {
    if let Some(flag) = args.project_type {
        return Ok(flag.into());
    }

    let configured = parse_default(
        config.defaults.project_type.as_deref(),
        ProjectType::from_str,
        "defaults.project_type",
    )?;

    if assume_defaults {
        return Ok(configured.unwrap_or_default());
    }
    prompt::select_project_type()
}

/// Parse an optional config-file default, surfacing bad values as config
/// errors rather than silently falling back.
fn parse_default<T, E>(
    raw: Option<&str>,
    parse: impl FnOnce(&str) -> Result<T, E>,
    key: &str,
) -> CliResult<Option<T>>
where
    E: std::error::Error + Send + Sync + 'static,
{
    match raw {
        None => Ok(None),
        Some(value) => parse(value).map(Some).map_err(|e| CliError::ConfigError {
            message: format!("Invalid value '{value}' for {key}"),
            source: Some(Box::new(e)),
        }),
    }
}

// ── Bundle source selection ───────────────────────────────────────────────────

/// `--bundle-dir` (or the config file's `bundles.dir`) selects the on-disk
/// source; otherwise the bundles embedded in the binary are used.
fn bundle_source(args: &SetupArgs, config: &AppConfig) -> Box<dyn ConfigSource> {
    match args.bundle_dir.as_ref().or(config.bundles.dir.as_ref()) {
        Some(dir) => Box::new(DirBundles::new(dir)),
        None => Box::new(BuiltinBundles::new()),
    }
}

// ── Dry run ───────────────────────────────────────────────────────────────────

fn dry_run(
    bundles: &dyn ConfigSource,
    manager: PackageManager,
    project_type: ProjectType,
    dest: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    // Bundle resolution still runs so a broken --bundle-dir fails here too.
    let bundle = bundles.bundle(project_type)?;
    let deps = dependencies_for(project_type);

    output.info(&format!(
        "Dry run: would copy {} config files into {}",
        bundle.len(),
        dest.display(),
    ))?;
    for file in bundle.files() {
        output.print(&format!("  {}", file.path()))?;
    }

    output.info(&format!(
        "Would install {} dev dependencies with {}:",
        deps.len(),
        manager,
    ))?;
    for dep in &deps {
        output.print(&format!("  {dep}"))?;
    }

    Ok(())
}

// ── Reporter ──────────────────────────────────────────────────────────────────

/// Print the list of installed dependencies and the closing banner.
///
/// Pure output: always the same list the installer was given, nothing else.
fn print_report(installed: &[Dependency], output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.header("-----[ Installed dev dependencies ]-----")?;
    output.print("")?;
    for line in report_lines(installed) {
        output.print(&line)?;
    }
    Ok(())
}

/// The body of the report: one line per installed spec, then the banner.
fn report_lines(installed: &[Dependency]) -> Vec<String> {
    let mut lines: Vec<String> = installed.iter().map(|dep| format!("\t{dep}")).collect();
    lines.push(String::new());
    lines.push("\tCLEAN CODING JOURNEY BEGINS!".into());
    lines.push(String::new());
    lines
}

// ── Tests ─────────────────────────────────────────────────────────────────────
