//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use cleanstart_core::domain::{PackageManager, ProjectType};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cleanstart",
    bin_name = "cleanstart",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant clean-code tooling setup",
    long_about = "Cleanstart copies a lint/format config bundle into the \
                  current directory and installs the matching pinned dev \
                  dependencies with your package manager.",
    after_help = "EXAMPLES:\n\
        \x20 cleanstart                      # fully interactive setup\n\
        \x20 cleanstart setup --package-manager yarn --project-type react\n\
        \x20 cleanstart setup --dry-run\n\
        \x20 cleanstart list --project-type react\n\
        \x20 cleanstart completions bash > /usr/share/bash-completion/completions/cleanstart",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.  Omitted entirely, the tool runs the
    /// interactive setup workflow (the original single-entry-point shape).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Copy configs and install dev dependencies.
    #[command(
        visible_alias = "s",
        about = "Copy config files and install dev dependencies",
        after_help = "EXAMPLES:\n\
            \x20 cleanstart setup\n\
            \x20 cleanstart setup --package-manager npm --project-type node\n\
            \x20 cleanstart setup --skip-install\n\
            \x20 cleanstart setup --bundle-dir ./my-bundles"
    )]
    Setup(SetupArgs),

    /// List the dev dependencies that would be installed.
    #[command(
        visible_alias = "ls",
        about = "List the pinned dev-dependency sets",
        after_help = "EXAMPLES:\n\
            \x20 cleanstart list\n\
            \x20 cleanstart list --project-type react\n\
            \x20 cleanstart list --format json"
    )]
    List(ListArgs),

    /// Initialise a Cleanstart configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 cleanstart init           # default location\n\
            \x20 cleanstart init --local   # local config in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cleanstart completions bash > ~/.local/share/bash-completion/completions/cleanstart\n\
            \x20 cleanstart completions zsh  > ~/.zfunc/_cleanstart\n\
            \x20 cleanstart completions fish > ~/.config/fish/completions/cleanstart.fish"
    )]
    Completions(CompletionsArgs),
}

// ── setup ─────────────────────────────────────────────────────────────────────

/// Arguments for `cleanstart setup`.
#[derive(Debug, Args, Default)]
pub struct SetupArgs {
    /// Package manager to install with.  Skips the prompt when given.
    #[arg(
        short = 'p',
        long = "package-manager",
        value_name = "MANAGER",
        value_enum,
        help = "Package manager (npm or yarn)"
    )]
    pub package_manager: Option<PackageManagerArg>,

    /// Project type.  Skips the prompt when given.
    #[arg(
        short = 't',
        long = "project-type",
        value_name = "TYPE",
        value_enum,
        help = "Project type (node or react)"
    )]
    pub project_type: Option<ProjectTypeArg>,

    /// Accept the defaults (npm, node) for any unanswered prompt.
    #[arg(short = 'y', long = "yes", help = "Accept defaults without prompting")]
    pub yes: bool,

    /// Describe what would be copied and installed without doing either.
    #[arg(long = "dry-run", help = "Show what would be done without doing it")]
    pub dry_run: bool,

    /// Copy config files only; do not run the package manager.
    #[arg(long = "skip-install", help = "Copy configs but skip dependency installation")]
    pub skip_install: bool,

    /// Use an on-disk bundle directory instead of the built-in bundles.
    /// Layout: one subdirectory per project type (`node/`, `react/`).
    #[arg(
        long = "bundle-dir",
        value_name = "DIR",
        help = "Directory holding custom config bundles"
    )]
    pub bundle_dir: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `cleanstart list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Limit output to one project type.
    #[arg(
        short = 't',
        long = "project-type",
        value_enum,
        help = "Filter by project type"
    )]
    pub project_type: Option<ProjectTypeArg>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable sections.
    Table,
    /// One spec per line.
    List,
    /// JSON object keyed by project type.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `cleanstart init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Write to `.cleanstart.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cleanstart completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Package manager choice, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PackageManagerArg {
    Npm,
    Yarn,
}

impl From<PackageManagerArg> for PackageManager {
    fn from(arg: PackageManagerArg) -> Self {
        match arg {
            PackageManagerArg::Npm => PackageManager::Npm,
            PackageManagerArg::Yarn => PackageManager::Yarn,
        }
    }
}

/// Project type choice, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProjectTypeArg {
    Node,
    React,
}

impl From<ProjectTypeArg> for ProjectType {
    fn from(arg: ProjectTypeArg) -> Self {
        match arg {
            ProjectTypeArg::Node => ProjectType::Node,
            ProjectTypeArg::React => ProjectType::React,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
