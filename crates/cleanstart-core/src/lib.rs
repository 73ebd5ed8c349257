//! Cleanstart Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Cleanstart
//! tooling-setup CLI, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         cleanstart-cli (CLI)            │
//! │     (Prompts, spinners, reporting)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (SetupService)               │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: ConfigSource, Filesystem,    │
//! │            CommandRunner)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  cleanstart-adapters (Infrastructure)   │
//! │  (BuiltinBundles, LocalFilesystem,      │
//! │   ProcessRunner, test doubles)          │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (PackageManager, ProjectType,          │
//! │   Dependency lists, ConfigBundle)       │
//! │       No External Dependencies          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cleanstart_core::{
//!     application::SetupService,
//!     domain::{PackageManager, ProjectType},
//! };
//!
//! // Application service with injected adapters
//! let service = SetupService::new(bundles, filesystem, runner);
//! service.copy_configs(ProjectType::Node, "./".as_ref())?;
//! service.install_dependencies(PackageManager::Npm, ProjectType::Node, "./".as_ref())?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        SetupService,
        ports::{CommandOutput, CommandRunner, ConfigSource, Filesystem},
    };
    pub use crate::domain::{
        BASE_DEPENDENCIES, ConfigBundle, ConfigFile, Dependency, PackageManager, ProjectType,
        REACT_DEPENDENCIES, dependencies_for,
    };
    pub use crate::error::{CleanstartError, CleanstartResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
