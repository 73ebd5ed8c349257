//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! phases of a run: "copy configs" and "install dev dependencies".

pub mod setup_service;

pub use setup_service::{CopyReport, InstallReport, SetupService};
