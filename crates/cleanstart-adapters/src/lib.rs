//! Infrastructure adapters for Cleanstart.
//!
//! This crate implements the ports defined in
//! `cleanstart-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod bundles;
pub mod filesystem;
pub mod runner;

// Re-export commonly used adapters
pub use bundles::{BuiltinBundles, DirBundles};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use runner::{ProcessRunner, RecordingRunner};
