//! Config bundle sources.
//!
//! Two implementations of the `ConfigSource` port:
//!
//! - [`BuiltinBundles`] - the file sets that ship inside the binary. This is
//!   the default; the tool works with no files on disk besides itself.
//! - [`DirBundles`] - an on-disk bundle root with one subdirectory per
//!   project type, for users who maintain their own config sets
//!   (`--bundle-dir`).

pub mod builtin;
pub mod dir;

pub use builtin::BuiltinBundles;
pub use dir::DirBundles;
