//! Core library for `crr` (CopyRenameReplace).
//!
//! Copies a file or a directory tree to a new location while applying an
//! ordered set of literal substitutions to entry names and to the text
//! content of each copied file. The library exposes the whole operation as
//! a typed API; the `crr` binary is a thin shell that maps the outcome onto
//! a process exit code.

pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod names;
pub mod output;
pub mod subst;
pub mod transcode;

pub use config::{Config, LogLevel};
pub use errors::CrrError;
pub use fs_ops::copy_rename_replace;
pub use subst::SubstMap;
