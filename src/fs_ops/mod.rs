//! Filesystem operations: modularized.

mod copy;
pub mod resolve;
mod transform;
mod walk;

pub use copy::copy_rename_replace;
pub use transform::transform_file;
pub use walk::list_all;
