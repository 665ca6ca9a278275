//! Tree enumeration.
//! Eagerly lists everything under a root so the validation and execution
//! passes work from the same snapshot of the tree.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Every file and directory strictly under `root`, as absolute paths,
/// parents before children, file names sorted for a stable order.
pub fn list_all(root: &Path) -> Vec<PathBuf> {
    let entries: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| e.into_path())
        .collect();
    debug!(root = %root.display(), count = entries.len(), "enumerated tree");
    entries
}
