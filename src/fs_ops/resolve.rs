//! Absolute-path normalization and containment checks.
//!
//! Normalization is lexical: anchor relative paths at the current directory,
//! fold `.`/`..` components, and strip Windows verbatim prefixes via dunce.
//! No filesystem access, so it works for destinations that don't exist yet.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::errors::{CrrError, Result};

/// Platform path-length ceiling applied to normalized paths.
#[cfg(windows)]
pub const MAX_PATH_LEN: usize = 260;
#[cfg(not(windows))]
pub const MAX_PATH_LEN: usize = 4096;

/// Saves the process current directory and restores it on drop, so the whole
/// run is bracketed regardless of which exit path it takes.
pub struct CwdGuard {
    saved: Option<PathBuf>,
}

impl CwdGuard {
    pub fn capture() -> Self {
        Self {
            saved: env::current_dir().ok(),
        }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            let _ = env::set_current_dir(saved);
        }
    }
}

/// Normalize `path` to an absolute, lexically cleaned form, enforcing the
/// platform length limit.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir()
            .map_err(|_| CrrError::InvalidDest("cannot resolve current directory".to_string()))?;
        cwd.join(path)
    };

    let cleaned = lexical_clean(&joined);
    let simplified = dunce::simplified(&cleaned).to_path_buf();

    if simplified.as_os_str().len() >= MAX_PATH_LEN {
        return Err(CrrError::TooLongPath(simplified));
    }
    Ok(simplified)
}

/// Fold `.` and `..` components without touching the filesystem.
fn lexical_clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                // Only pop a real component; `..` above the root is dropped.
                if !matches!(out.components().next_back(), None | Some(Component::RootDir | Component::Prefix(_))) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Component-wise "is `candidate` inside (or equal to) `ancestor`".
pub fn path_contains(ancestor: &Path, candidate: &Path) -> bool {
    candidate.starts_with(ancestor)
}
