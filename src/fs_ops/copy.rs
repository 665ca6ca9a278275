//! Copy-rename-replace orchestration.
//!
//! Directory mode is two-phase: every derived destination name is validated
//! before the filesystem is touched, then the cached plan is executed.
//! Entries copied before a mid-run failure stay on disk; there is no
//! rollback.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{CrrError, Result};
use crate::names;
use crate::output as out;
use crate::subst::SubstMap;

use super::resolve::{self, CwdGuard};
use super::transform::transform_file;
use super::walk;

/// One directory-mode entry, derived during the validation pass and replayed
/// verbatim by the execution pass.
struct PlannedEntry {
    src: PathBuf,
    dest: PathBuf,
    is_dir: bool,
}

/// Copy `source` (file or tree) to `dest`, rewriting names and text content
/// through `map`. The sole entry point of the operation; the current
/// directory is saved and restored around the whole run.
pub fn copy_rename_replace(source: &Path, dest: &Path, map: &SubstMap) -> Result<()> {
    let _cwd = CwdGuard::capture();

    if source == dest {
        let err = CrrError::InvalidDest("source and destination are same".to_string());
        out::print_error(&err.to_string());
        return Err(err);
    }

    let src = resolve::absolute(source)?;
    let mut dst = resolve::absolute(dest)?;

    // The destination's own final name participates in substitution and must
    // be legal before anything on disk is examined or touched.
    let title = dst
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let new_title = map.apply(&title);
    if let Err(err) = names::validate(&new_title) {
        out::print_error(&err.to_string());
        return Err(err);
    }
    dst.set_file_name(&new_title);

    out::print_endpoints(&src, &dst);

    if src == dst {
        let err = CrrError::InvalidDest("source and destination are same".to_string());
        out::print_error(&err.to_string());
        return Err(err);
    }
    if resolve::path_contains(&src, &dst) {
        let err = CrrError::InvalidDest("destination contains source directory".to_string());
        out::print_error(&err.to_string());
        return Err(err);
    }

    if src.is_dir() {
        if dst.exists() && !dst.is_dir() {
            let err = CrrError::NotDir(dst);
            out::print_error(&err.to_string());
            return Err(err);
        }
        copy_dir(&src, &dst, map)
    } else {
        if !src.exists() {
            let err = CrrError::NoSource(src);
            out::print_error(&err.to_string());
            return Err(err);
        }
        if dst.is_dir() {
            let err = CrrError::NotFile(dst);
            out::print_error(&err.to_string());
            return Err(err);
        }
        copy_file(&src, &dst, map)
    }
}

/// File mode: a single transform call.
fn copy_file(src: &Path, dest: &Path, map: &SubstMap) -> Result<()> {
    transform_file(src, dest, map)?;
    out::print_entry_ok(src, dest);
    out::print_done();
    info!(src = %src.display(), dest = %dest.display(), "copied file");
    Ok(())
}

/// Directory mode: enumerate, validate every derived name, then execute.
fn copy_dir(src_root: &Path, dest_root: &Path, map: &SubstMap) -> Result<()> {
    out::print_banner("Getting path list...");
    let entries = walk::list_all(src_root);

    out::print_banner("Checking pathnames...");
    let mut plan = Vec::with_capacity(entries.len());
    for path in entries {
        let Ok(suffix) = path.strip_prefix(src_root) else {
            continue;
        };
        // The substitution model is textual; non-UTF-8 suffixes are
        // converted lossily before rewriting.
        let rewritten = PathBuf::from(map.apply(&suffix.to_string_lossy()));
        let name = rewritten
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        if let Err(err) = names::validate(&name) {
            out::print_error(&err.to_string());
            return Err(err);
        }
        plan.push(PlannedEntry {
            is_dir: path.is_dir(),
            dest: dest_root.join(rewritten),
            src: path,
        });
    }
    debug!(entries = plan.len(), "pathname check passed");

    // Validation is total; only now may the destination tree be mutated.
    out::print_banner("Processing...");
    if !dest_root.exists() {
        fs::create_dir_all(dest_root).map_err(|_| {
            let err = CrrError::CantCreateDir(dest_root.to_path_buf());
            out::print_error(&err.to_string());
            err
        })?;
    }

    for entry in &plan {
        if entry.is_dir {
            // Idempotent: an already-existing destination directory is fine.
            if fs::create_dir(&entry.dest).is_err() && !entry.dest.is_dir() {
                out::print_entry_ng(&entry.src, &entry.dest);
                return Err(CrrError::CantCreateDir(entry.dest.clone()));
            }
        } else if let Err(err) = transform_file(&entry.src, &entry.dest, map) {
            // First file failure aborts the remaining traversal.
            out::print_entry_ng(&entry.src, &entry.dest);
            return Err(err);
        }
        out::print_entry_ok(&entry.src, &entry.dest);
    }

    out::print_done();
    info!(src = %src_root.display(), dest = %dest_root.display(), entries = plan.len(), "copied directory");
    Ok(())
}
