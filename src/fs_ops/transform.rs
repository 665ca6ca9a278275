//! Single-file copy with content substitution.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::{CrrError, Result};
use crate::output as out;
use crate::subst::SubstMap;
use crate::transcode;

/// Read `src`, apply the substitution map to its decoded text, and write the
/// result to `dest` (overwriting an existing file). Content that does not
/// decode as text is copied byte-for-byte; substitutions are textual and
/// never rewrite binary data. Failures are reported on stderr and returned
/// as CantRead/CantWrite.
pub fn transform_file(src: &Path, dest: &Path, map: &SubstMap) -> Result<()> {
    let bytes = fs::read(src).map_err(|_| {
        out::print_error(&format!("Unable to read file: '{}'.", src.display()));
        CrrError::CantRead(src.to_path_buf())
    })?;

    let new_bytes = match transcode::decode(&bytes) {
        Some(decoded) => {
            debug!(
                path = %src.display(),
                encoding = ?decoded.encoding,
                line_ending = ?decoded.line_ending,
                "decoded text file"
            );
            let replaced = map.apply(&decoded.text);
            transcode::encode(&replaced, decoded.encoding)
        }
        None => {
            debug!(path = %src.display(), "binary content, copying verbatim");
            bytes
        }
    };

    fs::write(dest, &new_bytes).map_err(|_| {
        out::print_error(&format!("Unable to write file: '{}'.", dest.display()));
        CrrError::CantWrite(dest.to_path_buf())
    })
}
