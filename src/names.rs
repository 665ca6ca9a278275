//! Legality checks for destination entry names.
//! Mirrors the portable-filesystem restrictions: reserved device names and a
//! fixed set of characters that must never appear in a produced name.

use crate::errors::{CrrError, Result};

/// Characters forbidden anywhere in a destination name or replacement string.
pub const RESERVED_CHARS: &[char] = &[
    '\\', '/', ':', ',', ';', '*', '?', '"', '<', '>', '|', '+', '&', '~',
];

/// Names that are never legal as a destination entry (case-insensitive).
const RESERVED_NAMES: &[&str] = &[
    ".", "..", "CON", "PRN", "AUX", "NUL", "CLOCK$", "COM0", "COM1", "COM2", "COM3", "COM4",
    "COM5", "COM6", "COM7", "COM8", "COM9", "LPT0", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5",
    "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Reject any reserved character in `text`.
///
/// Also applied to raw replacement strings before they are registered, so a
/// substitution can never inject an illegal character into a derived name.
pub fn check_chars(text: &str) -> Result<()> {
    if let Some(ch) = text.chars().find(|c| RESERVED_CHARS.contains(c)) {
        return Err(CrrError::InvalidChar {
            name: text.to_string(),
            ch,
        });
    }
    Ok(())
}

/// Validate a candidate file/directory name. Checks run in order and the
/// first failure wins: empty or trailing '$' and reserved names are
/// InvalidName; reserved characters are InvalidChar.
pub fn validate(name: &str) -> Result<()> {
    if name.is_empty() || name.ends_with('$') {
        return Err(CrrError::InvalidName(name.to_string()));
    }
    if RESERVED_NAMES.iter().any(|r| name.eq_ignore_ascii_case(r)) {
        return Err(CrrError::InvalidName(name.to_string()));
    }
    check_chars(name)
}
