//! Typed error definitions for crr.
//! The variants form the closed set of run outcomes; every failing operation
//! returns exactly one of these and the binary maps it to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrrError {
    #[error("Unable to read file: '{0}'")]
    CantRead(PathBuf),

    #[error("Unable to write file: '{0}'")]
    CantWrite(PathBuf),

    #[error("Unable to create directory: '{0}'")]
    CantCreateDir(PathBuf),

    #[error("source '{0}' doesn't exist")]
    NoSource(PathBuf),

    #[error("invalid destination: {0}")]
    InvalidDest(String),

    #[error("destination '{0}' is not a directory")]
    NotDir(PathBuf),

    #[error("destination '{0}' is not a normal file")]
    NotFile(PathBuf),

    #[error("path is too long: '{0}'")]
    TooLongPath(PathBuf),

    #[error("'{0}' is an invalid name")]
    InvalidName(String),

    #[error("'{name}' contains invalid character '{ch}'")]
    InvalidChar { name: String, ch: char },
}

impl CrrError {
    /// Fixed process exit code for each outcome kind (success is 0).
    pub fn exit_code(&self) -> u8 {
        match self {
            CrrError::CantRead(_) => 1,
            CrrError::CantWrite(_) => 2,
            CrrError::CantCreateDir(_) => 3,
            CrrError::NoSource(_) => 4,
            CrrError::InvalidDest(_) => 5,
            CrrError::NotDir(_) => 6,
            CrrError::NotFile(_) => 7,
            CrrError::TooLongPath(_) => 8,
            CrrError::InvalidName(_) => 9,
            CrrError::InvalidChar { .. } => 10,
        }
    }

    /// Short machine-friendly kind tag used in structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            CrrError::CantRead(_) => "cant_read",
            CrrError::CantWrite(_) => "cant_write",
            CrrError::CantCreateDir(_) => "cant_create_dir",
            CrrError::NoSource(_) => "no_source",
            CrrError::InvalidDest(_) => "invalid_dest",
            CrrError::NotDir(_) => "not_dir",
            CrrError::NotFile(_) => "not_file",
            CrrError::TooLongPath(_) => "too_long_path",
            CrrError::InvalidName(_) => "invalid_name",
            CrrError::InvalidChar { .. } => "invalid_char",
        }
    }
}

pub type Result<T> = std::result::Result<T, CrrError>;
