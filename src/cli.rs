//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Substitution rules are trailing FIND/REPLACE pairs; an odd count is a
//!   usage error surfaced by rule_pairs().
//! - --debug is a shorthand for --log-level debug.

use anyhow::bail;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crr::config::{Config, LogLevel};

/// Copy files/directories, with renaming and replacing.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Copy files/directories, with renaming and replacing",
    after_help = "Each FIND/REPLACE pair is a literal substitution applied, in order, to every\ncopied entry name and to the text content of every copied file."
)]
pub struct Args {
    /// Source file or directory.
    #[arg(value_name = "SOURCE", value_hint = ValueHint::AnyPath, required_unless_present = "print_config")]
    pub source: Option<PathBuf>,

    /// Destination path.
    #[arg(value_name = "DEST", value_hint = ValueHint::AnyPath, required_unless_present = "print_config")]
    pub dest: Option<PathBuf>,

    /// Literal substitution rules as trailing FIND REPLACE pairs.
    #[arg(value_name = "FIND REPLACE", num_args = 0..)]
    pub rules: Vec<String>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Write logs to this file in addition to stderr.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where crr will look for the config file (or CRR_CONFIG if set), then exit.
    #[arg(long, help = "Print the config file location used by crr and exit")]
    pub print_config: bool,
}

impl Args {
    /// Source path with shell-quoting artifacts stripped.
    pub fn resolved_source(&self) -> Option<PathBuf> {
        self.source.as_deref().map(Self::sanitize_path)
    }

    /// Destination path with shell-quoting artifacts stripped.
    pub fn resolved_dest(&self) -> Option<PathBuf> {
        self.dest.as_deref().map(Self::sanitize_path)
    }

    /// The trailing rule arguments as (find, replace) pairs.
    pub fn rule_pairs(&self) -> anyhow::Result<Vec<(&str, &str)>> {
        if self.rules.len() % 2 != 0 {
            bail!(
                "substitution rules must come in FIND/REPLACE pairs; got {} trailing argument(s)",
                self.rules.len()
            );
        }
        Ok(self
            .rules
            .chunks_exact(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
            .collect())
    }

    #[inline]
    fn sanitize_path(p: &std::path::Path) -> PathBuf {
        Self::sanitize_str(&p.to_string_lossy())
    }

    #[inline]
    fn sanitize_str(s: &str) -> PathBuf {
        // Trim surrounding single/double quotes if user invoked with quotes in
        // PowerShell or CMD, plus any stray quote left by escaping mistakes.
        let trimmed = s.trim();
        let mut inner = if (trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\''))
        {
            trimmed[1..trimmed.len() - 1].to_string()
        } else {
            trimmed.trim_matches(|c| c == '\'' || c == '"').to_string()
        };
        inner.retain(|c| c != '\'' && c != '"');

        // Drop ONE trailing separator introduced by quoting/escaping, but never
        // strip a bare root like "/".
        if (inner.ends_with('\\') || inner.ends_with('/')) && inner.len() > 1 {
            inner.pop();
        }

        PathBuf::from(inner)
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
