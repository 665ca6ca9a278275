//! XML configuration support.
//! - Loads logging settings from config.xml (quick_xml).
//! - Creates a commented template if missing (unless CRR_CONFIG is set).
//!
//! Notes:
//! - This module only reads/writes the config file; CLI flags override
//!   whatever it loads.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use tracing::debug;

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
}

fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();
    if let Some(s) = parsed.log_level.as_deref() {
        if let Ok(level) = s.trim().parse::<LogLevel>() {
            cfg.log_level = level;
        }
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }
    cfg
}

/// Effective config file path: CRR_CONFIG if set, else the platform default.
pub fn config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("CRR_CONFIG") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Read config from XML. Returns None if the file is missing or carries no
/// usable settings. When the default path is used and no file exists yet, a
/// template is created (best-effort) so users get a starting point.
pub fn load_config_from_xml() -> Option<Config> {
    let env_set = env::var_os("CRR_CONFIG").is_some();
    let cfg_path = config_path()?;

    if !cfg_path.exists() {
        if !env_set {
            let _ = create_template_config(&cfg_path);
        }
        return None;
    }

    let content = fs::read_to_string(&cfg_path).ok()?;
    let parsed: XmlConfig = match from_xml_str(&content) {
        Ok(x) => x,
        Err(e) => {
            debug!(
                "Failed to parse config.xml at {}: {}",
                cfg_path.display(),
                e
            );
            return None;
        }
    };

    if parsed.log_level.is_none() && parsed.log_file.is_none() {
        return None;
    }
    Some(xml_to_config(parsed))
}

/// Load a Config from a specific XML file path (quick_xml).
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig =
        from_xml_str(&contents).with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// Create default template config file and parent directory (best-effort
/// permissions). Refuses symlinked ancestors.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        return Err(anyhow::anyhow!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        ));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
        #[cfg(unix)]
        {
            let _ = fs::set_permissions(parent, fs::Permissions::from_mode(0o700));
        }
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/crr.log".into());

    let content = format!(
        "<!--\n  crr configuration (XML)\n\n  Fields:\n    log_level -> quiet | normal | info | debug\n    log_file  -> path to log file (optional; stderr is always used)\n\n  Notes:\n    - CLI flags override XML values.\n    - Set CRR_CONFIG to use a config file at another location.\n-->\n<config>\n  <log_level>normal</log_level>\n  <log_file>{suggested_log}</log_file>\n</config>\n"
    );

    fs::write(path, content)?;
    #[cfg(unix)]
    {
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }

    debug!("Created template config at {}", path.display());
    Ok(())
}
