//! Optional user settings providing defaults for the `create` command.
//! Read from `go-app-gen.yaml` (or `.yml`) in the current directory,
//! falling back to `$HOME/.config`.

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Supported settings file names
pub const SETTINGS_FILES: [&str; 2] = ["go-app-gen.yaml", "go-app-gen.yml"];

/// Defaults applied when the corresponding flag is not given.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub author: Option<String>,
    /// Module names default to `<module_prefix>/<app name>`
    pub module_prefix: Option<String>,
    pub domain: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub output_dir: Option<PathBuf>,
}

/// Directories searched for a settings file, in priority order.
pub fn settings_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from(".")];
    if let Ok(home) = std::env::var("HOME") {
        dirs.push(Path::new(&home).join(".config"));
    }
    dirs
}

/// Parses settings from YAML. An empty document yields the defaults.
///
/// # Errors
/// * `Error::ConfigError` if the YAML is malformed or contains unknown keys
pub fn parse_settings(content: &str) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content)
        .map_err(|e| Error::ConfigError(format!("Invalid settings file: {e}")))
}

/// Loads the first settings file found in `dirs`.
///
/// # Returns
/// * `Result<Settings>` - Parsed settings, or the defaults when no file exists
pub fn load_settings<P: AsRef<Path>>(dirs: &[P]) -> Result<Settings> {
    for dir in dirs {
        for file in SETTINGS_FILES {
            let path = dir.as_ref().join(file);
            if path.is_file() {
                debug!("Loading settings from {}", path.display());
                let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
                return parse_settings(&content);
            }
        }
    }

    debug!("No settings file found");
    Ok(Settings::default())
}
