//! Configuration file discovery and loading.

use crate::config::merger::merge_configs;
use crate::config::schema::ProbeConfig;
use crate::error::{ProbeError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name.
pub const CONFIG_FILE: &str = "fieldprobe.yml";

/// Local override file name, meant to stay out of version control.
pub const LOCAL_CONFIG_FILE: &str = "fieldprobe.local.yml";

/// Paths to configuration files in merge order (later overrides earlier).
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Project config: fieldprobe.yml or the explicit `--config` file
    pub project: Option<PathBuf>,

    /// Local overrides: fieldprobe.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files in `root`.
    ///
    /// An explicit path replaces `fieldprobe.yml` and is kept even if it
    /// does not exist, so loading reports it as missing.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Self {
        let project = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => existing(root.join(CONFIG_FILE)),
        };

        Self {
            project,
            project_local: existing(root.join(LOCAL_CONFIG_FILE)),
        }
    }

    /// Returns all config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ProbeConfig> {
    let value = load_config_value(path)?;
    from_value(value, path)
}

/// Parse YAML content into a config.
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProbeConfig> {
    serde_yaml::from_str(content).map_err(|e| ProbeError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProbeError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProbeError::Io(e)
        }
    })?;

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| ProbeError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // An empty file parses as null; treat it as an empty mapping.
    Ok(if value.is_null() {
        serde_yaml::Value::Mapping(Default::default())
    } else {
        value
    })
}

fn from_value(value: serde_yaml::Value, source_path: &Path) -> Result<ProbeConfig> {
    serde_yaml::from_value(value).map_err(|e| ProbeError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge every config layer found for `root`.
///
/// Falls back to [`ProbeConfig::default`] when no file exists.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit path does not exist.
/// Returns `ConfigParseError` if any layer is invalid.
pub fn load_merged_config(root: &Path, explicit: Option<&Path>) -> Result<ProbeConfig> {
    let paths = ConfigPaths::discover(root, explicit);
    let existing = paths.all_existing();

    let Some(last) = existing.last() else {
        tracing::debug!("No config file found in {}", root.display());
        return Ok(ProbeConfig::default());
    };

    let values = existing
        .iter()
        .map(|path| {
            tracing::debug!("Loading config layer {}", path.display());
            load_config_value(path)
        })
        .collect::<Result<Vec<_>>>()?;

    from_value(merge_configs(&values), last)
}
