//! Configuration types and parsing for csl.yml

use crate::error::{CoreError, CoreResult};
use crate::name::{SchemaName, SchemaVersion};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Config file names searched for in a project directory, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["csl.yml", "csl.yaml"];

/// Project configuration from csl.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Current version of each schema family.
    ///
    /// Documents persisted at an older version are upgraded to this version
    /// by `csl upgrade`.
    #[serde(default)]
    pub current_versions: BTreeMap<SchemaName, SchemaVersion>,

    /// Reject duplicate edges and self-loops while building the registry
    #[serde(default)]
    pub strict_registration: bool,
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded config '{}' from {}", config.name, path.display());
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for csl.yml or csl.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => Err(CoreError::ConfigNotFound {
                path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
            }),
        }
    }

    /// Return the first config file that exists in `dir`, if any.
    pub fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Get the configured current version for a schema
    pub fn current_version(&self, schema: &str) -> CoreResult<&SchemaVersion> {
        self.current_versions
            .get(schema)
            .ok_or_else(|| CoreError::UnknownSchema {
                schema: schema.to_string(),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "csl".to_string(),
            current_versions: BTreeMap::new(),
            strict_registration: false,
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
