use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::tree::{ExclusionGroup, DEFAULT_MAX_LEVEL};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tree: TreeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Levels listed when --max-level is not given
    pub max_level: usize,
    /// Names always listed but never expanded
    pub exclude: Vec<String>,
    /// Preset group applied when --exclude-group is not given
    pub exclude_group: Option<ExclusionGroup>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            exclude: vec![],
            exclude_group: None,
        }
    }
}

impl Config {
    /// Location checked when no explicit config path is given
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tree-limited").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = self
            .tree
            .exclude
            .iter()
            .find(|name| name.is_empty() || name.contains('/'))
        {
            return Err(ConfigError::Invalid(format!(
                "exclude entry '{}' must be a single non-empty name",
                name
            )));
        }
        Ok(())
    }
}
