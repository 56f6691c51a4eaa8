//! Generator configuration (`bemgen.toml`).

use std::path::{Path, PathBuf};

use bemgen_parser::Preset;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the configuration file looked up in the source root.
pub const CONFIG_FILE_NAME: &str = "bemgen.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {}: {source}", .config_path.display())]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {}: {source}", .config_path.display())]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Stylesheet file suffix, without the leading dot.
    pub suffix: String,
    /// Directory inside each component that receives the copied stylesheets.
    pub css_dir: String,
    /// Name of the generated component file.
    pub index_file: String,
    /// BEM naming convention of the stylesheet names.
    pub naming: Preset,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            suffix: "post.css".to_string(),
            css_dir: "css".to_string(),
            index_file: "index.js".to_string(),
            naming: Preset::Origin,
        }
    }
}

impl GeneratorConfig {
    /// Load a config file. The file must exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();
        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: GeneratorConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(config.normalized())
    }

    /// Load `bemgen.toml` from `source_root` if there is one.
    pub fn discover<P: AsRef<Path>>(source_root: P) -> Result<Option<Self>, ConfigError> {
        let config_path = source_root.as_ref().join(CONFIG_FILE_NAME);
        if !config_path.is_file() {
            return Ok(None);
        }
        Self::load_from_path(&config_path).map(Some)
    }

    /// Use a different stylesheet suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self.normalized()
    }

    /// Use a different naming convention.
    pub fn with_naming(mut self, naming: Preset) -> Self {
        self.naming = naming;
        self
    }

    /// Accept `.post.css` as well as `post.css`.
    fn normalized(mut self) -> Self {
        if let Some(stripped) = self.suffix.strip_prefix('.') {
            self.suffix = stripped.to_string();
        }
        self
    }
}
