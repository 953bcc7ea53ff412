//! Configuration loading functions.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::error::ConfigError;
use super::types::Config;

/// Project-level config file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    ".codegather.yaml",
    ".codegather.yml",
    ".codegather.json",
    ".codegather.toml",
];

impl Config {
    /// Load configuration from a file, choosing the parser by extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let config: Config = match ext.as_str() {
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseYaml {
                    path: path.to_path_buf(),
                    source: e,
                })?
            }
            "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: e,
            })?,
            "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: e,
            })?,
            _ => {
                return Err(ConfigError::UnsupportedFormat(
                    path.display().to_string(),
                    ext,
                ));
            }
        };

        Ok(Config {
            scan: config.scan.normalized(),
        })
    }

    /// Load configuration from the project directory or global config.
    ///
    /// Search order:
    /// 1. `.codegather.{yaml,yml,json,toml}` in the project root
    /// 2. `<config dir>/codegather/config.yaml`
    /// 3. Defaults
    ///
    /// A file that exists but fails to load is logged and skipped.
    pub fn load(project_root: Option<&Path>) -> Self {
        let project_candidates = project_root
            .into_iter()
            .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)));
        let global_candidate =
            dirs::config_dir().map(|dir| dir.join("codegather").join("config.yaml"));

        for path in project_candidates.chain(global_candidate) {
            if !path.is_file() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded configuration");
                    return config;
                }
                Err(e) => warn!(error = %e, "Ignoring unusable configuration file"),
            }
        }

        Self::default()
    }
}
