use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::errors::AppWipeError;

/// Global AppWipe configuration, read from `<home>/.appwipe/config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Extra scan roots, visited after the built-in Library locations.
    /// Absolute, `~/`-prefixed, or relative to the home directory.
    #[serde(default)]
    pub extra_locations: Vec<String>,

    /// Paths containing any of these substrings are never reported or removed
    #[serde(default)]
    pub exclude_paths: Vec<String>,

    /// Output format preference
    #[serde(default)]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl Config {
    /// Get the AppWipe data directory (`<home>/.appwipe`)
    pub fn data_dir(home: &Path) -> PathBuf {
        home.join(".appwipe")
    }

    /// Get the config file path
    pub fn config_path(home: &Path) -> PathBuf {
        Self::data_dir(home).join("config.toml")
    }

    /// Load config from file, or fall back to defaults if it does not exist
    pub fn load(home: &Path) -> Result<Self> {
        let path = Self::config_path(home);
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| AppWipeError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config: Config = toml::from_str(&contents).map_err(|e| AppWipeError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve `extra_locations` against the home directory
    pub fn extra_roots(&self, home: &Path) -> Vec<PathBuf> {
        self.extra_locations
            .iter()
            .map(|loc| {
                if let Some(rest) = loc.strip_prefix("~/") {
                    home.join(rest)
                } else if loc == "~" {
                    home.to_path_buf()
                } else {
                    // join() keeps absolute paths as-is
                    home.join(loc)
                }
            })
            .collect()
    }

    /// Check if a path should be excluded
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.display().to_string();
        self.exclude_paths
            .iter()
            .filter(|p| !p.is_empty())
            .any(|p| path_str.contains(p.as_str()))
    }
}
