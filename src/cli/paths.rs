//! Configuration directory and saved settings

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::search::SearchConfig;

/// Get the configuration directory for soundseek
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("soundseek"))
}

/// Get the default settings file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the settings file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User settings stored in the config file.
///
/// Every field is optional; unset fields fall back to [`SearchConfig`]
/// defaults when resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Default number of results
    pub top_k: Option<usize>,
    /// Default starting number of partitions
    pub initial_groups: Option<usize>,
    /// Default minimum entries per partition
    pub min_group_size: Option<usize>,
    /// Default lowest number of partitions
    pub min_groups: Option<usize>,
    /// Default index batch size
    pub batch_size: Option<usize>,
    /// Default clustering seed
    pub seed: Option<u64>,
    /// Default Lloyd iteration cap
    pub max_iterations: Option<usize>,
    /// Default k-means++ seedings per attempt
    pub restarts: Option<usize>,
}

impl PersistentConfig {
    /// Load settings from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from custom path
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<PathBuf> {
        self.save_to(None)
    }

    /// Save settings to custom path, returning the path written
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<PathBuf> {
        let path = config_file_path_with_override(custom_path)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path)
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, cli: &PersistentConfig) -> Self {
        Self {
            top_k: cli.top_k.or(self.top_k),
            initial_groups: cli.initial_groups.or(self.initial_groups),
            min_group_size: cli.min_group_size.or(self.min_group_size),
            min_groups: cli.min_groups.or(self.min_groups),
            batch_size: cli.batch_size.or(self.batch_size),
            seed: cli.seed.or(self.seed),
            max_iterations: cli.max_iterations.or(self.max_iterations),
            restarts: cli.restarts.or(self.restarts),
        }
    }

    /// Fill unset fields from [`SearchConfig::default`]
    pub fn resolve(&self) -> SearchConfig {
        let defaults = SearchConfig::default();
        SearchConfig {
            initial_groups: self.initial_groups.unwrap_or(defaults.initial_groups),
            min_group_size: self.min_group_size.unwrap_or(defaults.min_group_size),
            min_groups: self.min_groups.unwrap_or(defaults.min_groups),
            top_k: self.top_k.unwrap_or(defaults.top_k),
            batch_size: self.batch_size.unwrap_or(defaults.batch_size),
            seed: self.seed.unwrap_or(defaults.seed),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            restarts: self.restarts.unwrap_or(defaults.restarts),
        }
    }
}
