//! Configuration loading and merging logic
//!
//! Handles loading configuration from multiple sources and merging them
//! according to precedence rules.

use super::{
    defaults, paths,
    schema::{Config, DisplayConfig, InventoryConfig, ProjectConfig},
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Project config in the source tree
    /// 3. Root config
    /// 4. Built-in defaults
    ///
    /// `source` is the source tree given on the command line; it decides
    /// which project config is read. Command-line flags other than the
    /// source are applied by the caller on top of the returned value.
    pub fn load(source: Option<&str>) -> Result<Config> {
        let mut config = Self::load_defaults();

        // Load root config
        let root_path = paths::root_config_path();
        if root_path.exists() {
            config = Self::merge_config(config, Self::load_file(&root_path)?);
        }

        if let Some(source) = source
            .map(str::to_string)
            .or_else(|| std::env::var("ROLEDEPS_SOURCE").ok())
        {
            config.source = source;
        }

        // Load project config from the selected source tree
        let project_path = paths::project_config_path(Path::new(&config.source));
        if project_path.exists() {
            let project = Self::load_project_file(&project_path)?;
            config = Self::merge_project(config, project);
        }

        // Apply environment variable overrides
        config = Self::apply_env_overrides(config);

        Ok(config)
    }

    /// Load configuration from a file
    pub fn load_file(path: &PathBuf) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load a project configuration file
    pub fn load_project_file(path: &PathBuf) -> Result<ProjectConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read project config: {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(ProjectConfig::default());
        }

        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse project config: {}", path.display()))
    }

    /// Validate configuration by loading and checking for errors
    ///
    /// Fails on invalid YAML syntax, invalid value types (for example a
    /// depth outside 0-255) and file read errors in any layer.
    pub fn validate(source: Option<&str>) -> Result<()> {
        let root_path = paths::root_config_path();
        if root_path.exists() {
            Self::load_file(&root_path)?;
        }

        let config = Self::load(source).context("Failed to load merged configuration")?;
        if config.depth == 0 {
            return Err(anyhow::anyhow!("depth value should not be zero"));
        }

        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Merge two configurations, with `other` taking precedence
    fn merge_config(_base: Config, other: Config) -> Config {
        Config {
            source: other.source,
            depth: other.depth,
            display: DisplayConfig {
                mrn: other.display.mrn,
                tree: other.display.tree,
            },
            inventory: InventoryConfig {
                file: other.inventory.file,
            },
        }
    }

    /// Merge the keys present in a project config
    fn merge_project(mut base: Config, project: ProjectConfig) -> Config {
        if let Some(depth) = project.depth {
            base.depth = depth;
        }
        if let Some(mrn) = project.mrn {
            base.display.mrn = mrn;
        }
        if let Some(tree) = project.tree {
            base.display.tree = tree;
        }
        if let Some(file) = project.inventory {
            base.inventory.file = file;
        }
        base
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        // ROLEDEPS_DEPTH override
        if let Ok(depth) = std::env::var("ROLEDEPS_DEPTH") {
            match depth.parse::<u8>() {
                Ok(val) => config.depth = val,
                Err(_) => tracing::warn!("Ignoring invalid ROLEDEPS_DEPTH value '{}'", depth),
            }
        }

        // ROLEDEPS_TREE override
        if let Ok(tree) = std::env::var("ROLEDEPS_TREE") {
            if let Ok(val) = tree.parse::<bool>() {
                config.display.tree = val;
            }
        }

        // ROLEDEPS_MRN override
        if let Ok(mrn) = std::env::var("ROLEDEPS_MRN") {
            if let Ok(val) = mrn.parse::<bool>() {
                config.display.mrn = val;
            }
        }

        // ROLEDEPS_INVENTORY override
        if let Ok(file) = std::env::var("ROLEDEPS_INVENTORY") {
            config.inventory.file = file;
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &PathBuf) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}
