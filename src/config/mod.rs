//! Configuration system for roledeps
//!
//! Layers built-in defaults, a per-user root config, a per-source-tree
//! project config and environment overrides into a single [`Config`].

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, DisplayConfig, InventoryConfig, ProjectConfig};

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "source" => Ok(config.source.clone()),
        "depth" => Ok(config.depth.to_string()),
        "display.mrn" => Ok(config.display.mrn.to_string()),
        "display.tree" => Ok(config.display.tree.to_string()),
        "inventory.file" => Ok(config.inventory.file.clone()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "source" => {
            config.source = value.to_string();
        }
        "depth" => {
            config.depth = value
                .parse()
                .context("depth must be a number between 0 and 255")?;
        }
        "display.mrn" => {
            config.display.mrn = value
                .parse()
                .context("display.mrn must be 'true' or 'false'")?;
        }
        "display.tree" => {
            config.display.tree = value
                .parse()
                .context("display.tree must be 'true' or 'false'")?;
        }
        "inventory.file" => {
            if value.is_empty() {
                return Err(anyhow::anyhow!("inventory.file must not be empty"));
            }
            config.inventory.file = value.to_string();
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}
