//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use serde::{Deserialize, Serialize};

use crate::inventory::DEFAULT_INVENTORY_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Source tree holding the resources and the inventory
    #[serde(default = "default_source")]
    pub source: String,

    /// Maximum number of hops followed from the target
    #[serde(default = "default_depth")]
    pub depth: u8,

    /// Output configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Inventory configuration
    #[serde(default)]
    pub inventory: InventoryConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Show machine resource names instead of paths
    #[serde(default = "default_false")]
    pub mrn: bool,

    /// Show results as a tree instead of a flat list
    #[serde(default = "default_false")]
    pub tree: bool,
}

/// Inventory configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryConfig {
    /// Inventory file, relative to the source root unless absolute
    #[serde(default = "default_inventory_file")]
    pub file: String,
}

/// Project-level overrides read from `<source>/.roledeps.yaml`
///
/// Every field is optional so that only the keys present in the file
/// replace the values from lower layers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrn: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<String>,
}

// Default value functions
fn default_source() -> String {
    ".".to_string()
}

fn default_depth() -> u8 {
    99
}

fn default_false() -> bool {
    false
}

fn default_inventory_file() -> String {
    DEFAULT_INVENTORY_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            depth: default_depth(),
            display: DisplayConfig::default(),
            inventory: InventoryConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mrn: default_false(),
            tree: default_false(),
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            file: default_inventory_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.source, ".");
        assert_eq!(config.depth, 99);
        assert!(!config.display.mrn);
        assert!(!config.display.tree);
        assert_eq!(config.inventory.file, "dependencies.yaml");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("source"));
        assert!(yaml.contains("depth"));
        assert!(yaml.contains("display"));
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
source: ./platform
depth: 3
display:
  tree: true
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.source, "./platform");
        assert_eq!(config.depth, 3);
        assert!(config.display.tree);
        assert!(!config.display.mrn);
        assert_eq!(config.inventory.file, "dependencies.yaml");
    }

    #[test]
    fn test_project_config_partial() {
        let project: ProjectConfig = serde_yaml::from_str("tree: true\n").unwrap();
        assert_eq!(project.tree, Some(true));
        assert_eq!(project.depth, None);
    }
}
