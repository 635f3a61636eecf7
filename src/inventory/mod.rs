//! Inventory loading
//!
//! The inventory is a file in the source tree listing, for each resource,
//! the resources it directly requires:
//!
//! ```yaml
//! dependsOn:
//!   platform__foundation__cluster:
//!     - platform__foundation__network
//!   platform__foundation__network: []
//! ```
//!
//! Files ending in `.json` are read as JSON, anything else as YAML. The
//! reverse edges are derived while the graph is built.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::graph::DependencyGraph;
use crate::resource;

/// Default inventory file name, relative to the source root
pub const DEFAULT_INVENTORY_FILE: &str = "dependencies.yaml";

/// Inventory errors
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Inventory file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read inventory file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse inventory file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// On-disk inventory document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFile {
    /// Forward edges; `indexmap` keeps the file's order
    #[serde(default)]
    pub depends_on: indexmap::IndexMap<String, Vec<String>>,
}

impl InventoryFile {
    /// Build the dependency graph described by this document
    pub fn into_graph(self) -> DependencyGraph {
        for (owner, dependencies) in &self.depends_on {
            for name in std::iter::once(owner).chain(dependencies) {
                if !resource::is_mrn(name) {
                    tracing::warn!("Inventory entry '{}' is not a machine resource name", name);
                }
            }
        }
        DependencyGraph::from_depends_on(self.depends_on)
    }
}

/// Loader for the inventory of a source tree
pub struct Inventory;

impl Inventory {
    /// Resolve the inventory path; absolute paths are used as they are
    pub fn path(source_root: &Path, file: &str) -> PathBuf {
        let file = Path::new(file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            source_root.join(file)
        }
    }

    /// Load the inventory of `source_root` and build its graph
    pub fn load(source_root: &Path, file: &str) -> InventoryResult<DependencyGraph> {
        let path = Self::path(source_root, file);
        let document = Self::load_file(&path)?;
        tracing::debug!(
            "Loaded {} inventory entries from {}",
            document.depends_on.len(),
            path.display()
        );
        Ok(document.into_graph())
    }

    /// Read and parse an inventory document
    pub fn load_file(path: &Path) -> InventoryResult<InventoryFile> {
        if !path.exists() {
            return Err(InventoryError::NotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path).map_err(|source| InventoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(path, &contents)
    }

    /// Parse inventory contents, picking the format from the file extension
    pub fn parse(path: &Path, contents: &str) -> InventoryResult<InventoryFile> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed: Result<InventoryFile, String> = if is_json {
            serde_json::from_str(contents).map_err(|e| e.to_string())
        } else if contents.trim().is_empty() {
            Ok(InventoryFile::default())
        } else {
            serde_yaml::from_str(contents).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| InventoryError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
dependsOn:
  a__b__app:
    - a__b__db
    - a__b__cache
  a__b__db: []
"#;
        let doc = Inventory::parse(Path::new("dependencies.yaml"), yaml).unwrap();
        assert_eq!(doc.depends_on.len(), 2);
        assert_eq!(doc.depends_on["a__b__app"], vec!["a__b__db", "a__b__cache"]);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"dependsOn": {"a__b__app": ["a__b__db"]}}"#;
        let graph = Inventory::parse(Path::new("inv.json"), json)
            .unwrap()
            .into_graph();
        assert!(graph.required_by("a__b__db").unwrap().contains("a__b__app"));
    }

    #[test]
    fn test_empty_yaml_is_empty_inventory() {
        let doc = Inventory::parse(Path::new("dependencies.yaml"), "  \n").unwrap();
        assert!(doc.depends_on.is_empty());
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = Inventory::parse(Path::new("broken.yaml"), "dependsOn: [unclosed").unwrap_err();
        assert!(matches!(err, InventoryError::Parse { .. }));
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn test_inventory_path() {
        assert_eq!(
            Inventory::path(Path::new("src"), "dependencies.yaml"),
            PathBuf::from("src/dependencies.yaml")
        );
        let absolute = std::env::temp_dir().join("inv.yaml");
        assert_eq!(
            Inventory::path(Path::new("src"), absolute.to_str().unwrap()),
            absolute
        );
    }
}
