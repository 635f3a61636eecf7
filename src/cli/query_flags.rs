//! Query flags and source selection

use clap::Args;
use std::path::PathBuf;

use crate::config::Config;

/// Command-line flags for a dependency query
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFlags {
    /// Source tree holding the resources
    #[arg(long, short = 's')]
    pub source: Option<String>,

    /// Maximum depth to follow in both directions
    #[arg(long)]
    pub depth: Option<u8>,

    /// Show machine resource names instead of paths
    #[arg(long)]
    pub mrn: bool,

    /// Show results as a tree
    #[arg(long)]
    pub tree: bool,

    /// Inventory file, relative to the source tree unless absolute
    #[arg(long)]
    pub inventory: Option<String>,
}

impl QueryFlags {
    /// Apply the flags on top of the loaded configuration
    ///
    /// `--mrn` and `--tree` can only switch an option on; the source is
    /// consumed by the config loader.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if self.mrn {
            config.display.mrn = true;
        }
        if self.tree {
            config.display.tree = true;
        }
        if let Some(ref inventory) = self.inventory {
            config.inventory.file = inventory.clone();
        }
        config
    }
}

/// Use the configured source tree, or the current directory if it is missing
pub fn select_source(source: &str) -> PathBuf {
    let path = PathBuf::from(source);
    if path.exists() {
        tracing::info!("Selected source is {}", source);
        path
    } else {
        tracing::warn!("{} doesn't exist, fallback to current dir", source);
        PathBuf::from(".")
    }
}
