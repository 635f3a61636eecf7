//! Query command handler

use anyhow::Result;

use crate::config::Config;
use crate::inventory::Inventory;
use crate::query::{QueryError, QueryOptions, QueryReport, query};
use crate::render::DisplayForm;
use crate::resource::{self, FsResolver};

use super::select_source;

/// Run a dependency query with a fully merged configuration
///
/// The depth and the target are validated before the inventory is read,
/// so a bad target is reported as such even when the inventory is missing.
pub fn run_query(target: &str, config: &Config) -> Result<QueryReport> {
    if config.depth == 0 {
        return Err(QueryError::InvalidDepth.into());
    }

    let source = select_source(&config.source);
    let resolver = FsResolver::new();
    let mrn = resource::resolve(target, &source, &resolver)?;
    let graph = Inventory::load(&source, &config.inventory.file)?;
    tracing::debug!(
        "Inventory holds {} resources, querying {}",
        graph.resource_count(),
        mrn
    );

    let options = QueryOptions {
        depth: config.depth,
        form: DisplayForm::from_mrn_flag(config.display.mrn),
        tree: config.display.tree,
    };
    Ok(query(&mrn, &source, options, &graph, &resolver)?)
}
