//! Dependency queries
//!
//! Answers "what depends on this resource" and "what does it depend on"
//! for a single target, rendering each non-empty direction as a list or a
//! tree. All validation happens before anything is rendered, so a failed
//! query never produces partial output.

use std::io::Write;
use std::path::Path;

use crate::graph::{DependencyGraph, Direction, traverse};
use crate::render::{DisplayForm, TreeRequest, render_list, render_tree};
use crate::resource::{self, ResourceResolver};

/// Query errors
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("depth value should not be zero")]
    InvalidDepth,

    #[error("not valid resource {0:?}")]
    ResourceNotFound(String),
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// How a query walks the graph and renders its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub depth: u8,
    pub form: DisplayForm,
    pub tree: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            depth: 99,
            form: DisplayForm::Path,
            tree: false,
        }
    }
}

/// Rendered lines for one direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub direction: Direction,
    pub lines: Vec<String>,
}

/// Answer to a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryReport {
    /// Target resolved to an MRN
    pub resource: String,
    /// Resources requiring the target, if any
    pub ancestors: Option<Section>,
    /// Resources the target requires, if any
    pub descendants: Option<Section>,
}

impl QueryReport {
    /// Sections in output order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.ancestors.iter().chain(self.descendants.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.ancestors.is_none() && self.descendants.is_none()
    }

    /// Write each section under its label, one line at a time
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for section in self.sections() {
            writeln!(out, "{}", section.direction.label())?;
            for line in &section.lines {
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }
}

/// Run a dependency query for `target`
///
/// Fails with [`QueryError::InvalidDepth`] for a zero depth and with
/// [`QueryError::ResourceNotFound`] when `target` is neither an MRN nor a
/// path the resolver recognises.
pub fn query(
    target: &str,
    source_root: &Path,
    options: QueryOptions,
    graph: &DependencyGraph,
    resolver: &dyn ResourceResolver,
) -> QueryResult<QueryReport> {
    if options.depth == 0 {
        return Err(QueryError::InvalidDepth);
    }

    let resource = resource::resolve(target, source_root, resolver)?;
    if !graph.contains(&resource) {
        tracing::debug!("{} has no recorded edges", resource);
    }

    let header = options.form.display(&resource);
    let ancestors = render_direction(graph, Direction::RequiredBy, &resource, &header, options);
    let descendants = render_direction(graph, Direction::DependsOn, &resource, &header, options);

    Ok(QueryReport {
        resource,
        ancestors,
        descendants,
    })
}

fn render_direction(
    graph: &DependencyGraph,
    direction: Direction,
    resource: &str,
    header: &str,
    options: QueryOptions,
) -> Option<Section> {
    let reached = traverse(graph, direction, resource, options.depth);
    if reached.is_empty() {
        return None;
    }

    let lines = if options.tree {
        render_tree(
            graph,
            direction,
            &TreeRequest {
                header,
                start: resource,
                depth_limit: options.depth,
                form: options.form,
            },
        )
    } else {
        render_list(&reached, options.form)
    };

    Some(Section { direction, lines })
}
