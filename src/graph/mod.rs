//! Dependency graph between resources
//!
//! A single directed graph seen from two directions: `DependsOn` follows the
//! edges a resource declares, `RequiredBy` follows them backwards. Both
//! adjacency maps are built together so that one is always the transpose of
//! the other.

mod traversal;

pub use traversal::traverse;

use indexmap::IndexSet;
use std::collections::HashMap;

/// Ordered, duplicate-free set of directly connected resources
pub type EdgeSet = IndexSet<String>;

/// Direction in which edges are followed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Resources the start resource requires
    DependsOn,
    /// Resources that require the start resource
    RequiredBy,
}

impl Direction {
    /// Section label used when printing results for this direction
    pub fn label(self) -> &'static str {
        match self {
            Direction::DependsOn => "Dependencies:",
            Direction::RequiredBy => "Dependent resources:",
        }
    }
}

/// Read-only snapshot of resource dependencies
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyGraph {
    depends_on: HashMap<String, EdgeSet>,
    required_by: HashMap<String, EdgeSet>,
}

impl DependencyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from forward edges, deriving the reverse ones
    pub fn from_depends_on<I, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, D)>,
        D: IntoIterator<Item = String>,
    {
        let mut graph = Self::new();
        for (resource, dependencies) in entries {
            graph.add_resource(&resource);
            for dependency in dependencies {
                graph.add_dependency(&resource, &dependency);
            }
        }
        graph
    }

    /// Register a resource with no edges
    pub fn add_resource(&mut self, resource: &str) {
        self.depends_on.entry(resource.to_string()).or_default();
    }

    /// Record that `resource` directly requires `dependency`
    ///
    /// Repeated edges are ignored; the first insertion fixes the order.
    pub fn add_dependency(&mut self, resource: &str, dependency: &str) {
        self.depends_on
            .entry(resource.to_string())
            .or_default()
            .insert(dependency.to_string());
        self.required_by
            .entry(dependency.to_string())
            .or_default()
            .insert(resource.to_string());
    }

    /// Direct neighbours of `resource` in the given direction
    pub fn edges(&self, direction: Direction, resource: &str) -> Option<&EdgeSet> {
        self.adjacency(direction).get(resource)
    }

    /// Whole adjacency map for one direction
    pub fn adjacency(&self, direction: Direction) -> &HashMap<String, EdgeSet> {
        match direction {
            Direction::DependsOn => &self.depends_on,
            Direction::RequiredBy => &self.required_by,
        }
    }

    /// Resources that require `resource` directly
    pub fn required_by(&self, resource: &str) -> Option<&EdgeSet> {
        self.edges(Direction::RequiredBy, resource)
    }

    /// Resources `resource` requires directly
    pub fn depends_on(&self, resource: &str) -> Option<&EdgeSet> {
        self.edges(Direction::DependsOn, resource)
    }

    /// Whether the resource appears anywhere in the graph
    pub fn contains(&self, resource: &str) -> bool {
        self.depends_on.contains_key(resource) || self.required_by.contains_key(resource)
    }

    /// Number of distinct resources in the graph
    pub fn resource_count(&self) -> usize {
        self.depends_on
            .keys()
            .chain(self.required_by.keys())
            .collect::<std::collections::HashSet<_>>()
            .len()
    }
}
