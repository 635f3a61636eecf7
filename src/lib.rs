//! roledeps library
//!
//! Answers, for one resource of a role repository, which resources depend
//! on it and which resources it depends on, up to a bounded depth. Results
//! are rendered as a sorted list or as an indented tree.

pub mod cli;
pub mod config;
pub mod graph;
pub mod inventory;
pub mod query;
pub mod render;
pub mod resource;

// Re-export commonly used types for convenience
pub use graph::{DependencyGraph, Direction, EdgeSet, traverse};
pub use inventory::{Inventory, InventoryError};
pub use query::{QueryError, QueryOptions, QueryReport, Section, query};
pub use render::{DisplayForm, TreeRequest, render_list, render_tree};
pub use resource::{FsResolver, ResourceResolver, is_mrn, to_path};
