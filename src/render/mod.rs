//! Text rendering of traversal results
//!
//! Both renderers sort by the raw MRN before converting anything for
//! display, so the output order never depends on the chosen form or on
//! hash map iteration order.

mod list;
mod tree;

pub use list::render_list;
pub use tree::{TreeRequest, render_tree};

use crate::resource;

/// How resources are shown in rendered output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayForm {
    /// `namespace__collection__role`
    Mrn,
    /// `namespace/collection/roles/role`
    #[default]
    Path,
}

impl DisplayForm {
    /// Pick the form from the `--mrn` style flag
    pub fn from_mrn_flag(show_mrn: bool) -> Self {
        if show_mrn { Self::Mrn } else { Self::Path }
    }

    /// Format a resource for display
    pub fn display(self, mrn: &str) -> String {
        match self {
            Self::Mrn => mrn.to_string(),
            Self::Path => resource::to_path(mrn),
        }
    }
}
