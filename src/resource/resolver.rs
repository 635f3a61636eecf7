//! Path to MRN resolution against a source tree

use std::path::{Component, Path};

use super::{ROLES_DIR, from_segments};

/// Maps a filesystem path to the MRN of the resource it points at
#[cfg_attr(test, mockall::automock)]
pub trait ResourceResolver {
    /// Return the MRN for `target`, or `None` when it is not a known resource
    fn resource_from_path(&self, target: &str, source_root: &Path) -> Option<String>;
}

/// Resolver backed by the directory layout of a source tree
///
/// A resource lives at `<source>/<namespace>/<collection>/roles/<role>`.
/// Paths pointing inside a role directory (for example at its `meta/`
/// folder) resolve to the enclosing role.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsResolver;

impl FsResolver {
    pub fn new() -> Self {
        Self
    }
}

impl ResourceResolver for FsResolver {
    fn resource_from_path(&self, target: &str, source_root: &Path) -> Option<String> {
        let target_path = Path::new(target);
        let relative = target_path.strip_prefix(source_root).unwrap_or(target_path);

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => segments.push(segment.to_str()?),
                Component::CurDir => {}
                // Absolute paths outside the source root and parent hops
                // cannot name a resource inside it.
                _ => return None,
            }
        }

        let [namespace, collection, roles, role, ..] = segments.as_slice() else {
            tracing::debug!("'{}' is too short to be a resource path", target);
            return None;
        };
        if *roles != ROLES_DIR {
            tracing::debug!("'{}' has no '{}' component", target, ROLES_DIR);
            return None;
        }

        let role_dir = source_root
            .join(namespace)
            .join(collection)
            .join(ROLES_DIR)
            .join(role);
        if !role_dir.is_dir() {
            tracing::debug!("Resource directory {} does not exist", role_dir.display());
            return None;
        }

        Some(from_segments(namespace, collection, role))
    }
}
