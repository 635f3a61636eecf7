//! Resource identifier normalization
//!
//! Resources are addressed either by their machine resource name (MRN),
//! `namespace__collection__role`, or by the directory that holds them in a
//! source tree, `namespace/collection/roles/role`. Traversal and rendering
//! always work on MRNs; the path form is only ever produced for display.

mod resolver;

pub use resolver::{FsResolver, ResourceResolver};

#[cfg(test)]
pub use resolver::MockResourceResolver;

use std::path::Path;

use crate::query::{QueryError, QueryResult};

/// Separator between the three MRN segments
pub const MRN_DELIMITER: &str = "__";

/// Path component inserted before the role segment in path form
pub const ROLES_DIR: &str = "roles";

/// Check whether `target` is a machine resource name
///
/// An MRN splits on `__` into exactly three non-empty segments.
pub fn is_mrn(target: &str) -> bool {
    let parts: Vec<&str> = target.split(MRN_DELIMITER).collect();
    parts.len() == 3 && parts.iter().all(|part| !part.is_empty())
}

/// Convert an MRN into its path form, `seg1/seg2/roles/seg3`
///
/// The caller is expected to have checked the input with [`is_mrn`]. Inputs
/// with a different segment count are returned unchanged.
pub fn to_path(mrn: &str) -> String {
    let parts: Vec<&str> = mrn.split(MRN_DELIMITER).collect();
    match parts.as_slice() {
        [namespace, collection, role] => {
            format!("{namespace}/{collection}/{ROLES_DIR}/{role}")
        }
        _ => mrn.to_string(),
    }
}

/// Build an MRN from its three segments
pub fn from_segments(namespace: &str, collection: &str, role: &str) -> String {
    [namespace, collection, role].join(MRN_DELIMITER)
}

/// Resolve a user-supplied target into an MRN
///
/// Targets already in MRN form are returned unchanged. Anything else is
/// handed to `resolver` as a path under `source_root`; a target the resolver
/// cannot map fails with [`QueryError::ResourceNotFound`].
pub fn resolve(
    target: &str,
    source_root: &Path,
    resolver: &dyn ResourceResolver,
) -> QueryResult<String> {
    if is_mrn(target) {
        return Ok(target.to_string());
    }

    tracing::debug!(
        "'{}' is not an MRN, resolving it as a path under {}",
        target,
        source_root.display()
    );

    resolver
        .resource_from_path(target, source_root)
        .ok_or_else(|| QueryError::ResourceNotFound(target.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_is_mrn() {
        assert!(is_mrn("platform__foundation__cluster"));
        assert!(is_mrn("a__b__c"));
        assert!(!is_mrn("a__b"));
        assert!(!is_mrn("a__b__c__d"));
        assert!(!is_mrn("platform/foundation/roles/cluster"));
        assert!(!is_mrn(""));
    }

    #[test]
    fn test_is_mrn_rejects_empty_segments() {
        assert!(!is_mrn("__b__c"));
        assert!(!is_mrn("a____c"));
        assert!(!is_mrn("a__b__"));
    }

    #[test]
    fn test_to_path() {
        assert_eq!(
            to_path("platform__foundation__cluster"),
            "platform/foundation/roles/cluster"
        );
        assert_eq!(to_path("a__b__c"), "a/b/roles/c");
    }

    #[test]
    fn test_from_segments_round_trips_through_to_path() {
        let mrn = from_segments("interaction", "observability", "grafana");
        assert!(is_mrn(&mrn));
        assert_eq!(to_path(&mrn), "interaction/observability/roles/grafana");
    }

    #[test]
    fn test_resolve_keeps_mrn_without_calling_resolver() {
        let mut resolver = MockResourceResolver::new();
        resolver.expect_resource_from_path().never();

        let resolved = resolve("a__b__c", Path::new("."), &resolver).unwrap();
        assert_eq!(resolved, "a__b__c");
    }

    #[test]
    fn test_resolve_delegates_paths() {
        let mut resolver = MockResourceResolver::new();
        resolver
            .expect_resource_from_path()
            .with(eq("a/b/roles/c"), eq(Path::new("src")))
            .times(1)
            .returning(|_, _| Some("a__b__c".to_string()));

        let resolved = resolve("a/b/roles/c", Path::new("src"), &resolver).unwrap();
        assert_eq!(resolved, "a__b__c");
    }

    #[test]
    fn test_resolve_malformed_mrn_falls_through_to_resolver() {
        let mut resolver = MockResourceResolver::new();
        resolver
            .expect_resource_from_path()
            .times(1)
            .returning(|_, _| None);

        let err = resolve("a__b", Path::new("."), &resolver).unwrap_err();
        assert!(matches!(err, QueryError::ResourceNotFound(ref t) if t == "a__b"));
    }
}
