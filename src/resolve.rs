//! Key path resolution
//!
//! `resolve` walks a slash-delimited path through nested mappings and fails
//! with `PathError::NotFound` at the first missing key. `resolve_safe` maps
//! that failure to `None`.
//!
//! A falsy root or an empty path short-circuits to `Ok(None)` before any
//! lookup. This differs from a missing key on a non-empty root, which is an
//! error; callers rely on both behaviours.

use tracing::{debug, trace};

use crate::error::PathError;
use crate::node::Node;
use crate::path::KeyPath;

/// Resolve `path` against `root`
///
/// - `Ok(Some(v))`: every segment matched; `v` may be any value, null included
/// - `Ok(None)`: `root` is falsy or `path` is empty, nothing was looked up
/// - `Err(NotFound)`: a segment is missing or its parent is not a mapping
pub fn resolve<'a, V: Node>(root: &'a V, path: &str) -> Result<Option<&'a V>, PathError> {
    if !root.is_truthy() || path.is_empty() {
        return Ok(None);
    }

    resolve_path(root, &KeyPath::parse(path)).map(Some)
}

/// Like `resolve`, but a missing key yields `None` instead of an error
pub fn resolve_safe<'a, V: Node>(root: &'a V, path: &str) -> Option<&'a V> {
    resolve(root, path).ok().flatten()
}

/// Walk pre-parsed segments from `root`
///
/// No short-circuit here: an empty path returns `root` itself.
pub fn resolve_path<'a, V: Node>(root: &'a V, path: &KeyPath) -> Result<&'a V, PathError> {
    let mut current = root;

    for segment in path.segments() {
        match current.child(segment) {
            Some(next) => {
                trace!(segment = %segment, "descend");
                current = next;
            }
            None => {
                debug!(
                    path = %path,
                    segment = %segment,
                    found = current.kind(),
                    "key path not found"
                );
                return Err(PathError::NotFound {
                    path: path.to_string(),
                    segment: segment.clone(),
                });
            }
        }
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_nested_string() {
        let obj = json!({"a": {"b": {"c": "d"}}});
        assert_eq!(resolve(&obj, "a/b/c").unwrap(), Some(&json!("d")));
    }

    #[test]
    fn resolve_returns_intermediate_container() {
        let obj = json!({"a": {"b": {"c": "d"}}});
        assert_eq!(resolve(&obj, "a/b").unwrap(), Some(&json!({"c": "d"})));
    }

    #[test]
    fn resolve_missing_leaf_names_segment() {
        let obj = json!({"a": {"b": {"c": "d"}}});
        let err = resolve(&obj, "a/b/nonexistent").unwrap_err();
        match err {
            PathError::NotFound { path, segment } => {
                assert_eq!(path, "a/b/nonexistent");
                assert_eq!(segment, "nonexistent");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn resolve_through_scalar_fails_at_next_segment() {
        let obj = json!({"a": {"b": "leaf"}});
        let err = resolve(&obj, "a/b/c").unwrap_err();
        assert_eq!(err.failed_segment(), Some("c"));
    }

    #[test]
    fn resolve_null_value_is_found() {
        let obj = json!({"a": {"b": null}});
        assert_eq!(resolve(&obj, "a/b").unwrap(), Some(&json!(null)));
        assert_eq!(resolve_safe(&obj, "a/b"), Some(&json!(null)));
    }

    #[test]
    fn resolve_falsy_leaves_are_found() {
        let obj = json!({"zero": 0, "no": false, "empty": "", "list": [], "map": {}});
        for key in ["zero", "no", "empty", "list", "map"] {
            assert_eq!(resolve(&obj, key).unwrap(), Some(&obj[key]));
        }
    }

    #[test]
    fn empty_path_short_circuits() {
        let obj = json!({"a": 1});
        assert_eq!(resolve(&obj, "").unwrap(), None);
        assert_eq!(resolve_safe(&obj, ""), None);
    }

    #[test]
    fn falsy_root_short_circuits() {
        for root in [json!({}), json!(null), json!(0), json!(""), json!([])] {
            assert_eq!(resolve(&root, "a/b/c").unwrap(), None);
        }
    }

    #[test]
    fn truthy_scalar_root_fails() {
        let root = json!("text");
        assert_eq!(resolve(&root, "a").unwrap_err().failed_segment(), Some("a"));
    }

    #[test]
    fn empty_segment_needs_empty_key() {
        let obj = json!({"a": {"b": 1}});
        assert_eq!(resolve(&obj, "a//b").unwrap_err().failed_segment(), Some(""));

        let with_empty_key = json!({"a": {"": {"b": 1}}});
        assert_eq!(resolve(&with_empty_key, "a//b").unwrap(), Some(&json!(1)));
    }

    #[test]
    fn resolve_path_empty_returns_root() {
        let obj = json!({"a": 1});
        assert_eq!(resolve_path(&obj, &KeyPath::default()).unwrap(), &obj);
    }
}
