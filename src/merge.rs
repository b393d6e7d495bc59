// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! JSON overlay merge
//!
//! Applies a source object onto a target object key by key:
//!
//! - source object + target object under the same key: recurse
//! - source object + key missing in target: insert the whole object
//! - source scalar, array or null: replace whatever the target holds
//!
//! Keys only present in the target are kept. When the source holds an object
//! but the target holds a non-object under the same key, the recursive call
//! sees a non-object root and does nothing, so the target value survives and
//! the source object is dropped. That case is recorded in [`MergeReport`].

use serde::Serialize;
use serde_json::map::Entry;
use serde_json::Value;

/// What an overlay did to the target, keyed by JSON pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Keys that did not exist in the target and were added
    pub inserted: Vec<String>,
    /// Keys whose target value was replaced by a source scalar/array/null
    pub replaced: Vec<String>,
    /// Source objects discarded because the target held a non-object
    pub dropped: Vec<String>,
}

impl MergeReport {
    /// True when the overlay changed nothing.
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty() && self.replaced.is_empty()
    }
}

/// Overlay `source` onto `target` in place.
///
/// Does nothing unless both roots are objects. The source is never modified.
pub fn override_json(source: &Value, target: &mut Value) {
    let mut report = MergeReport::default();
    overlay(source, target, "", &mut report);
}

/// Same as [`override_json`], also returning what was changed.
pub fn override_json_with_report(source: &Value, target: &mut Value) -> MergeReport {
    let mut report = MergeReport::default();
    overlay(source, target, "", &mut report);
    report
}

/// Overlay `source` onto `target` and return the merged tree.
pub fn merge(source: &Value, mut target: Value) -> Value {
    override_json(source, &mut target);
    target
}

fn overlay(source: &Value, target: &mut Value, pointer: &str, report: &mut MergeReport) {
    let (Value::Object(source_map), Value::Object(target_map)) = (source, target) else {
        return;
    };

    for (key, source_val) in source_map {
        let child = format!("{}/{}", pointer, escape_pointer_token(key));

        match source_val {
            Value::Object(_) => match target_map.entry(key.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(source_val.clone());
                    report.inserted.push(child);
                }
                Entry::Occupied(mut entry) => {
                    if entry.get().is_object() {
                        overlay(source_val, entry.get_mut(), &child, report);
                    } else {
                        report.dropped.push(child);
                    }
                }
            },
            _ => {
                if target_map
                    .insert(key.clone(), source_val.clone())
                    .is_some()
                {
                    report.replaced.push(child);
                } else {
                    report.inserted.push(child);
                }
            }
        }
    }
}

// RFC 6901 escaping so report entries can be fed to `Value::pointer`.
fn escape_pointer_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_objects_are_merged() {
        let source = json!({"a": {"b": 99}, "e": 7});
        let target = json!({"a": {"b": 1, "c": 2}, "d": 5});

        let merged = merge(&source, target);

        assert_eq!(merged, json!({"a": {"b": 99, "c": 2}, "d": 5, "e": 7}));
    }

    #[test]
    fn test_scalar_replaces_object() {
        let source = json!({"x": 42});
        let target = json!({"x": {"y": 1}});

        assert_eq!(merge(&source, target), json!({"x": 42}));
    }

    #[test]
    fn test_array_replaces_array() {
        let source = json!({"list": [3]});
        let target = json!({"list": [1, 2], "other": [9]});

        assert_eq!(merge(&source, target), json!({"list": [3], "other": [9]}));
    }

    #[test]
    fn test_null_overwrites_value() {
        let source = json!({"a": null});
        let target = json!({"a": {"deep": true}, "b": 1});

        // null is a value, not a delete marker
        assert_eq!(merge(&source, target), json!({"a": null, "b": 1}));
    }

    #[test]
    fn test_object_into_missing_key_is_inserted() {
        let source = json!({"new": {"nested": {"k": "v"}}});
        let target = json!({"old": 1});

        assert_eq!(
            merge(&source, target),
            json!({"old": 1, "new": {"nested": {"k": "v"}}})
        );
    }

    #[test]
    fn test_object_onto_scalar_is_dropped() {
        let source = json!({"x": {"y": 1}, "z": 2});
        let mut target = json!({"x": "keep me", "z": 1});

        let report = override_json_with_report(&source, &mut target);

        assert_eq!(target, json!({"x": "keep me", "z": 2}));
        assert_eq!(report.dropped, vec!["/x".to_string()]);
        assert_eq!(report.replaced, vec!["/z".to_string()]);
    }

    #[test]
    fn test_object_onto_array_is_dropped() {
        let source = json!({"x": {"y": 1}});
        let target = json!({"x": [1, 2]});

        assert_eq!(merge(&source, target), json!({"x": [1, 2]}));
    }

    #[test]
    fn test_object_onto_null_is_dropped() {
        let source = json!({"x": {"y": 1}});
        let target = json!({"x": null});

        assert_eq!(merge(&source, target), json!({"x": null}));
    }

    #[test]
    fn test_non_object_roots_are_noop() {
        let target = json!({"a": 1});
        assert_eq!(merge(&json!([1, 2]), target.clone()), target);
        assert_eq!(merge(&json!("str"), target.clone()), target);
        assert_eq!(merge(&json!(null), target.clone()), target);

        let array_target = json!([1, 2, 3]);
        assert_eq!(merge(&json!({"a": 1}), array_target.clone()), array_target);
    }

    #[test]
    fn test_source_is_not_modified() {
        let source = json!({"a": {"b": 1}});
        let before = source.clone();
        let mut target = json!({"a": {"c": 2}});

        override_json(&source, &mut target);

        assert_eq!(source, before);
    }

    #[test]
    fn test_deep_merge_three_levels() {
        let source = json!({"l1": {"l2": {"l3": {"x": 1}, "y": 2}}});
        let target = json!({"l1": {"l2": {"l3": {"z": 0}, "w": 3}, "v": 4}});

        assert_eq!(
            merge(&source, target),
            json!({"l1": {"l2": {"l3": {"x": 1, "z": 0}, "y": 2, "w": 3}, "v": 4}})
        );
    }

    #[test]
    fn test_empty_source_object_leaves_target() {
        let target = json!({"a": {"b": 1}});
        let mut merged = target.clone();

        let report = override_json_with_report(&json!({}), &mut merged);

        assert_eq!(merged, target);
        assert!(report.is_empty());
    }

    #[test]
    fn test_empty_nested_source_object_keeps_target_object() {
        let source = json!({"a": {}});
        let target = json!({"a": {"b": 1}});

        assert_eq!(merge(&source, target), json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_report_pointers_are_escaped() {
        let source = json!({"a/b": 1, "c~d": {"e": 2}});
        let mut target = json!({"c~d": {}});

        let report = override_json_with_report(&source, &mut target);

        assert!(report.inserted.contains(&"/a~1b".to_string()));
        assert!(report.inserted.contains(&"/c~0d/e".to_string()));
        for pointer in &report.inserted {
            assert!(target.pointer(pointer).is_some());
        }
    }

    #[test]
    fn test_idempotent() {
        let source = json!({"a": {"b": [1, 2]}, "c": {"d": null}, "e": "s"});
        let target = json!({"a": {"x": 1}, "c": 5, "f": false});

        let once = merge(&source, target);
        let twice = merge(&source, once.clone());

        assert_eq!(once, twice);
    }
}
