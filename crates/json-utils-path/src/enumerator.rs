//! Enumerates the leaf paths of a document.
//!
//! Object keys join with `.`, list elements append `[i]`. Only leaves
//! (scalars and null) are recorded; empty containers contribute nothing.

use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Every concrete leaf path, sorted: `friends[0].name`, `friends[1].name`.
pub fn all_paths(document: &Value) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    walk(document, &mut String::new(), IndexStyle::Concrete, &mut |path, _| {
        paths.insert(path.to_string());
    });
    paths
}

/// Leaf paths with list indices collapsed to `[]`: `friends[].name`.
pub fn unique_paths(document: &Value) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    walk(document, &mut String::new(), IndexStyle::Collapsed, &mut |path, _| {
        if !paths.contains(path) {
            paths.insert(path.to_string());
        }
    });
    paths
}

/// Every concrete leaf path mapped to its value.
pub fn all_properties(document: &Value) -> BTreeMap<String, &Value> {
    let mut properties = BTreeMap::new();
    walk(document, &mut String::new(), IndexStyle::Concrete, &mut |path, value| {
        properties.insert(path.to_string(), value);
    });
    properties
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndexStyle {
    Concrete,
    Collapsed,
}

fn walk<'a, F>(value: &'a Value, prefix: &mut String, style: IndexStyle, visit: &mut F)
where
    F: FnMut(&str, &'a Value),
{
    let base = prefix.len();
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(key);
                walk(child, prefix, style, visit);
                prefix.truncate(base);
            }
        }
        Value::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                prefix.push('[');
                if style == IndexStyle::Concrete {
                    prefix.push_str(&idx.to_string());
                }
                prefix.push(']');
                walk(child, prefix, style, visit);
                prefix.truncate(base);
            }
        }
        leaf => {
            if !prefix.is_empty() {
                visit(prefix.as_str(), leaf);
            }
        }
    }
}
