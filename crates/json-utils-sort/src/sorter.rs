//! Canonical document ordering.

use json_utils_path::value::{lookup_field, scalar_to_string};
use serde_json::{Map, Value};
use tracing::trace;

use crate::list_keys::ListKeys;

/// Sorted copy of `document`.
///
/// Object keys are rebuilt in ascending order. A list whose structural path
/// is configured in `list_keys` is stably reordered by the string form of the
/// configured field; elements without that field come first. Other lists
/// keep their order, but their contents are still sorted.
pub fn sort(document: &Value, list_keys: &ListKeys) -> Value {
    JsonSorter::new(list_keys).sort(document)
}

/// [`sort`] without list keys: only object keys are reordered.
pub fn sort_keys(document: &Value) -> Value {
    sort(document, &ListKeys::default())
}

/// Sorter bound to one configuration.
#[derive(Debug, Clone, Copy)]
pub struct JsonSorter<'a> {
    list_keys: &'a ListKeys,
}

impl<'a> JsonSorter<'a> {
    pub fn new(list_keys: &'a ListKeys) -> Self {
        Self { list_keys }
    }

    pub fn sort(&self, document: &Value) -> Value {
        self.sort_value(document, &mut String::new())
    }

    /// `path` is the structural path of `value`, indices written `[]`.
    fn sort_value(&self, value: &Value, path: &mut String) -> Value {
        let base = path.len();
        match value {
            Value::Object(map) => {
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();
                let mut sorted = Map::with_capacity(map.len());
                for key in keys {
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(key);
                    sorted.insert(key.clone(), self.sort_value(&map[key.as_str()], path));
                    path.truncate(base);
                }
                Value::Object(sorted)
            }
            Value::Array(items) => {
                path.push_str("[]");
                let mut sorted: Vec<Value> = items
                    .iter()
                    .map(|item| self.sort_value(item, path))
                    .collect();
                if let Some(field) = self.list_keys.field_for(path) {
                    trace!(list = %path, field, len = sorted.len(), "ordering list");
                    sorted.sort_by_cached_key(|item| sort_key(item, field));
                }
                path.truncate(base);
                Value::Array(sorted)
            }
            scalar => scalar.clone(),
        }
    }
}

/// `None` sorts before every present value.
fn sort_key(item: &Value, field: &str) -> Option<String> {
    lookup_field(item, field)
        .and_then(scalar_to_string)
        .map(|s| s.into_owned())
}
