//! Helpers over the `serde_json::Value` document model.

use serde_json::Value;
use std::borrow::Cow;

use crate::types::Constraint;

/// String form of a scalar, as used by filters and list sorting.
///
/// Strings are returned verbatim, numbers in `serde_json`'s canonical form,
/// booleans as `true`/`false` and null as `null`. Containers have no string
/// form.
pub fn scalar_to_string(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(true) => Some(Cow::Borrowed("true")),
        Value::Bool(false) => Some(Cow::Borrowed("false")),
        Value::Null => Some(Cow::Borrowed("null")),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Looks up `key` on an object.
///
/// A literal key wins; otherwise a dotted key (`address.state`) descends
/// through nested objects.
pub fn lookup_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let map = value.as_object()?;
    if let Some(found) = map.get(key) {
        return Some(found);
    }
    if !key.contains('.') {
        return None;
    }
    let mut node = value;
    for part in key.split('.') {
        node = node.as_object()?.get(part)?;
    }
    Some(node)
}

/// Whether `element` is an object satisfying every constraint.
pub fn matches_constraints(element: &Value, constraints: &[Constraint]) -> bool {
    element.is_object()
        && constraints.iter().all(|constraint| {
            lookup_field(element, &constraint.key)
                .and_then(scalar_to_string)
                .is_some_and(|actual| actual == constraint.expected)
        })
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
