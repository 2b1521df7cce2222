//! Writes values through a property path, creating missing structure.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::PathError;
use crate::navigator::{Mode, Navigator};
use crate::parser::parse;
use crate::types::{Location, PathComponent, PropertyPath, Segment};
use crate::value::kind_name;

/// Set `value` at `path`, mutating `document` in place.
///
/// Returns the number of locations written. A filter that matches nothing
/// writes nowhere and returns `Ok(0)`. On error the document is unchanged.
pub fn set(path: &str, document: &mut Value, value: Value) -> Result<usize, PathError> {
    let path = parse(path)?;
    set_path(&path, document, value)
}

/// [`set`] for an already parsed path.
pub fn set_path(path: &PropertyPath, document: &mut Value, value: Value) -> Result<usize, PathError> {
    if document.is_null() {
        return Err(PathError::MissingRequiredArgument("document"));
    }
    match path.segments.last() {
        None => return Err(PathError::MissingRequiredArgument("path")),
        Some(Segment::Filter(_)) => {
            return Err(PathError::target(
                path,
                "found the element in this path, but assigning a value also needs a key",
            ))
        }
        Some(_) => {}
    }

    let locations = Navigator::resolve(path, document, Mode::Write)?;
    let Some((last, rest)) = locations.split_last() else {
        debug!(%path, "filter matched no elements, document left unchanged");
        return Ok(0);
    };
    debug!(%path, locations = locations.len(), "writing value");

    for location in rest {
        *materialize(path, document, location)? = value.clone();
    }
    *materialize(path, document, last)? = value;
    Ok(locations.len())
}

/// Walk to `location`, creating objects, lists and null padding on the way.
fn materialize<'a>(
    path: &PropertyPath,
    document: &'a mut Value,
    location: &Location,
) -> Result<&'a mut Value, PathError> {
    let mut node = document;
    for component in location.components() {
        node = match component {
            PathComponent::Key(key) => {
                if node.is_null() {
                    *node = Value::Object(Map::new());
                }
                match node {
                    Value::Object(map) => map.entry(key.clone()).or_insert(Value::Null),
                    other => {
                        return Err(PathError::target(
                            path,
                            format!("cannot set key `{key}` on {}", kind_name(other)),
                        ))
                    }
                }
            }
            PathComponent::Index(index) => {
                if node.is_null() {
                    *node = Value::Array(Vec::new());
                }
                match node {
                    Value::Array(items) => {
                        if items.len() <= *index {
                            let len = index.checked_add(1).ok_or_else(|| {
                                PathError::target(path, format!("index {index} is out of range"))
                            })?;
                            trace!(%path, from = items.len(), to = len, "padding list");
                            items.resize(len, Value::Null);
                        }
                        &mut items[*index]
                    }
                    other => {
                        return Err(PathError::target(
                            path,
                            format!("cannot set index {index} on {}", kind_name(other)),
                        ))
                    }
                }
            }
        };
    }
    Ok(node)
}
