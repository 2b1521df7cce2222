//! Resolves a parsed property path against a document.

use serde_json::Value;
use tracing::trace;

use crate::error::PathError;
use crate::types::{Location, PropertyPath, Segment};
use crate::value::{kind_name, matches_constraints};

/// How missing structure is treated while resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Only existing values resolve; misses drop silently.
    Read,
    /// Missing objects, lists and list slots resolve as positions to create.
    Write,
}

/// Most null slots a single index write may add to a list.
///
/// `a[i]` on a list of length `n` pads `i - n` nulls before the value; writes
/// that would pad more fail with [`PathError::InvalidTargetPath`].
pub const MAX_LIST_PADDING: usize = 1 << 16;

/// A resolved location and the value currently there, if any.
pub(crate) type Branch<'a> = (Location, Option<&'a Value>);

/// Property path navigator.
pub struct Navigator;

impl Navigator {
    /// Resolve `path` to concrete locations in document order.
    ///
    /// Resolution never mutates `document`. In [`Mode::Write`] a field on an
    /// existing non-object, or an index on an existing non-list, fails with
    /// [`PathError::InvalidTargetPath`]; in [`Mode::Read`] the same branch is
    /// dropped.
    pub fn resolve(
        path: &PropertyPath,
        document: &Value,
        mode: Mode,
    ) -> Result<Vec<Location>, PathError> {
        Ok(Self::resolve_branches(path, document, mode)?
            .into_iter()
            .map(|(location, _)| location)
            .collect())
    }

    pub(crate) fn resolve_branches<'a>(
        path: &PropertyPath,
        document: &'a Value,
        mode: Mode,
    ) -> Result<Vec<Branch<'a>>, PathError> {
        let mut branches: Vec<Branch<'a>> = vec![(Location::root(), Some(document))];

        for segment in &path.segments {
            let mut next = Vec::with_capacity(branches.len());
            for (location, node) in branches {
                Self::step(path, segment, location, node, mode, &mut next)?;
            }
            if next.is_empty() {
                trace!(%path, %segment, ?mode, "path resolved to no locations");
                return Ok(next);
            }
            branches = next;
        }

        Ok(branches)
    }

    fn step<'a>(
        path: &PropertyPath,
        segment: &Segment,
        location: Location,
        node: Option<&'a Value>,
        mode: Mode,
        out: &mut Vec<Branch<'a>>,
    ) -> Result<(), PathError> {
        let write = mode == Mode::Write;
        match segment {
            Segment::Field(name) => match node {
                Some(Value::Object(map)) => {
                    let child = map.get(name);
                    if child.is_some() || write {
                        out.push((location.key(name), child));
                    }
                }
                Some(Value::Null) | None => {
                    if write {
                        out.push((location.key(name), None));
                    }
                }
                Some(other) => {
                    if write {
                        return Err(conflict(path, &location, "an object", other));
                    }
                }
            },
            Segment::Index(index) => match node {
                Some(Value::Array(items)) => {
                    let child = items.get(*index);
                    if child.is_none() && write {
                        check_padding(path, &location, *index, items.len())?;
                    }
                    if child.is_some() || write {
                        out.push((location.index(*index), child));
                    }
                }
                Some(Value::Null) | None => {
                    if write {
                        check_padding(path, &location, *index, 0)?;
                        out.push((location.index(*index), None));
                    }
                }
                Some(other) => {
                    if write {
                        return Err(conflict(path, &location, "a list", other));
                    }
                }
            },
            Segment::Append => match node {
                Some(Value::Array(items)) if write => {
                    out.push((location.index(items.len()), None));
                }
                Some(Value::Array(items)) => {
                    for (idx, item) in items.iter().enumerate() {
                        out.push((location.index(idx), Some(item)));
                    }
                }
                Some(Value::Null) | None => {
                    if write {
                        out.push((location.index(0), None));
                    }
                }
                Some(other) => {
                    if write {
                        return Err(conflict(path, &location, "a list", other));
                    }
                }
            },
            Segment::Filter(constraints) => {
                if let Some(Value::Array(items)) = node {
                    for (idx, item) in items.iter().enumerate() {
                        if matches_constraints(item, constraints) {
                            out.push((location.index(idx), Some(item)));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn check_padding(
    path: &PropertyPath,
    location: &Location,
    index: usize,
    len: usize,
) -> Result<(), PathError> {
    let within_bound = index
        .checked_add(1)
        .is_some_and(|needed| needed - len <= MAX_LIST_PADDING + 1);
    if within_bound {
        return Ok(());
    }
    Err(PathError::target(
        path,
        format!(
            "index {index} at `{location}` would pad the list by more than {MAX_LIST_PADDING} elements"
        ),
    ))
}

fn conflict(path: &PropertyPath, location: &Location, expected: &str, found: &Value) -> PathError {
    let at = if location.is_root() {
        "the document root".to_string()
    } else {
        format!("`{location}`")
    };
    PathError::target(
        path,
        format!("expected {expected} at {at}, found {}", kind_name(found)),
    )
}
