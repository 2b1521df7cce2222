//! Reads values through a property path.

use serde_json::Value;

use crate::error::PathError;
use crate::navigator::{Mode, Navigator};
use crate::parser::parse;
use crate::types::PropertyPath;

/// Value at `path`, or `None` when nothing matches.
///
/// When filters or `[]` markers fan out to several values, the first one in
/// document order is returned; see [`get_all`] for every match.
pub fn get<'a>(path: &str, document: &'a Value) -> Result<Option<&'a Value>, PathError> {
    get_path(&parse(path)?, document)
}

/// Every value at `path`, in document order.
pub fn get_all<'a>(path: &str, document: &'a Value) -> Result<Vec<&'a Value>, PathError> {
    get_all_path(&parse(path)?, document)
}

/// [`get`] for an already parsed path.
pub fn get_path<'a>(
    path: &PropertyPath,
    document: &'a Value,
) -> Result<Option<&'a Value>, PathError> {
    Ok(get_all_path(path, document)?.into_iter().next())
}

/// [`get_all`] for an already parsed path.
pub fn get_all_path<'a>(
    path: &PropertyPath,
    document: &'a Value,
) -> Result<Vec<&'a Value>, PathError> {
    let branches = Navigator::resolve_branches(path, document, Mode::Read)?;
    Ok(branches.into_iter().filter_map(|(_, node)| node).collect())
}
