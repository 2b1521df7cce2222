//! Path enumeration entry points.

use std::collections::BTreeSet;

use crate::error::JsonUtilsError;
use crate::source::Source;

/// Lists the leaf paths of a document.
///
/// For
///
/// ```json
/// {"name": "James Butt", "friends": [{"name": "Josephine Darakjy"}, {"name": "Art Venere"}]}
/// ```
///
/// [`JsonPath::get_all_paths`] yields `friends[0].name`, `friends[1].name`,
/// `name`, and [`JsonPath::get_all_unique_paths`] yields `friends[].name`,
/// `name`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonPath;

impl JsonPath {
    /// Sorted concrete leaf paths; list positions repeat per element.
    pub fn get_all_paths(source: impl Source) -> Result<BTreeSet<String>, JsonUtilsError> {
        let document = source.into_document()?;
        Ok(json_utils_path::all_paths(&document))
    }

    /// Sorted leaf paths with list indices collapsed to `[]`.
    pub fn get_all_unique_paths(source: impl Source) -> Result<BTreeSet<String>, JsonUtilsError> {
        let document = source.into_document()?;
        Ok(json_utils_path::unique_paths(&document))
    }
}
