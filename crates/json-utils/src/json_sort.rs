//! Sorting entry points.

use json_utils_sort::ListKeys;

use crate::error::JsonUtilsError;
use crate::source::Source;

/// Sorts a document and pretty prints it.
///
/// To order a list of objects by one of their fields, name the list in
/// [`ListKeys`]: for
///
/// ```json
/// {"members": [{"name": "John", "age": 22}, {"name": "Bob", "age": 18}]}
/// ```
///
/// `members[] -> name` puts Bob first, `members[] -> age` orders by age.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSort;

impl JsonSort {
    /// Object keys in ascending order; list order untouched.
    pub fn sort(source: impl Source) -> Result<String, JsonUtilsError> {
        Self::sort_with(source, &ListKeys::default())
    }

    /// Object keys in ascending order and configured lists ordered by field.
    pub fn sort_with(source: impl Source, list_keys: &ListKeys) -> Result<String, JsonUtilsError> {
        let document = source.into_document()?;
        let sorted = json_utils_sort::sort(&document, list_keys);
        Ok(serde_json::to_string_pretty(&sorted)?)
    }
}
