//! Sorter configuration: which lists to reorder, and by which field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maps a structural list path to the element field that orders it.
///
/// A list path is the path of the list with every index written `[]` and a
/// trailing `[]`: `friends[]`, `friends[].associatedAddresses[]`, or `[]`
/// for a root list. One entry governs every occurrence of the list at that
/// position.
///
/// Serialized as a plain map, so it loads from JSON or TOML:
///
/// ```
/// use json_utils_sort::ListKeys;
///
/// let keys: ListKeys = serde_json::from_str(r#"{"friends[]": "name"}"#).unwrap();
/// assert_eq!(keys.field_for("friends[]"), Some("name"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListKeys(BTreeMap<String, String>);

impl ListKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`ListKeys::insert`].
    pub fn with(mut self, list_path: impl Into<String>, field: impl Into<String>) -> Self {
        self.insert(list_path, field);
        self
    }

    /// Order the list at `list_path` by `field`, replacing any earlier entry.
    pub fn insert(&mut self, list_path: impl Into<String>, field: impl Into<String>) -> Option<String> {
        self.0.insert(list_path.into(), field.into())
    }

    /// Field that orders the list at `list_path`, if configured.
    pub fn field_for(&self, list_path: &str) -> Option<&str> {
        self.0.get(list_path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ListKeys
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<BTreeMap<String, String>> for ListKeys {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}
