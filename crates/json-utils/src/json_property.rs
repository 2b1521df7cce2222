//! Property read/write entry points over JSON text or models.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::JsonUtilsError;
use crate::source::Source;

/// Reads and writes leaf properties addressed by property paths.
///
/// Path forms:
///
/// 1. `name` - field at the root
/// 2. `primaryAddress.street` - field of a nested object
/// 3. `associatedAddresses[]` - append a value to a list
/// 4. `associatedAddresses[1]` - write position 1, overwriting what is there
/// 5. `associatedAddresses[{state=CA}].street` - every address in CA
/// 6. `associatedAddresses[{state:CA}, {zip:94599}].street` - both must hold
/// 7. `friends[{name=Art Venere}].associatedAddresses[{state=CA}].street`
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonProperty;

impl JsonProperty {
    /// Every leaf path mapped to its value.
    pub fn get_all_properties(source: impl Source) -> Result<BTreeMap<String, Value>, JsonUtilsError> {
        let document = source.into_document()?;
        Ok(json_utils_path::all_properties(&document)
            .into_iter()
            .map(|(path, value)| (path, value.clone()))
            .collect())
    }

    /// Value at `path`, `None` when nothing matches.
    pub fn get_property(path: &str, source: impl Source) -> Result<Option<Value>, JsonUtilsError> {
        let document = source.into_document()?;
        Ok(json_utils_path::get(path, &document)?.cloned())
    }

    /// Write `value` at `path` and return the updated document, pretty
    /// printed.
    pub fn set_property<V>(path: &str, source: impl Source, value: V) -> Result<String, JsonUtilsError>
    where
        V: Serialize,
    {
        if path.is_empty() {
            return Err(JsonUtilsError::MissingRequiredArgument("path"));
        }
        let mut document = source.into_document()?;
        let value = serde_json::to_value(value)?;
        let written = json_utils_path::set(path, &mut document, value)?;
        debug!(path, written, "property set");
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
