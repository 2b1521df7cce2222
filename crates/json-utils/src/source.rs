//! Ingestion boundary: every input becomes one `serde_json::Value` before
//! the path engine sees it.

use serde::Serialize;
use serde_json::Value;

use crate::error::JsonUtilsError;

/// Something that can be turned into a JSON document.
pub trait Source {
    fn into_document(self) -> Result<Value, JsonUtilsError>;
}

impl Source for &str {
    fn into_document(self) -> Result<Value, JsonUtilsError> {
        if self.trim().is_empty() {
            return Err(JsonUtilsError::MissingRequiredArgument("document"));
        }
        Ok(serde_json::from_str(self)?)
    }
}

impl Source for &String {
    fn into_document(self) -> Result<Value, JsonUtilsError> {
        self.as_str().into_document()
    }
}

impl Source for String {
    fn into_document(self) -> Result<Value, JsonUtilsError> {
        self.as_str().into_document()
    }
}

impl Source for Value {
    fn into_document(self) -> Result<Value, JsonUtilsError> {
        Ok(self)
    }
}

impl Source for &Value {
    fn into_document(self) -> Result<Value, JsonUtilsError> {
        Ok(self.clone())
    }
}

/// An application object, mapped through its `Serialize` impl.
///
/// ```
/// use json_utils::{JsonPath, Model};
///
/// #[derive(serde::Serialize)]
/// struct Person { name: String, tags: Vec<String> }
///
/// let person = Person { name: "Ann".into(), tags: vec!["a".into()] };
/// let paths = JsonPath::get_all_paths(Model(&person)).unwrap();
/// assert_eq!(paths.into_iter().collect::<Vec<_>>(), vec!["name", "tags[0]"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Model<'a, T: ?Sized>(pub &'a T);

impl<T: Serialize + ?Sized> Source for Model<'_, T> {
    fn into_document(self) -> Result<Value, JsonUtilsError> {
        Ok(serde_json::to_value(self.0)?)
    }
}
