//! JSON property paths, path enumeration and canonical sorting.
//!
//! Every entry point accepts any [`Source`]: JSON text, a
//! `serde_json::Value`, or an application object wrapped in [`Model`].
//!
//! ```
//! use json_utils::JsonProperty;
//!
//! let json = JsonProperty::set_property("name", "{}", "James Butt").unwrap();
//! let json = JsonProperty::set_property("associatedAddresses[].city", json, "San Ramon").unwrap();
//! assert_eq!(
//!     JsonProperty::get_property("associatedAddresses[0].city", &json).unwrap(),
//!     Some(serde_json::json!("San Ramon"))
//! );
//! ```

mod error;
mod json_path;
mod json_property;
mod json_sort;
mod source;

pub use error::JsonUtilsError;
pub use json_path::JsonPath;
pub use json_property::JsonProperty;
pub use json_sort::JsonSort;
pub use source::{Model, Source};

pub use json_utils_path::{PathError, PropertyPath};
pub use json_utils_sort::ListKeys;
