//! Property paths over JSON documents.
//!
//! A property path addresses locations inside a `serde_json::Value` using
//! dotted field names, list indices, append markers and equality filters:
//!
//! ```text
//! name
//! primaryAddress.street
//! associatedAddresses[]
//! associatedAddresses[1]
//! friends[{name=Art Venere}].associatedAddresses[{state=CA},{city:Irving}].street
//! ```
//!
//! ```
//! use serde_json::json;
//!
//! let mut doc = json!({});
//! json_utils_path::set("friends[].name", &mut doc, json!("Ann")).unwrap();
//! json_utils_path::set("friends[{name=Ann}].age", &mut doc, json!(22)).unwrap();
//! assert_eq!(doc, json!({"friends": [{"name": "Ann", "age": 22}]}));
//! assert_eq!(
//!     json_utils_path::get("friends[0].age", &doc).unwrap(),
//!     Some(&json!(22))
//! );
//! ```

mod enumerator;
mod error;
mod navigator;
mod parser;
mod reader;
mod types;
pub mod value;
mod writer;

pub use enumerator::{all_paths, all_properties, unique_paths};
pub use error::PathError;
pub use navigator::{Mode, Navigator, MAX_LIST_PADDING};
pub use parser::{parse, PropertyPathParser};
pub use reader::{get, get_all, get_all_path, get_path};
pub use types::{Constraint, Location, PathComponent, PropertyPath, Segment};
pub use writer::{set, set_path};
