//! Canonical ordering for JSON documents.
//!
//! [`sort`] returns a copy of a document with every object's keys in
//! ascending order and selected lists ordered by a field of their elements:
//!
//! ```
//! use json_utils_sort::{sort, ListKeys};
//! use serde_json::json;
//!
//! let doc = json!({"members": [{"name": "John", "age": 22}, {"name": "Bob", "age": 18}]});
//! let sorted = sort(&doc, &ListKeys::new().with("members[]", "name"));
//! assert_eq!(sorted["members"][0]["name"], json!("Bob"));
//! ```

mod list_keys;
mod sorter;

pub use list_keys::ListKeys;
pub use sorter::{sort, sort_keys, JsonSorter};
