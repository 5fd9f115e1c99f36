//! `json-mirror-value`: the canonical in-memory JSON value tree.
//!
//! [`JsonValue`] is a closed union over the six JSON kinds. Every accessor on
//! it is total: asking for the wrong kind yields `None` (or a zero value from
//! the `_or_default` family), and indexing past the end of an array, into a
//! missing key, or into a scalar yields a reference to `null`.
//!
//! # Example
//!
//! ```
//! use json_mirror_value::JsonValue;
//!
//! let doc = JsonValue::from(serde_json::json!({"id": 1, "name": "Thom"}));
//! assert_eq!(doc["name"].as_str(), Some("Thom"));
//! assert!(doc["missing"].is_null());
//! assert!(doc["name"][3].is_null());
//! assert_eq!(doc["id"].as_str_or_default(), "");
//! ```

mod convert;
mod equal;
mod index;
mod kind;
mod pointer;
mod serde_impl;
mod value;

pub use equal::deep_equal;
pub use index::Index;
pub use kind::Kind;
pub use pointer::{is_valid_index, unescape_component};
pub use value::{JsonValue, Map};
