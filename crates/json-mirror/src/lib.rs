//! `json-mirror`: bridge typed Rust values to JSON and read JSON back with
//! total, default-safe accessors.
//!
//! ```
//! use json_mirror::{encode_json, json_record, Json};
//!
//! json_record! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct User {
//!         pub id: u32,
//!         pub name: String,
//!         pub age: u32,
//!     }
//! }
//!
//! let users = vec![User { id: 1, name: "Tom".into(), age: 10 }];
//! let text = encode_json(&users).unwrap();
//! assert_eq!(text, r#"{"users":[{"id":1,"name":"Tom","age":10}]}"#);
//!
//! let json = Json::parse(&text).unwrap();
//! assert_eq!(json.get("users").get(0).get("name").as_str_or_default(), "Tom");
//! assert!(json.get("users").get(-1).is_null());
//! assert_eq!(json.get("users").decode::<Vec<User>>().unwrap(), users);
//! ```

mod error;
mod json;

pub use error::JsonError;
pub use json::Json;

pub use json_mirror_structural::{
    decode, encode, encode_top_level, json_record, to_tree, Decode, DecodeError, DecodeErrorKind,
    DecodePath, Descriptor, EncodeError, EncodeOptions, FieldDescriptor, Introspect, PathSegment,
    Record, RecordDescriptor, RecordReader, Sequence, Shape,
};
pub use json_mirror_text::{ParseError, ParseErrorKind, ParseOptions, PrintOptions};
pub use json_mirror_value::{JsonValue, Kind, Map};

/// Encode `value` as JSON text. A top-level sequence is wrapped as
/// `{"<element>s": [...]}`.
pub fn encode_json<T: Introspect + ?Sized>(value: &T) -> Result<String, JsonError> {
    let tree = to_tree(value, &EncodeOptions::wrapped())?;
    Ok(json_mirror_text::serialize(&tree))
}

/// [`encode_json`] as UTF-8 bytes.
pub fn encode_json_bytes<T: Introspect + ?Sized>(value: &T) -> Result<Vec<u8>, JsonError> {
    encode_json(value).map(String::into_bytes)
}

/// Parse `text` and decode it as a `T`.
pub fn decode_json<T: Decode>(text: &str) -> Result<T, JsonError> {
    let tree = json_mirror_text::parse(text)?;
    Ok(decode(&tree)?)
}

pub fn is_valid(text: &str) -> bool {
    json_mirror_text::is_valid(text)
}
