//! `json-mirror-structural`: generic conversion between typed values and
//! [`JsonValue`] trees.
//!
//! Encoding walks a value's [`Shape`] as exposed by [`Introspect`]; decoding
//! goes the other way through [`Decode`]. Both are implemented for the std
//! primitives and collections, and [`json_record!`] derives them for record
//! structs.
//!
//! ```
//! use json_mirror_structural::{decode, encode_top_level, json_record};
//!
//! json_record! {
//!     #[derive(Debug, PartialEq)]
//!     pub struct User {
//!         pub id: u32,
//!         pub name: String,
//!     }
//! }
//!
//! let users = vec![User { id: 1, name: "Tom".into() }];
//! let tree = encode_top_level(&users).unwrap();
//! assert_eq!(tree["users"][0]["name"], "Tom");
//! assert_eq!(decode::<Vec<User>>(&tree["users"]).unwrap(), users);
//! ```

mod decode;
mod descriptor;
mod encode;
mod error;
mod impls;
mod macros;
mod naming;
mod options;
mod shape;
mod timestamp;

pub use decode::{decode, Decode, RecordReader};
pub use descriptor::{Descriptor, FieldDescriptor, RecordDescriptor};
pub use encode::{encode, encode_top_level, to_tree};
pub use error::{DecodeError, DecodeErrorKind, DecodePath, EncodeError, PathSegment};
pub use naming::{plural_key, short_type_name};
pub use options::EncodeOptions;
pub use shape::{Introspect, Record, Sequence, Shape};

pub use json_mirror_value::JsonValue;
