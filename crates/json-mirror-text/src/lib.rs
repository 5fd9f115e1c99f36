//! `json-mirror-text`: JSON text boundary for [`JsonValue`] trees.
//!
//! [`parse`] accepts exactly one standard JSON document; [`is_valid`] is
//! nothing more than a parse attempt, so the two always agree. [`serialize`]
//! never fails.
//!
//! ```
//! use json_mirror_text::{is_valid, parse, serialize};
//!
//! let doc = parse(r#"{"id":1,"name":"Thom","age":21}"#).unwrap();
//! assert_eq!(doc["name"].as_str(), Some("Thom"));
//! assert_eq!(parse(&serialize(&doc)).unwrap(), doc);
//! assert!(!is_valid(r#"}{"id":1}"#));
//! ```

mod decoder;
mod encoder;
mod error;
mod options;

pub use decoder::JsonDecoder;
pub use encoder::JsonEncoder;
pub use error::{ParseError, ParseErrorKind};
pub use options::{ParseOptions, PrintOptions};

use json_mirror_value::JsonValue;

/// Parse one JSON document with default options.
pub fn parse(text: &str) -> Result<JsonValue, ParseError> {
    parse_with(text, &ParseOptions::default())
}

pub fn parse_with(text: &str, options: &ParseOptions) -> Result<JsonValue, ParseError> {
    JsonDecoder::new(text, options).decode().inspect_err(|err| {
        tracing::debug!(offset = err.offset, kind = %err.kind, "rejected JSON text");
    })
}

/// Parse a UTF-8 encoded document.
pub fn parse_bytes(bytes: &[u8]) -> Result<JsonValue, ParseError> {
    parse_bytes_with(bytes, &ParseOptions::default())
}

pub fn parse_bytes_with(bytes: &[u8], options: &ParseOptions) -> Result<JsonValue, ParseError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ParseError::new(ParseErrorKind::InvalidUtf8, e.valid_up_to()))?;
    parse_with(text, options)
}

/// Whether [`parse`] would accept `text`.
pub fn is_valid(text: &str) -> bool {
    parse(text).is_ok()
}

/// Print compactly.
///
/// Printing recurses once per nesting level. Trees from [`parse`] are bounded
/// by [`ParseOptions::max_depth`]; a tree built by hand is not, and one nested
/// far deeper than that can exhaust the stack.
pub fn serialize(value: &JsonValue) -> String {
    serialize_with(value, &PrintOptions::default())
}

pub fn serialize_with(value: &JsonValue, options: &PrintOptions) -> String {
    JsonEncoder::new(options).encode(value)
}

pub fn serialize_bytes(value: &JsonValue) -> Vec<u8> {
    serialize(value).into_bytes()
}
