//! Structural encoder: walks a value's [`Shape`] and builds a [`JsonValue`].
//!
//! `None` from [`encode`] means the value has no JSON form ("nothing"):
//! an empty optional, or a record none of whose fields produced anything.
//! Sequences drop such items, maps keep the key with `null`, records omit
//! the field.

use json_mirror_value::{JsonValue, Map};
use tracing::{debug, trace};

use crate::error::EncodeError;
use crate::naming::{plural_key, short_type_name};
use crate::options::EncodeOptions;
use crate::shape::{Introspect, Record, Shape};
use crate::timestamp::format_timestamp;

/// Encode `value`, or `None` if it encodes to nothing.
///
/// Recurses once per level of the value's structure, so self-nesting data
/// must be bounded by the caller.
pub fn encode<T: Introspect + ?Sized>(value: &T) -> Option<JsonValue> {
    encode_shape(value.shape())
}

/// Like [`encode`], but a top-level sequence is wrapped as
/// `{"<element>s": [...]}`.
pub fn encode_top_level<T: Introspect + ?Sized>(value: &T) -> Option<JsonValue> {
    match value.shape() {
        Shape::Sequence(seq) => {
            let key = plural_key(seq.element);
            let items = encode_shape(Shape::Sequence(seq))?;
            let mut wrapper = Map::with_capacity(1);
            wrapper.insert(key, items);
            Some(JsonValue::Object(wrapper))
        }
        shape => encode_shape(shape),
    }
}

/// Top-level conversion. Nothing is an error unless
/// [`EncodeOptions::null_on_nothing`] is set.
pub fn to_tree<T: Introspect + ?Sized>(
    value: &T,
    options: &EncodeOptions,
) -> Result<JsonValue, EncodeError> {
    let encoded = if options.wrap_top_level_sequences {
        encode_top_level(value)
    } else {
        encode(value)
    };
    match encoded {
        Some(tree) => Ok(tree),
        None if options.null_on_nothing => Ok(JsonValue::Null),
        None => {
            let type_name = short_type_name::<T>();
            debug!(type_name, "value encodes to nothing");
            Err(EncodeError::Nothing {
                type_name: type_name.to_string(),
            })
        }
    }
}

fn encode_shape(shape: Shape<'_>) -> Option<JsonValue> {
    match shape {
        Shape::Null => Some(JsonValue::Null),
        Shape::Bool(b) => Some(JsonValue::Bool(b)),
        Shape::Number(n) => Some(JsonValue::Number(n)),
        Shape::String(s) => Some(JsonValue::String(s.into_owned())),
        Shape::Encoded(replacement) => encode(&*replacement),
        Shape::Timestamp(time) => Some(JsonValue::String(format_timestamp(time))),
        Shape::Sequence(seq) => Some(JsonValue::Array(
            seq.items.into_iter().filter_map(|item| encode(item)).collect(),
        )),
        Shape::Map(entries) => Some(JsonValue::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into_owned(), encode(value).unwrap_or_default()))
                .collect(),
        )),
        Shape::Optional(inner) => inner.and_then(|value| encode(value)),
        Shape::Record(record) => encode_record(record),
    }
}

fn encode_record(record: Record<'_>) -> Option<JsonValue> {
    let mut fields = match record.base.and_then(|base| encode(base)) {
        Some(JsonValue::Object(inherited)) => inherited,
        _ => Map::with_capacity(record.fields.len()),
    };
    for (name, value) in record.fields {
        match encode(value) {
            Some(encoded) => {
                fields.insert(name.to_string(), encoded);
            }
            None => {
                trace!(record = record.name, field = name, "field encodes to nothing");
                fields.shift_remove(name);
            }
        }
    }
    if fields.is_empty() {
        None
    } else {
        Some(JsonValue::Object(fields))
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use serde_json::json;

    struct Point {
        x: f64,
        y: f64,
    }

    impl Introspect for Point {
        fn shape(&self) -> Shape<'_> {
            Shape::Record(Record::new("Point").with_field("x", &self.x).with_field("y", &self.y))
        }
    }

    struct Blank;

    impl Introspect for Blank {
        fn shape(&self) -> Shape<'_> {
            Shape::Record(Record::new("Blank"))
        }
    }

    struct Celsius(f64);

    impl Introspect for Celsius {
        fn shape(&self) -> Shape<'_> {
            Shape::encoded(format!("{}C", self.0))
        }
    }

    fn tree(value: serde_json::Value) -> JsonValue {
        JsonValue::from(value)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(encode(&true), Some(JsonValue::Bool(true)));
        assert_eq!(encode(&7u8), Some(JsonValue::Number(7.0)));
        assert_eq!(encode("abc"), Some(JsonValue::from("abc")));
    }

    #[test]
    fn test_record_keeps_declaration_order() {
        let encoded = encode(&Point { x: 1.0, y: 2.5 }).unwrap();
        assert_eq!(encoded, tree(json!({"x": 1, "y": 2.5})));
        let keys: Vec<_> = encoded.as_object_or_default().keys().cloned().collect();
        assert_eq!(keys, ["x", "y"]);
    }

    #[test]
    fn test_empty_record_is_nothing() {
        assert_eq!(encode(&Blank), None);
        assert_eq!(encode(&vec![Blank, Blank]), Some(tree(json!([]))));
    }

    #[test]
    fn test_override_is_encoded_recursively() {
        assert_eq!(encode(&Celsius(21.5)), Some(JsonValue::from("21.5C")));
        let readings = vec![Celsius(1.0), Celsius(2.0)];
        assert_eq!(encode(&readings), Some(tree(json!(["1C", "2C"]))));
    }

    #[test]
    fn test_map_keeps_nothing_as_null() {
        let entries = Shape::Map(vec![
            (Cow::Borrowed("some"), &Some(1) as &dyn Introspect),
            (Cow::Borrowed("none"), &None::<i32> as &dyn Introspect),
        ]);
        assert_eq!(encode_shape(entries), Some(tree(json!({"some": 1, "none": null}))));
    }

    #[test]
    fn test_top_level_wrapping() {
        let points = vec![Point { x: 0.0, y: 0.0 }];
        assert_eq!(
            encode_top_level(&points),
            Some(tree(json!({"points": [{"x": 0, "y": 0}]})))
        );
        assert_eq!(encode_top_level(&3), Some(JsonValue::from(3)));
    }

    #[test]
    fn test_to_tree_nothing() {
        let err = to_tree(&Blank, &EncodeOptions::default()).unwrap_err();
        assert_eq!(
            err,
            EncodeError::Nothing {
                type_name: "Blank".to_string()
            }
        );
        let opts = EncodeOptions {
            null_on_nothing: true,
            ..EncodeOptions::default()
        };
        assert_eq!(to_tree(&None::<u8>, &opts), Ok(JsonValue::Null));
    }

    #[test]
    fn test_to_tree_wrapping_option() {
        let names = vec!["a".to_string()];
        assert_eq!(
            to_tree(&names, &EncodeOptions::wrapped()),
            Ok(tree(json!({"strings": ["a"]})))
        );
        assert_eq!(to_tree(&names, &EncodeOptions::default()), Ok(tree(json!(["a"]))));
    }
}
