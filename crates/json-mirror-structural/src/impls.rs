//! `Introspect` and `Decode` for std types and [`JsonValue`].

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;
use std::time::SystemTime;

use indexmap::IndexMap;
use json_mirror_value::JsonValue;

use crate::decode::Decode;
use crate::descriptor::Descriptor;
use crate::error::DecodeError;
use crate::naming::short_type_name;
use crate::shape::{Introspect, Sequence, Shape};
use crate::timestamp::parse_timestamp;

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

impl Introspect for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Bool(*self)
    }
}

impl Decode for bool {
    fn descriptor() -> Descriptor {
        Descriptor::Bool
    }

    fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
        value
            .as_bool()
            .ok_or_else(|| DecodeError::type_mismatch("boolean", value))
    }
}

macro_rules! integer {
    ($($t:ty),* $(,)?) => {$(
        impl Introspect for $t {
            fn shape(&self) -> Shape<'_> {
                Shape::Number(*self as f64)
            }
        }

        impl Decode for $t {
            fn descriptor() -> Descriptor {
                Descriptor::Number
            }

            fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
                value
                    .as_f64()
                    .filter(|n| n.fract() == 0.0)
                    .and_then(|n| {
                        // MAX is not representable in f64 for the wide types and
                        // encodes as the next power of two.
                        <$t>::try_from(n as i128)
                            .ok()
                            .or_else(|| (n == <$t>::MAX as f64).then_some(<$t>::MAX))
                    })
                    .ok_or_else(|| {
                        DecodeError::type_mismatch(concat!("integer fitting ", stringify!($t)), value)
                    })
            }
        }
    )*};
}

integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Introspect for f64 {
    fn shape(&self) -> Shape<'_> {
        Shape::Number(*self)
    }
}

impl Decode for f64 {
    fn descriptor() -> Descriptor {
        Descriptor::Number
    }

    fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
        value
            .as_f64()
            .ok_or_else(|| DecodeError::type_mismatch("number", value))
    }
}

impl Introspect for f32 {
    fn shape(&self) -> Shape<'_> {
        Shape::Number(f64::from(*self))
    }
}

impl Decode for f32 {
    fn descriptor() -> Descriptor {
        Descriptor::Number
    }

    fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
        f64::decode(value).map(|n| n as f32)
    }
}

impl Introspect for str {
    fn shape(&self) -> Shape<'_> {
        Shape::String(Cow::Borrowed(self))
    }
}

impl Introspect for String {
    fn shape(&self) -> Shape<'_> {
        Shape::String(Cow::Borrowed(self.as_str()))
    }
}

impl Decode for String {
    fn descriptor() -> Descriptor {
        Descriptor::String
    }

    fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DecodeError::type_mismatch("string", value))
    }
}

impl Introspect for char {
    fn shape(&self) -> Shape<'_> {
        Shape::String(Cow::Owned(self.to_string()))
    }
}

impl Decode for char {
    fn descriptor() -> Descriptor {
        Descriptor::String
    }

    fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
        let mut chars = value.as_str().unwrap_or_default().chars();
        match (value.is_string(), chars.next(), chars.next()) {
            (true, Some(c), None) => Ok(c),
            _ => Err(DecodeError::type_mismatch("single-character string", value)),
        }
    }
}

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

impl Introspect for SystemTime {
    fn shape(&self) -> Shape<'_> {
        Shape::Timestamp(*self)
    }
}

impl Decode for SystemTime {
    fn descriptor() -> Descriptor {
        Descriptor::Timestamp
    }

    fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
        value
            .as_str()
            .and_then(parse_timestamp)
            .ok_or_else(|| DecodeError::type_mismatch("timestamp string", value))
    }
}

// ---------------------------------------------------------------------------
// Optional values and pointers
// ---------------------------------------------------------------------------

impl<T: Introspect> Introspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Optional(self.as_ref().map(|v| v as &dyn Introspect))
    }
}

impl<T: Decode> Decode for Option<T> {
    fn descriptor() -> Descriptor {
        Descriptor::Optional(Box::new(T::descriptor()))
    }

    fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Null => Ok(None),
            other => T::decode(other).map(Some),
        }
    }

    fn decode_absent() -> Option<Self> {
        Some(None)
    }
}

impl<T: Introspect + ?Sized> Introspect for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

macro_rules! pointer {
    ($($p:ident),*) => {$(
        impl<T: Introspect + ?Sized> Introspect for $p<T> {
            fn shape(&self) -> Shape<'_> {
                (**self).shape()
            }
        }

        impl<T: Decode> Decode for $p<T> {
            fn descriptor() -> Descriptor {
                T::descriptor()
            }

            fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
                T::decode(value).map($p::new)
            }

            fn decode_absent() -> Option<Self> {
                T::decode_absent().map($p::new)
            }
        }
    )*};
}

pointer!(Box, Rc, Arc);

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

fn sequence<'a, T: Introspect>(items: impl Iterator<Item = &'a T>) -> Shape<'a>
where
    T: 'a,
{
    Shape::Sequence(Sequence::new(
        short_type_name::<T>(),
        items.map(|item| item as &dyn Introspect).collect(),
    ))
}

fn decode_items<T: Decode>(value: &JsonValue) -> Result<Vec<T>, DecodeError> {
    let items = value.as_array().ok_or_else(|| {
        DecodeError::type_mismatch(Descriptor::Sequence(Box::new(T::descriptor())).to_string(), value)
    })?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| T::decode(item).map_err(|err| err.within_index(i)))
        .collect()
}

impl<T: Introspect> Introspect for [T] {
    fn shape(&self) -> Shape<'_> {
        sequence(self.iter())
    }
}

impl<T: Introspect, const N: usize> Introspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        sequence(self.iter())
    }
}

impl<T: Introspect> Introspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        sequence(self.iter())
    }
}

impl<T: Introspect> Introspect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        sequence(self.iter())
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn descriptor() -> Descriptor {
        Descriptor::Sequence(Box::new(T::descriptor()))
    }

    fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
        decode_items(value)
    }
}

impl<T: Decode> Decode for VecDeque<T> {
    fn descriptor() -> Descriptor {
        Descriptor::Sequence(Box::new(T::descriptor()))
    }

    fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
        decode_items(value).map(VecDeque::from)
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn descriptor() -> Descriptor {
        Descriptor::Sequence(Box::new(T::descriptor()))
    }

    fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
        let items = decode_items::<T>(value)?;
        <[T; N]>::try_from(items)
            .map_err(|_| DecodeError::type_mismatch(format!("array of length {N}"), value))
    }
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

fn map_shape<'a, K, V>(entries: impl Iterator<Item = (&'a K, &'a V)>) -> Shape<'a>
where
    K: AsRef<str> + 'a,
    V: Introspect + 'a,
{
    Shape::Map(
        entries
            .map(|(k, v)| (Cow::Borrowed(k.as_ref()), v as &dyn Introspect))
            .collect(),
    )
}

fn decode_entries<K, V, C>(value: &JsonValue) -> Result<C, DecodeError>
where
    K: From<String>,
    V: Decode,
    C: FromIterator<(K, V)>,
{
    let fields = value.as_object().ok_or_else(|| {
        DecodeError::type_mismatch(Descriptor::Map(Box::new(V::descriptor())).to_string(), value)
    })?;
    fields
        .iter()
        .map(|(key, item)| {
            V::decode(item)
                .map(|v| (K::from(key.clone()), v))
                .map_err(|err| err.within_key(key))
        })
        .collect()
}

impl<K: AsRef<str>, V: Introspect, S> Introspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        map_shape(self.iter())
    }
}

impl<K, V, S> Decode for HashMap<K, V, S>
where
    K: From<String> + Eq + Hash,
    V: Decode,
    S: BuildHasher + Default,
{
    fn descriptor() -> Descriptor {
        Descriptor::Map(Box::new(V::descriptor()))
    }

    fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
        decode_entries(value)
    }
}

impl<K: AsRef<str>, V: Introspect> Introspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        map_shape(self.iter())
    }
}

impl<K: From<String> + Ord, V: Decode> Decode for BTreeMap<K, V> {
    fn descriptor() -> Descriptor {
        Descriptor::Map(Box::new(V::descriptor()))
    }

    fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
        decode_entries(value)
    }
}

impl<K: AsRef<str>, V: Introspect, S> Introspect for IndexMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        map_shape(self.iter())
    }
}

impl<K, V, S> Decode for IndexMap<K, V, S>
where
    K: From<String> + Eq + Hash,
    V: Decode,
    S: BuildHasher + Default,
{
    fn descriptor() -> Descriptor {
        Descriptor::Map(Box::new(V::descriptor()))
    }

    fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
        decode_entries(value)
    }
}

// ---------------------------------------------------------------------------
// Already-built trees
// ---------------------------------------------------------------------------

impl Introspect for JsonValue {
    fn shape(&self) -> Shape<'_> {
        match self {
            JsonValue::Null => Shape::Null,
            JsonValue::Bool(b) => Shape::Bool(*b),
            JsonValue::Number(n) => Shape::Number(*n),
            JsonValue::String(s) => Shape::String(Cow::Borrowed(s.as_str())),
            JsonValue::Array(items) => sequence(items.iter()),
            JsonValue::Object(fields) => map_shape(fields.iter()),
        }
    }
}

impl Decode for JsonValue {
    fn descriptor() -> Descriptor {
        Descriptor::Any
    }

    fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
        Ok(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use super::*;
    use crate::{decode, encode};
    use serde_json::json;

    fn tree(value: serde_json::Value) -> JsonValue {
        JsonValue::from(value)
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(decode::<u8>(&JsonValue::from(255)).unwrap(), 255);
        assert!(decode::<u8>(&JsonValue::from(256)).unwrap_err().is_type_mismatch());
        assert!(decode::<u32>(&JsonValue::from(-1)).is_err());
        assert!(decode::<i64>(&JsonValue::from(1.5)).is_err());
        assert_eq!(decode::<i64>(&JsonValue::from(-42.0)).unwrap(), -42);
        assert!(decode::<i32>(&JsonValue::from("1")).is_err());
    }

    #[test]
    fn test_wide_integer_extremes_round_trip() {
        for n in [i64::MAX, i64::MIN, 0] {
            assert_eq!(decode::<i64>(&encode(&n).unwrap()).unwrap(), n);
        }
        assert_eq!(decode::<u64>(&encode(&u64::MAX).unwrap()).unwrap(), u64::MAX);
        assert_eq!(decode::<usize>(&encode(&usize::MAX).unwrap()).unwrap(), usize::MAX);
        assert!(decode::<i64>(&JsonValue::from(1e19)).is_err());
        assert!(decode::<u64>(&JsonValue::from(4e19)).is_err());
        assert!(decode::<u64>(&JsonValue::from(-1.0)).is_err());
    }

    #[test]
    fn test_char() {
        assert_eq!(encode(&'x'), Some(JsonValue::from("x")));
        assert_eq!(decode::<char>(&JsonValue::from("é")).unwrap(), 'é');
        assert!(decode::<char>(&JsonValue::from("ab")).is_err());
        assert!(decode::<char>(&JsonValue::from("")).is_err());
    }

    #[test]
    fn test_system_time() {
        let t = UNIX_EPOCH + Duration::from_secs(1_500_000_000);
        let encoded = encode(&t).unwrap();
        assert_eq!(encoded, "1500000000.0");
        assert_eq!(decode::<SystemTime>(&encoded).unwrap(), t);

        let before = UNIX_EPOCH - Duration::from_millis(1500);
        let encoded = encode(&before).unwrap();
        assert_eq!(encoded, "-1.5");
        assert_eq!(decode::<SystemTime>(&encoded).unwrap(), before);

        let precise = UNIX_EPOCH + Duration::new(1_500_000_000, 123_456_789);
        let encoded = encode(&precise).unwrap();
        assert_eq!(encoded, "1500000000.123456789");
        assert_eq!(decode::<SystemTime>(&encoded).unwrap(), precise);

        let err = decode::<SystemTime>(&JsonValue::from(1_500_000_000)).unwrap_err();
        assert!(err.is_type_mismatch());
        assert!(decode::<SystemTime>(&JsonValue::from("soon")).is_err());
    }

    #[test]
    fn test_sequence_drops_nothing() {
        let items = vec![Some(1), None, Some(3)];
        assert_eq!(encode(&items), Some(tree(json!([1, 3]))));
        let items = [None::<String>, None];
        assert_eq!(encode(&items), Some(tree(json!([]))));
    }

    #[test]
    fn test_map_keeps_none_as_null() {
        let mut ages: BTreeMap<String, Option<u32>> = BTreeMap::new();
        ages.insert("tom".to_string(), Some(10));
        ages.insert("ben".to_string(), None);
        assert_eq!(encode(&ages), Some(tree(json!({"ben": null, "tom": 10}))));
        let back: BTreeMap<String, Option<u32>> = decode(&encode(&ages).unwrap()).unwrap();
        assert_eq!(back, ages);
    }

    #[test]
    fn test_hash_map_round_trip() {
        let mut scores: HashMap<String, f64> = HashMap::new();
        scores.insert("a".into(), 1.5);
        scores.insert("b".into(), -2.0);
        let back: HashMap<String, f64> = decode(&encode(&scores).unwrap()).unwrap();
        assert_eq!(back, scores);
    }

    #[test]
    fn test_fixed_array() {
        let back: [u8; 3] = decode(&tree(json!([1, 2, 3]))).unwrap();
        assert_eq!(back, [1, 2, 3]);
        assert!(decode::<[u8; 2]>(&tree(json!([1, 2, 3]))).is_err());
    }

    #[test]
    fn test_pointers() {
        let boxed: Box<str> = "hi".into();
        assert_eq!(encode(&boxed), Some(JsonValue::from("hi")));
        let shared = Arc::new(vec![1u8]);
        assert_eq!(encode(&shared), Some(tree(json!([1]))));
        let rc: Rc<Option<u8>> = decode(&JsonValue::Null).unwrap();
        assert_eq!(*rc, None);
        assert_eq!(<Box<Option<u8>>>::decode_absent(), Some(Box::new(None)));
    }

    #[test]
    fn test_json_value_passes_through() {
        let doc = tree(json!({"a": [1, null, {"b": false}], "c": null}));
        assert_eq!(encode(&doc), Some(doc.clone()));
        assert_eq!(decode::<JsonValue>(&doc).unwrap(), doc);
    }

    #[test]
    fn test_mismatch_messages() {
        let err = decode::<Vec<u8>>(&JsonValue::from("x")).unwrap_err();
        assert_eq!(err.to_string(), "expected array of number, found string at $");
        let err = decode::<BTreeMap<String, bool>>(&tree(json!({"k": 1}))).unwrap_err();
        assert_eq!(err.to_string(), "expected boolean, found number at $.k");
    }
}
