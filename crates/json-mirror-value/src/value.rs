//! [`JsonValue`]: the JSON value tree and its total accessors.

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::index::Index;
use crate::Kind;

/// Object storage. Keys are unique; insertion order is kept so printing is
/// deterministic, but equality ignores it.
pub type Map = IndexMap<String, JsonValue>;

/// A JSON document or any node inside one.
#[derive(Debug, Clone, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    /// All numbers are IEEE-754 doubles.
    Number(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(Map),
}

/// Target of every indexing miss.
pub(crate) static NULL: JsonValue = JsonValue::Null;

fn empty_map() -> &'static Map {
    static EMPTY: OnceLock<Map> = OnceLock::new();
    EMPTY.get_or_init(Map::new)
}

impl JsonValue {
    pub fn kind(&self) -> Kind {
        match self {
            JsonValue::Null => Kind::Null,
            JsonValue::Bool(_) => Kind::Bool,
            JsonValue::Number(_) => Kind::Number,
            JsonValue::String(_) => Kind::String,
            JsonValue::Array(_) => Kind::Array,
            JsonValue::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// `true` for `null` and for containers without entries.
    ///
    /// Scalars are never empty, not even `""` or `0`.
    pub fn is_empty(&self) -> bool {
        match self {
            JsonValue::Null => true,
            JsonValue::Array(items) => items.is_empty(),
            JsonValue::Object(fields) => fields.is_empty(),
            _ => false,
        }
    }

    /// Number of elements or entries; `0` for scalars.
    pub fn len(&self) -> usize {
        match self {
            JsonValue::Array(items) => items.len(),
            JsonValue::Object(fields) => fields.len(),
            _ => 0,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The number as an integer, if it has no fractional part and fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Number(n)
                if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64 =>
            {
                Some(*n as i64)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            JsonValue::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            JsonValue::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_bool_or_default(&self) -> bool {
        self.as_bool().unwrap_or_default()
    }

    pub fn as_f64_or_default(&self) -> f64 {
        self.as_f64().unwrap_or_default()
    }

    pub fn as_i64_or_default(&self) -> i64 {
        self.as_i64().unwrap_or_default()
    }

    pub fn as_str_or_default(&self) -> &str {
        self.as_str().unwrap_or_default()
    }

    pub fn as_array_or_default(&self) -> &[JsonValue] {
        self.as_array().unwrap_or_default()
    }

    pub fn as_object_or_default(&self) -> &Map {
        self.as_object().unwrap_or_else(|| empty_map())
    }

    /// Look up a key or position; misses of any sort yield `null`.
    ///
    /// ```
    /// use json_mirror_value::JsonValue;
    ///
    /// let arr = JsonValue::from(vec![1, 2, 3]);
    /// assert_eq!(arr.get(0).as_i64(), Some(1));
    /// assert!(arr.get(-1).is_null());
    /// assert!(arr.get(3).is_null());
    /// assert!(arr.get("key").is_null());
    /// ```
    pub fn get<I: Index>(&self, index: I) -> &JsonValue {
        index.index_into(self).unwrap_or(&NULL)
    }

    /// Like [`JsonValue::get`], but distinguishes a miss from a stored `null`.
    pub fn try_get<I: Index>(&self, index: I) -> Option<&JsonValue> {
        index.index_into(self)
    }

    /// Replace the value with `null`, returning what was there.
    pub fn take(&mut self) -> JsonValue {
        std::mem::take(self)
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

macro_rules! from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsonValue {
                fn from(n: $ty) -> Self {
                    JsonValue::Number(n as f64)
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl From<&String> for JsonValue {
    fn from(s: &String) -> Self {
        JsonValue::String(s.clone())
    }
}

impl From<()> for JsonValue {
    fn from(_: ()) -> Self {
        JsonValue::Null
    }
}

impl From<Map> for JsonValue {
    fn from(fields: Map) -> Self {
        JsonValue::Object(fields)
    }
}

impl<T: Into<JsonValue>> From<Vec<T>> for JsonValue {
    fn from(items: Vec<T>) -> Self {
        JsonValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<JsonValue>> From<&[T]> for JsonValue {
    fn from(items: &[T]) -> Self {
        JsonValue::Array(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(JsonValue::Null)
    }
}

impl FromIterator<JsonValue> for JsonValue {
    fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
        JsonValue::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for JsonValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        JsonValue::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JsonValue {
        [
            ("id", JsonValue::from(1)),
            ("name", JsonValue::from("Thom")),
            ("tags", JsonValue::from(vec!["a", "b"])),
            ("empty", JsonValue::Array(Vec::new())),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(JsonValue::Null.kind(), Kind::Null);
        assert_eq!(JsonValue::from(true).kind(), Kind::Bool);
        assert_eq!(JsonValue::from(1.5).kind(), Kind::Number);
        assert_eq!(JsonValue::from("x").kind(), Kind::String);
        assert_eq!(sample()["tags"].kind(), Kind::Array);
        assert_eq!(sample().kind(), Kind::Object);
    }

    #[test]
    fn test_is_empty() {
        assert!(JsonValue::Null.is_empty());
        assert!(JsonValue::Array(Vec::new()).is_empty());
        assert!(JsonValue::Object(Map::new()).is_empty());
        assert!(!JsonValue::from("").is_empty());
        assert!(!JsonValue::from(0).is_empty());
        assert!(!JsonValue::from(false).is_empty());
        assert!(!sample().is_empty());
    }

    #[test]
    fn test_accessors_on_mismatch() {
        let doc = sample();
        let id = &doc["id"];
        assert_eq!(id.as_str(), None);
        assert_eq!(id.as_str_or_default(), "");
        assert_eq!(id.as_bool(), None);
        assert!(!id.as_bool_or_default());
        assert!(id.as_array_or_default().is_empty());
        assert!(id.as_object_or_default().is_empty());
    }

    #[test]
    fn test_as_i64() {
        assert_eq!(JsonValue::from(21).as_i64(), Some(21));
        assert_eq!(JsonValue::from(-3).as_i64(), Some(-3));
        assert_eq!(JsonValue::from(3.1).as_i64(), None);
        assert_eq!(JsonValue::from(1e300).as_i64(), None);
        assert_eq!(JsonValue::from(3.1).as_i64_or_default(), 0);
        assert_eq!(JsonValue::from(3.1).as_f64(), Some(3.1));
    }

    #[test]
    fn test_len() {
        assert_eq!(sample().len(), 4);
        assert_eq!(sample()["tags"].len(), 2);
        assert_eq!(JsonValue::from("abc").len(), 0);
    }

    #[test]
    fn test_option_into_value() {
        assert!(JsonValue::from(None::<i32>).is_null());
        assert_eq!(JsonValue::from(Some(2)).as_f64(), Some(2.0));
    }

    #[test]
    fn test_take_leaves_null() {
        let mut doc = sample();
        let taken = doc.take();
        assert!(doc.is_null());
        assert_eq!(taken.len(), 4);
    }

    #[test]
    fn test_try_get_distinguishes_stored_null() {
        let doc: JsonValue = [("a", JsonValue::Null)].into_iter().collect();
        assert_eq!(doc.try_get("a"), Some(&JsonValue::Null));
        assert_eq!(doc.try_get("b"), None);
        assert!(doc.get("b").is_null());
    }
}
