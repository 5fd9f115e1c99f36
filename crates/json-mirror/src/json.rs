//! [`Json`]: the typed accessor over a parsed or encoded document.

use std::fmt;
use std::ops;
use std::str::FromStr;

use json_mirror_structural::{
    decode, to_tree, Decode, DecodeError, Descriptor, EncodeOptions, Introspect, Shape,
};
use json_mirror_text::{parse_bytes, parse_with, serialize, serialize_with, ParseOptions, PrintOptions};
use json_mirror_value::{Index, JsonValue, Kind, Map};
use serde::{Deserialize, Serialize};

use crate::error::JsonError;

/// A JSON document with total, chainable access.
///
/// Navigation never fails: [`Json::get`] and [`Json::pointer`] return a null
/// document for anything missing, and every `as_*_or_default` accessor falls
/// back to a zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json(JsonValue);

impl Json {
    pub fn null() -> Self {
        Json(JsonValue::Null)
    }

    pub fn parse(text: &str) -> Result<Self, JsonError> {
        Self::parse_with(text, &ParseOptions::default())
    }

    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self, JsonError> {
        Ok(Json(parse_with(text, options)?))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, JsonError> {
        Ok(Json(parse_bytes(bytes)?))
    }

    /// Structurally encode `value`. Fails when it encodes to nothing.
    pub fn from_value<T: Introspect + ?Sized>(value: &T) -> Result<Self, JsonError> {
        Self::from_value_with(value, &EncodeOptions::default())
    }

    /// Like [`Json::from_value`], with a top-level sequence wrapped as
    /// `{"<element>s": [...]}`.
    pub fn from_value_wrapped<T: Introspect + ?Sized>(value: &T) -> Result<Self, JsonError> {
        Self::from_value_with(value, &EncodeOptions::wrapped())
    }

    pub fn from_value_with<T: Introspect + ?Sized>(
        value: &T,
        options: &EncodeOptions,
    ) -> Result<Self, JsonError> {
        Ok(Json(to_tree(value, options)?))
    }

    pub fn decode<T: Decode>(&self) -> Result<T, JsonError> {
        Ok(decode(&self.0)?)
    }

    pub fn as_value(&self) -> &JsonValue {
        &self.0
    }

    pub fn as_value_mut(&mut self) -> &mut JsonValue {
        &mut self.0
    }

    pub fn into_inner(self) -> JsonValue {
        self.0
    }

    // -- navigation ---------------------------------------------------------

    /// Child at `index` (object key or array position); null when absent.
    pub fn get<I: Index>(&self, index: I) -> Json {
        Json(self.0.get(index).clone())
    }

    /// RFC 6901 lookup; null when the path does not resolve.
    pub fn pointer(&self, pointer: &str) -> Json {
        Json(self.0.pointer(pointer).clone())
    }

    /// Array elements as documents; empty for anything but an array.
    pub fn members(&self) -> impl Iterator<Item = Json> + '_ {
        self.0.as_array_or_default().iter().cloned().map(Json)
    }

    /// Object entries as documents; empty for anything but an object.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Json)> + '_ {
        self.0
            .as_object_or_default()
            .iter()
            .map(|(k, v)| (k.as_str(), Json(v.clone())))
    }

    // -- inspection ---------------------------------------------------------

    pub fn kind(&self) -> Kind {
        self.0.kind()
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn is_bool(&self) -> bool {
        self.0.is_bool()
    }

    pub fn is_number(&self) -> bool {
        self.0.is_number()
    }

    pub fn is_string(&self) -> bool {
        self.0.is_string()
    }

    pub fn is_array(&self) -> bool {
        self.0.is_array()
    }

    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }

    /// True for null and for an empty array or object.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.0.as_bool()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        self.0.as_array()
    }

    pub fn as_object(&self) -> Option<&Map> {
        self.0.as_object()
    }

    pub fn as_bool_or_default(&self) -> bool {
        self.0.as_bool_or_default()
    }

    pub fn as_f64_or_default(&self) -> f64 {
        self.0.as_f64_or_default()
    }

    pub fn as_i64_or_default(&self) -> i64 {
        self.0.as_i64_or_default()
    }

    pub fn as_str_or_default(&self) -> &str {
        self.0.as_str_or_default()
    }

    pub fn as_array_or_default(&self) -> &[JsonValue] {
        self.0.as_array_or_default()
    }

    pub fn as_object_or_default(&self) -> &Map {
        self.0.as_object_or_default()
    }

    // -- output -------------------------------------------------------------

    pub fn to_string_pretty(&self) -> String {
        serialize_with(&self.0, &PrintOptions::pretty())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        serialize(&self.0).into_bytes()
    }
}

impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(&self.0))
    }
}

impl FromStr for Json {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Json::parse(s)
    }
}

impl<I: Index> ops::Index<I> for Json {
    type Output = JsonValue;

    fn index(&self, index: I) -> &JsonValue {
        self.0.get(index)
    }
}

impl PartialEq<JsonValue> for Json {
    fn eq(&self, other: &JsonValue) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Json> for JsonValue {
    fn eq(&self, other: &Json) -> bool {
        *self == other.0
    }
}

impl From<JsonValue> for Json {
    fn from(value: JsonValue) -> Self {
        Json(value)
    }
}

impl From<Json> for JsonValue {
    fn from(json: Json) -> Self {
        json.0
    }
}

macro_rules! from_scalar {
    ($($t:ty),*) => {$(
        impl From<$t> for Json {
            fn from(v: $t) -> Self {
                Json(JsonValue::from(v))
            }
        }
    )*};
}

from_scalar!(bool, i32, i64, u32, u64, f64, &str, String);

impl Introspect for Json {
    fn shape(&self) -> Shape<'_> {
        self.0.shape()
    }
}

impl Decode for Json {
    fn descriptor() -> Descriptor {
        Descriptor::Any
    }

    fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
        Ok(Json(value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = r#"{"id":1,"name":"Thom","age":21}"#;

    #[test]
    fn test_get_chains_through_misses() {
        let json = Json::parse(SIMPLE).unwrap();
        assert_eq!(json.get("name").as_str(), Some("Thom"));
        assert!(json.get("missing").get(0).get("deeper").is_null());
        assert_eq!(json["age"], 21);
    }

    #[test]
    fn test_display_round_trip() {
        let json: Json = SIMPLE.parse().unwrap();
        assert_eq!(json.to_string(), SIMPLE);
        assert_eq!(json.to_bytes(), SIMPLE.as_bytes());
        assert_eq!(Json::parse(&json.to_string_pretty()).unwrap(), json);
    }

    #[test]
    fn test_compares_with_value() {
        let json = Json::from("CPP");
        assert_eq!(json, JsonValue::from("CPP"));
        assert_eq!(JsonValue::from("CPP"), json);
        assert_ne!(json, Json::null());
    }

    #[test]
    fn test_members_and_entries() {
        let json = Json::parse(r#"{"a":[1,2],"b":true}"#).unwrap();
        let firsts: Vec<_> = json.get("a").members().map(|m| m.as_i64_or_default()).collect();
        assert_eq!(firsts, [1, 2]);
        let keys: Vec<_> = json.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(json.get("b").members().count(), 0);
    }

    #[test]
    fn test_malformed_input() {
        let err = Json::parse("{").unwrap_err();
        assert!(err.is_malformed());
        assert!(Json::from_bytes(&[0xff]).unwrap_err().is_malformed());
    }
}
