//! Structural decoder: the inverse of [`crate::encode`].

use json_mirror_value::{JsonValue, Map};
use tracing::trace;

use crate::descriptor::Descriptor;
use crate::error::DecodeError;

/// Rebuilds a value from a [`JsonValue`].
pub trait Decode: Sized {
    fn descriptor() -> Descriptor;

    fn decode(value: &JsonValue) -> Result<Self, DecodeError>;

    /// Value to use when a record field is missing entirely. `None` makes
    /// the field required.
    fn decode_absent() -> Option<Self> {
        None
    }
}

/// Decode `value` as a `T`.
pub fn decode<T: Decode>(value: &JsonValue) -> Result<T, DecodeError> {
    T::decode(value).inspect_err(|err| {
        trace!(path = %err.path, kind = %err.kind, "decode failed");
    })
}

/// Field-by-field access to an object being decoded into a record.
pub struct RecordReader<'a> {
    value: &'a JsonValue,
    fields: &'a Map,
}

impl<'a> RecordReader<'a> {
    pub fn new(name: &str, value: &'a JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Object(fields) => Ok(Self { value, fields }),
            other => Err(DecodeError::type_mismatch(format!("{name} object"), other)),
        }
    }

    pub fn field<T: Decode>(&self, name: &str) -> Result<T, DecodeError> {
        match self.fields.get(name) {
            Some(value) => T::decode(value).map_err(|err| err.within_key(name)),
            None => T::decode_absent().ok_or_else(|| DecodeError::missing_field(name)),
        }
    }

    /// The base record, read from the same object.
    pub fn base<T: Decode>(&self) -> Result<T, DecodeError> {
        T::decode(self.value)
    }
}
