//! Structural descriptions of decode targets.

use std::fmt;

use crate::decode::Decode;

#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    /// Any JSON value is accepted as-is.
    Any,
    Bool,
    Number,
    String,
    /// Epoch seconds held in a JSON string.
    Timestamp,
    Sequence(Box<Descriptor>),
    Map(Box<Descriptor>),
    Optional(Box<Descriptor>),
    Record(RecordDescriptor),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordDescriptor {
    pub name: &'static str,
    pub base: Option<Box<Descriptor>>,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    /// False when the field may be missing from the object.
    pub required: bool,
    pub shape: Descriptor,
}

impl FieldDescriptor {
    pub fn of<T: Decode>(name: &'static str) -> Self {
        Self {
            name,
            required: T::decode_absent().is_none(),
            shape: T::descriptor(),
        }
    }
}

impl RecordDescriptor {
    /// Every field, base fields first.
    pub fn all_fields(&self) -> Vec<&FieldDescriptor> {
        let mut out = match self.base.as_deref() {
            Some(Descriptor::Record(base)) => base.all_fields(),
            _ => Vec::new(),
        };
        out.extend(self.fields.iter());
        out
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Any => f.write_str("any value"),
            Descriptor::Bool => f.write_str("boolean"),
            Descriptor::Number => f.write_str("number"),
            Descriptor::String => f.write_str("string"),
            Descriptor::Timestamp => f.write_str("timestamp string"),
            Descriptor::Sequence(inner) => write!(f, "array of {inner}"),
            Descriptor::Map(inner) => write!(f, "object of {inner}"),
            Descriptor::Optional(inner) => write!(f, "optional {inner}"),
            Descriptor::Record(record) => write!(f, "{} object", record.name),
        }
    }
}
