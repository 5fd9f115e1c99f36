//! The introspection capability: how a value describes its own structure.

use std::borrow::Cow;
use std::time::SystemTime;

/// Exposes a value's structure to the encoder.
///
/// Implemented for primitives, collections and smart pointers in this crate;
/// record types usually get it from [`crate::json_record!`].
pub trait Introspect {
    fn shape(&self) -> Shape<'_>;
}

/// One level of a value's structure. Children are borrowed, so building a
/// shape never copies the value.
pub enum Shape<'a> {
    /// Encodes to JSON `null`.
    Null,
    Bool(bool),
    Number(f64),
    String(Cow<'a, str>),
    /// A point in time, encoded as epoch-seconds text.
    Timestamp(SystemTime),
    /// A replacement value that is encoded in place of the original.
    Encoded(Box<dyn Introspect + 'a>),
    Sequence(Sequence<'a>),
    Map(Vec<(Cow<'a, str>, &'a dyn Introspect)>),
    /// A wrapper that may or may not hold a value.
    Optional(Option<&'a dyn Introspect>),
    Record(Record<'a>),
}

impl<'a> Shape<'a> {
    /// Encoding override: `value` is encoded instead of the original.
    pub fn encoded(value: impl Introspect + 'a) -> Self {
        Shape::Encoded(Box::new(value))
    }

    pub fn string(value: impl Into<Cow<'a, str>>) -> Self {
        Shape::String(value.into())
    }
}

/// Homogeneous items plus the short name of their element type.
pub struct Sequence<'a> {
    pub element: &'static str,
    pub items: Vec<&'a dyn Introspect>,
}

impl<'a> Sequence<'a> {
    pub fn new(element: &'static str, items: Vec<&'a dyn Introspect>) -> Self {
        Self { element, items }
    }
}

/// Named fields, optionally preceded by the fields of a base record.
pub struct Record<'a> {
    pub name: &'static str,
    pub base: Option<&'a dyn Introspect>,
    pub fields: Vec<(&'static str, &'a dyn Introspect)>,
}

impl<'a> Record<'a> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            base: None,
            fields: Vec::new(),
        }
    }

    pub fn with_base(mut self, base: &'a dyn Introspect) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_field(mut self, name: &'static str, value: &'a dyn Introspect) -> Self {
        self.fields.push((name, value));
        self
    }
}
