use std::collections::VecDeque;
use std::fmt;

use json_mirror_value::{JsonValue, Kind};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("value of type `{type_name}` encodes to nothing")]
    Nothing { type_name: String },
}

/// One step from a parent value to a child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a value inside a document, rendered as `$.users[0].name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodePath(VecDeque<PathSegment>);

impl DecodePath {
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.0.iter()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DecodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    #[error("missing field `{0}`")]
    MissingField(String),
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: Kind },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind} at {path}")]
pub struct DecodeError {
    pub path: DecodePath,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn missing_field(name: impl Into<String>) -> Self {
        Self {
            path: DecodePath::default(),
            kind: DecodeErrorKind::MissingField(name.into()),
        }
    }

    pub fn type_mismatch(expected: impl Into<String>, found: &JsonValue) -> Self {
        Self {
            path: DecodePath::default(),
            kind: DecodeErrorKind::TypeMismatch {
                expected: expected.into(),
                found: found.kind(),
            },
        }
    }

    /// Prefix the path with an object key.
    pub fn within_key(mut self, key: &str) -> Self {
        self.path.0.push_front(PathSegment::Key(key.to_string()));
        self
    }

    /// Prefix the path with an array index.
    pub fn within_index(mut self, index: usize) -> Self {
        self.path.0.push_front(PathSegment::Index(index));
        self
    }

    pub fn is_missing_field(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::MissingField(_))
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::TypeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        let err = DecodeError::missing_field("name")
            .within_index(0)
            .within_key("users");
        assert_eq!(err.path.to_string(), "$.users[0]");
        assert_eq!(err.to_string(), "missing field `name` at $.users[0]");
        assert!(err.is_missing_field());
        assert!(!err.is_type_mismatch());
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = DecodeError::type_mismatch("string", &JsonValue::Number(1.0));
        assert!(err.path.is_root());
        assert_eq!(err.to_string(), "expected string, found number at $");
        assert!(err.is_type_mismatch());
    }
}
