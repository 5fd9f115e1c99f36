use json_mirror_structural::{DecodeError, EncodeError};
use json_mirror_text::ParseError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] ParseError),
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl JsonError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, JsonError::MalformedJson(_))
    }
}
