use thiserror::Error;

/// Why a document was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),
    #[error("invalid number")]
    InvalidNumber,
    #[error("number out of range")]
    NumberOutOfRange,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("unpaired surrogate in unicode escape")]
    LoneSurrogate,
    #[error("unescaped control character in string")]
    ControlCharacter,
    #[error("trailing characters after document")]
    TrailingCharacters,
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
    #[error("input is not valid UTF-8")]
    InvalidUtf8,
}

/// A rejected document, with the byte offset where parsing stopped.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}
