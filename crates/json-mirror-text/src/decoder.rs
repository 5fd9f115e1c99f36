//! `JsonDecoder`: strict JSON text decoder that produces a [`JsonValue`].
//!
//! Accepts exactly the RFC 8259 grammar: one value, optionally surrounded by
//! whitespace. No comments, trailing commas, unquoted keys or non-finite
//! numbers.

use json_mirror_value::{JsonValue, Map};

use crate::error::{ParseError, ParseErrorKind};
use crate::options::ParseOptions;

pub struct JsonDecoder<'a> {
    data: &'a [u8],
    x: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> JsonDecoder<'a> {
    pub fn new(text: &'a str, options: &ParseOptions) -> Self {
        Self {
            data: text.as_bytes(),
            x: 0,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Decode the whole input as a single document.
    pub fn decode(mut self) -> Result<JsonValue, ParseError> {
        let value = self.read_any()?;
        self.skip_whitespace();
        if self.x < self.data.len() {
            return Err(self.error(ParseErrorKind::TrailingCharacters));
        }
        Ok(value)
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.x)
    }

    /// Error for whatever sits at the cursor: end of input or a stray character.
    fn unexpected(&self) -> ParseError {
        match self.peek_char() {
            Some(ch) => self.error(ParseErrorKind::UnexpectedCharacter(ch)),
            None => self.error(ParseErrorKind::UnexpectedEnd),
        }
    }

    fn peek_char(&self) -> Option<char> {
        let rest = self.data.get(self.x..)?;
        let end = rest.len().min(4);
        (1..=end)
            .find_map(|n| std::str::from_utf8(&rest[..n]).ok())
            .and_then(|s| s.chars().next())
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.x).copied()
    }

    fn read_any(&mut self) -> Result<JsonValue, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'"') => Ok(JsonValue::String(self.read_str()?)),
            Some(b'[') => self.read_arr(),
            Some(b'{') => self.read_obj(),
            Some(b'f') => self.read_literal(b"false", JsonValue::Bool(false)),
            Some(b'n') => self.read_literal(b"null", JsonValue::Null),
            Some(b't') => self.read_literal(b"true", JsonValue::Bool(true)),
            Some(c) if c.is_ascii_digit() || c == b'-' => self.read_num(),
            _ => Err(self.unexpected()),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.x += 1;
        }
    }

    fn read_literal(&mut self, word: &[u8], value: JsonValue) -> Result<JsonValue, ParseError> {
        for &expected in word {
            if self.peek() != Some(expected) {
                return Err(self.unexpected());
            }
            self.x += 1;
        }
        Ok(value)
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.x;
        while let Some(b'0'..=b'9') = self.peek() {
            self.x += 1;
        }
        self.x - start
    }

    fn read_num(&mut self) -> Result<JsonValue, ParseError> {
        let start = self.x;

        if self.peek() == Some(b'-') {
            self.x += 1;
        }
        match self.peek() {
            Some(b'0') => self.x += 1,
            Some(b'1'..=b'9') => {
                self.skip_digits();
            }
            _ => return Err(self.error(ParseErrorKind::InvalidNumber)),
        }
        if self.peek() == Some(b'.') {
            self.x += 1;
            if self.skip_digits() == 0 {
                return Err(self.error(ParseErrorKind::InvalidNumber));
            }
        }
        if let Some(b'e' | b'E') = self.peek() {
            self.x += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.x += 1;
            }
            if self.skip_digits() == 0 {
                return Err(self.error(ParseErrorKind::InvalidNumber));
            }
        }

        let text = std::str::from_utf8(&self.data[start..self.x])
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidNumber, start))?;
        let n: f64 = text
            .parse()
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidNumber, start))?;
        if !n.is_finite() {
            return Err(ParseError::new(ParseErrorKind::NumberOutOfRange, start));
        }
        Ok(JsonValue::Number(n))
    }

    fn read_str(&mut self) -> Result<String, ParseError> {
        if self.peek() != Some(b'"') {
            return Err(self.unexpected());
        }
        self.x += 1; // skip opening quote

        let mut buf: Vec<u8> = Vec::new();
        loop {
            // Copy the run of plain bytes up to the next quote, backslash or
            // control character in one go.
            let run_start = self.x;
            while let Some(b) = self.peek() {
                if b == b'"' || b == b'\\' || b < 0x20 {
                    break;
                }
                self.x += 1;
            }
            buf.extend_from_slice(&self.data[run_start..self.x]);

            match self.peek() {
                None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
                Some(b'"') => {
                    self.x += 1; // skip closing quote
                    break;
                }
                Some(b'\\') => {
                    self.x += 1;
                    self.read_escape(&mut buf)?;
                }
                Some(_) => return Err(self.error(ParseErrorKind::ControlCharacter)),
            }
        }

        String::from_utf8(buf).map_err(|_| self.error(ParseErrorKind::InvalidUtf8))
    }

    /// Decode one escape sequence; the cursor sits just past the backslash.
    fn read_escape(&mut self, buf: &mut Vec<u8>) -> Result<(), ParseError> {
        let Some(esc) = self.peek() else {
            return Err(self.error(ParseErrorKind::UnexpectedEnd));
        };
        let simple = match esc {
            b'"' => Some(b'"'),
            b'\\' => Some(b'\\'),
            b'/' => Some(b'/'),
            b'b' => Some(0x08),
            b'f' => Some(0x0c),
            b'n' => Some(b'\n'),
            b'r' => Some(b'\r'),
            b't' => Some(b'\t'),
            b'u' => None,
            _ => return Err(self.error(ParseErrorKind::InvalidEscape)),
        };
        self.x += 1;
        if let Some(byte) = simple {
            buf.push(byte);
            return Ok(());
        }

        let escape_start = self.x - 2;
        let high = self.read_hex4()?;
        let code = match high {
            0xD800..=0xDBFF => {
                if self.data.get(self.x..self.x + 2) != Some(b"\\u".as_slice()) {
                    return Err(ParseError::new(ParseErrorKind::LoneSurrogate, escape_start));
                }
                self.x += 2;
                let low = self.read_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(ParseError::new(ParseErrorKind::LoneSurrogate, escape_start));
                }
                0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(ParseError::new(ParseErrorKind::LoneSurrogate, escape_start));
            }
            _ => high,
        };
        let ch = char::from_u32(code)
            .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidEscape, escape_start))?;
        let mut utf8 = [0u8; 4];
        buf.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        Ok(())
    }

    fn read_hex4(&mut self) -> Result<u32, ParseError> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .peek()
                .and_then(|b| (b as char).to_digit(16))
                .ok_or_else(|| self.error(ParseErrorKind::InvalidEscape))?;
            code = code * 16 + digit;
            self.x += 1;
        }
        Ok(code)
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.error(ParseErrorKind::TooDeep(self.max_depth)));
        }
        Ok(())
    }

    fn read_arr(&mut self) -> Result<JsonValue, ParseError> {
        self.enter()?;
        self.x += 1; // skip '['
        let mut arr = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.x += 1;
            self.depth -= 1;
            return Ok(JsonValue::Array(arr));
        }
        loop {
            arr.push(self.read_any()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.x += 1,
                Some(b']') => {
                    self.x += 1;
                    self.depth -= 1;
                    return Ok(JsonValue::Array(arr));
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn read_obj(&mut self) -> Result<JsonValue, ParseError> {
        self.enter()?;
        self.x += 1; // skip '{'
        let mut obj = Map::new();

        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.x += 1;
            self.depth -= 1;
            return Ok(JsonValue::Object(obj));
        }
        loop {
            self.skip_whitespace();
            let key = self.read_str()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.unexpected());
            }
            self.x += 1;
            let val = self.read_any()?;
            obj.insert(key, val);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.x += 1,
                Some(b'}') => {
                    self.x += 1;
                    self.depth -= 1;
                    return Ok(JsonValue::Object(obj));
                }
                _ => return Err(self.unexpected()),
            }
        }
    }
}
