//! `JsonEncoder`: prints a [`JsonValue`] as standard JSON text.
//!
//! Printing cannot fail: every tree has a JSON form. Numbers with no JSON
//! representation (NaN, infinities) are written as `null`.

use json_mirror_value::{JsonValue, Map};

use crate::options::PrintOptions;

pub struct JsonEncoder {
    out: String,
    indent: Option<usize>,
    level: usize,
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new(&PrintOptions::default())
    }
}

impl JsonEncoder {
    pub fn new(options: &PrintOptions) -> Self {
        Self {
            out: String::new(),
            indent: options.indent,
            level: 0,
        }
    }

    pub fn encode(&mut self, value: &JsonValue) -> String {
        self.out.clear();
        self.level = 0;
        self.write_any(value);
        std::mem::take(&mut self.out)
    }

    pub fn write_any(&mut self, value: &JsonValue) {
        match value {
            JsonValue::Null => self.write_null(),
            JsonValue::Bool(b) => self.write_boolean(*b),
            JsonValue::Number(n) => self.write_number(*n),
            JsonValue::String(s) => self.write_str(s),
            JsonValue::Array(arr) => self.write_arr(arr),
            JsonValue::Object(obj) => self.write_obj(obj),
        }
    }

    pub fn write_null(&mut self) {
        self.out.push_str("null");
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.out.push_str(if b { "true" } else { "false" });
    }

    pub fn write_number(&mut self, num: f64) {
        self.out.push_str(&format_number(num));
    }

    /// Write a JSON-encoded string (with escaping).
    pub fn write_str(&mut self, s: &str) {
        // Fast path: printable ASCII, no quotes or backslash
        if s.bytes().all(|b| (32..=126).contains(&b) && b != b'"' && b != b'\\') {
            self.out.reserve(s.len() + 2);
            self.out.push('"');
            self.out.push_str(s);
            self.out.push('"');
            return;
        }

        // Fall back to serde_json for proper escaping
        let json_str = serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
        self.out.push_str(&json_str);
    }

    pub fn write_arr(&mut self, arr: &[JsonValue]) {
        if arr.is_empty() {
            self.out.push_str("[]");
            return;
        }
        self.out.push('[');
        self.level += 1;
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_newline();
            self.write_any(item);
        }
        self.level -= 1;
        self.write_newline();
        self.out.push(']');
    }

    pub fn write_obj(&mut self, obj: &Map) {
        if obj.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push('{');
        self.level += 1;
        for (i, (key, val)) in obj.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_newline();
            self.write_str(key);
            self.out.push(':');
            if self.indent.is_some() {
                self.out.push(' ');
            }
            self.write_any(val);
        }
        self.level -= 1;
        self.write_newline();
        self.out.push('}');
    }

    fn write_newline(&mut self) {
        if let Some(width) = self.indent {
            self.out.push('\n');
            self.out
                .extend(std::iter::repeat(' ').take(width * self.level));
        }
    }
}

fn format_number(f: f64) -> String {
    if !f.is_finite() {
        "null".to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        // Debug gives the shortest round-trip repr, switching to exponent
        // notation for very large and very small magnitudes.
        format!("{:?}", f)
    }
}
