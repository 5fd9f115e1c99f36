//! JSON Pointer (RFC 6901) lookups over [`JsonValue`].

use std::borrow::Cow;

use crate::value::NULL;
use crate::JsonValue;

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// ```
/// use json_mirror_value::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("plain"), "plain");
/// ```
pub fn unescape_component(component: &str) -> Cow<'_, str> {
    if !component.contains('~') {
        return Cow::Borrowed(component);
    }
    // Order matters: ~1 must be replaced before ~0
    Cow::Owned(component.replace("~1", "/").replace("~0", "~"))
}

/// Check if a string represents a valid non-negative integer array index.
///
/// ```
/// use json_mirror_value::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("1.5"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // First char can't be leading zero unless it's just "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

impl JsonValue {
    /// Resolve a JSON Pointer such as `/books/book/0/title`.
    ///
    /// The empty pointer is the value itself. Like indexing, this never
    /// fails: a pointer without a leading `/`, a missing key, a malformed or
    /// out-of-range array index, or a step into a scalar all yield `null`.
    pub fn pointer(&self, pointer: &str) -> &JsonValue {
        if pointer.is_empty() {
            return self;
        }
        let Some(steps) = pointer.strip_prefix('/') else {
            return &NULL;
        };

        let mut current = self;
        for step in steps.split('/') {
            let step = unescape_component(step);
            current = match current {
                JsonValue::Array(items) => {
                    if !is_valid_index(&step) {
                        return &NULL;
                    }
                    match step.parse::<usize>().ok().and_then(|idx| items.get(idx)) {
                        Some(item) => item,
                        None => return &NULL,
                    }
                }
                JsonValue::Object(fields) => match fields.get(&*step) {
                    Some(field) => field,
                    None => return &NULL,
                },
                _ => return &NULL,
            };
        }
        current
    }
}
