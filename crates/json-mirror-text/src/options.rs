use serde::{Deserialize, Serialize};

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Maximum array/object nesting before the document is rejected.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: 512 }
    }
}

/// Printer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintOptions {
    /// Spaces per nesting level; `None` prints compactly on one line.
    pub indent: Option<usize>,
}

impl PrintOptions {
    pub fn compact() -> Self {
        Self { indent: None }
    }

    pub fn pretty() -> Self {
        Self { indent: Some(2) }
    }
}
