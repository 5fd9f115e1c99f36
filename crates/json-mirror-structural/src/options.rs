use serde::{Deserialize, Serialize};

/// Top-level encoding configuration for [`crate::to_tree`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Wrap a top-level sequence as `{"<elements>s": [...]}`.
    pub wrap_top_level_sequences: bool,
    /// Produce `null` instead of failing when the value encodes to nothing.
    pub null_on_nothing: bool,
}

impl EncodeOptions {
    pub fn wrapped() -> Self {
        Self {
            wrap_top_level_sequences: true,
            ..Self::default()
        }
    }
}
