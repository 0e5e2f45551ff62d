use serde::{Deserialize, Serialize};

use crate::equality::EqualityPolicy;

/// Default nesting limit; matches serde_json's own parser recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options for comparing two documents at the text boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// How values at the same key are judged different.
    pub equality: EqualityPolicy,
    /// Documents nesting deeper than this are rejected before diffing. The
    /// root object counts as depth 1, so 0 rejects every document.
    pub max_depth: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            equality: EqualityPolicy::Serialized,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CompareOptions {
    /// Options that ignore object key order when comparing values.
    pub fn structural() -> Self {
        Self {
            equality: EqualityPolicy::Structural,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let o = CompareOptions::default();
        assert_eq!(o.equality, EqualityPolicy::Serialized);
        assert_eq!(o.max_depth, 128);
    }

    #[test]
    fn structural_options() {
        let o = CompareOptions::structural();
        assert_eq!(o.equality, EqualityPolicy::Structural);
        assert_eq!(o.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let o: CompareOptions = serde_json::from_str(r#"{"equality": "structural"}"#).unwrap();
        assert_eq!(o, CompareOptions::structural());

        let o: CompareOptions = serde_json::from_str(r#"{"max_depth": 8}"#).unwrap();
        assert_eq!(o.equality, EqualityPolicy::Serialized);
        assert_eq!(o.max_depth, 8);
    }
}
