//! Error types for the diff crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the two input documents an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Errors that can occur when turning raw text into a diff.
///
/// The engine itself never fails; every variant here is raised at the
/// parse-and-compare boundary before any diffing happens.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The input text is not valid JSON.
    #[error("{side} document is not valid JSON: {source}")]
    Parse {
        side: Side,
        #[source]
        source: serde_json::Error,
    },

    /// The input parsed, but its top-level value is not an object.
    #[error("{side} document must be a JSON object, got {kind}")]
    NotAnObject { side: Side, kind: &'static str },

    /// The input nests deeper than the configured limit.
    #[error("{side} document nests {depth} levels deep (limit {limit})")]
    DepthExceeded {
        side: Side,
        depth: usize,
        limit: usize,
    },
}

impl DiffError {
    /// The side the error was raised for.
    pub fn side(&self) -> Side {
        match self {
            DiffError::Parse { side, .. }
            | DiffError::NotAnObject { side, .. }
            | DiffError::DepthExceeded { side, .. } => *side,
        }
    }
}

/// Convenience alias for results at the text boundary.
pub type Result<T> = std::result::Result<T, DiffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_display() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(Side::Right.to_string(), "right");
    }

    #[test]
    fn error_messages_name_the_side() {
        let err = DiffError::NotAnObject { side: Side::Right, kind: "array" };
        assert_eq!(err.to_string(), "right document must be a JSON object, got array");
        assert_eq!(err.side(), Side::Right);

        let err = DiffError::DepthExceeded { side: Side::Left, depth: 9, limit: 4 };
        assert_eq!(err.to_string(), "left document nests 9 levels deep (limit 4)");
    }

    #[test]
    fn parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DiffError::Parse { side: Side::Left, source };
        assert!(err.to_string().starts_with("left document is not valid JSON"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
