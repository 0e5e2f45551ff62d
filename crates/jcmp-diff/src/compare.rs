//! Parse-and-compare boundary: raw text in, diff or typed error out.

use serde_json::Value;
use tracing::debug;

use crate::config::CompareOptions;
use crate::error::{DiffError, Result, Side};
use crate::object_diff::{diff_objects_with, DiffResult};
use crate::JsonObject;

/// Parse and compare two documents with default options.
pub fn compare_texts(left: &str, right: &str) -> Result<DiffResult> {
    compare_texts_with(left, right, &CompareOptions::default())
}

/// Parse and compare two documents.
///
/// An empty string stands for `{}`. The left document is checked first, so
/// when both are invalid the reported error names the left side. No diff is
/// computed unless both documents are valid.
pub fn compare_texts_with(
    left: &str,
    right: &str,
    options: &CompareOptions,
) -> Result<DiffResult> {
    let left_doc = load(left, Side::Left, options)?;
    let right_doc = load(right, Side::Right, options)?;

    debug!(
        left_keys = left_doc.len(),
        right_keys = right_doc.len(),
        policy = options.equality.as_str(),
        "comparing documents"
    );
    let diff = diff_objects_with(&left_doc, &right_doc, options.equality);
    debug!(entries = diff.len(), changed = diff.has_changes(), "comparison complete");
    Ok(diff)
}

/// Parse one document, which must be a JSON object. Empty text yields `{}`.
pub fn parse_document(text: &str, side: Side) -> Result<JsonObject> {
    if text.is_empty() {
        return Ok(JsonObject::new());
    }
    let value: Value =
        serde_json::from_str(text).map_err(|source| DiffError::Parse { side, source })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DiffError::NotAnObject {
            side,
            kind: kind_name(&other),
        }),
    }
}

fn load(text: &str, side: Side, options: &CompareOptions) -> Result<JsonObject> {
    let doc = parse_document(text, side)?;
    let depth = nesting_depth(&doc);
    if depth > options.max_depth {
        return Err(DiffError::DepthExceeded {
            side,
            depth,
            limit: options.max_depth,
        });
    }
    Ok(doc)
}

/// Number of nested containers on the deepest path, counting the root
/// object as 1. Walks with an explicit stack.
fn nesting_depth(root: &JsonObject) -> usize {
    let mut max = 1;
    let mut stack: Vec<(&Value, usize)> = root.values().map(|v| (v, 2)).collect();
    while let Some((value, depth)) = stack.pop() {
        match value {
            Value::Object(map) => {
                max = max.max(depth);
                stack.extend(map.values().map(|v| (v, depth + 1)));
            }
            Value::Array(items) => {
                max = max.max(depth);
                stack.extend(items.iter().map(|v| (v, depth + 1)));
            }
            _ => {}
        }
    }
    max
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
