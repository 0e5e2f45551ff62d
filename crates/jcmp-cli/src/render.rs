//! Terminal rendering of a diff tree.
//!
//! One line per entry, marked `+` (added), `-` (removed), `~` (modified) or
//! blank (unchanged). Nested groups print their key and indent their
//! children.

use colored::Colorize;
use jcmp_diff::{DiffEntry, DiffResult, DiffSummary, StyleClass};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Print entries (and nested groups) with no changes.
    pub show_unchanged: bool,
    pub color: bool,
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_unchanged: true,
            color: true,
            indent: 2,
        }
    }
}

pub fn render_text(diff: &DiffResult, opts: &RenderOptions) -> String {
    let mut lines = Vec::new();
    collect_lines(diff, opts, 0, &mut lines);
    lines.join("\n")
}

fn collect_lines(diff: &DiffResult, opts: &RenderOptions, level: usize, lines: &mut Vec<String>) {
    let pad = " ".repeat(level * opts.indent);
    for (key, entry) in diff {
        if !opts.show_unchanged && !entry.has_changes() {
            continue;
        }
        let line = match entry {
            DiffEntry::Nested { children } => {
                let label = format!("{key}:");
                let label = if opts.color { label.bold().to_string() } else { label };
                lines.push(format!("{pad}  {label}"));
                collect_lines(children, opts, level + 1, lines);
                continue;
            }
            DiffEntry::Modified { before, after } => {
                format!("~ {key}: {} -> {}", value_text(before), value_text(after))
            }
            DiffEntry::Added { value } => format!("+ {key}: {}", value_text(value)),
            DiffEntry::Removed { value } => format!("- {key}: {}", value_text(value)),
            DiffEntry::Unchanged { value } => format!("  {key}: {}", value_text(value)),
        };
        let line = match entry.style_class() {
            Some(class) if opts.color => paint(line, class),
            _ => line,
        };
        lines.push(format!("{pad}{line}"));
    }
}

/// Compact JSON with integral floats printed without a fraction (`1.0` as
/// `1`, `-0.0` as `0`), the way `JSON.stringify` prints numbers.
fn value_text(value: &Value) -> String {
    if has_integral_float(value) {
        canonical_numbers(value).to_string()
    } else {
        value.to_string()
    }
}

fn has_integral_float(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_f64() && integral(n).is_some(),
        Value::Array(items) => items.iter().any(has_integral_float),
        Value::Object(map) => map.values().any(has_integral_float),
        _ => false,
    }
}

fn canonical_numbers(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => integral(n).map_or_else(|| value.clone(), Value::from),
        Value::Array(items) => Value::Array(items.iter().map(canonical_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), canonical_numbers(v)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Largest magnitude at which every integer is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn integral(n: &Number) -> Option<i64> {
    let f = n.as_f64()?;
    (f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER).then_some(f as i64)
}

fn paint(text: String, class: StyleClass) -> String {
    match class {
        StyleClass::Added => text.green().to_string(),
        StyleClass::Removed => text.red().to_string(),
        StyleClass::Modified => text.yellow().to_string(),
        StyleClass::Unchanged => text.dimmed().to_string(),
    }
}

pub fn render_json(diff: &DiffResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(diff)
}

pub fn render_summary(summary: &DiffSummary) -> String {
    format!(
        "{} added, {} removed, {} modified, {} unchanged ({} nested)",
        summary.added, summary.removed, summary.modified, summary.unchanged, summary.nested
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use jcmp_diff::compare_texts;

    fn plain() -> RenderOptions {
        RenderOptions { color: false, ..Default::default() }
    }

    fn sample() -> DiffResult {
        compare_texts(
            r#"{"a": 1, "b": {"x": 1, "y": 2}, "c": [1], "s": "same"}"#,
            r#"{"a": 2, "b": {"x": 1, "y": 3}, "s": "same", "d": true}"#,
        )
        .unwrap()
    }

    #[test]
    fn text_layout() {
        let out = render_text(&sample(), &plain());
        let expected = [
            "~ a: 1 -> 2",
            "  b:",
            "    x: 1",
            "  ~ y: 2 -> 3",
            "- c: [1]",
            "  s: \"same\"",
            "+ d: true",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn changes_only_hides_unchanged() {
        let opts = RenderOptions { show_unchanged: false, ..plain() };
        let out = render_text(&sample(), &opts);
        assert!(!out.contains("x: 1"));
        assert!(!out.contains("same"));
        assert!(out.contains("  ~ y: 2 -> 3"));
    }

    #[test]
    fn changes_only_hides_unchanged_groups() {
        let diff = compare_texts(r#"{"o": {"a": 1, "b": 2}}"#, r#"{"o": {"b": 2, "a": 1}}"#).unwrap();
        let opts = RenderOptions { show_unchanged: false, ..plain() };
        assert_eq!(render_text(&diff, &opts), "");
        assert_eq!(render_text(&diff, &plain()), "  o:\n    a: 1\n    b: 2");
    }

    #[test]
    fn custom_indent() {
        let opts = RenderOptions { indent: 4, ..plain() };
        let diff = compare_texts(r#"{"b": {"y": 2}}"#, r#"{"b": {"y": 3}}"#).unwrap();
        assert_eq!(render_text(&diff, &opts), "  b:\n    ~ y: 2 -> 3");
    }

    #[test]
    fn integral_floats_print_like_integers() {
        let diff = compare_texts(
            r#"{"a": 1.0, "b": [2.0, 0.5], "c": {"n": -0.0}, "d": 3}"#,
            r#"{"a": 1, "b": [2, 0.5, 1e2], "c": {"n": 0, "m": 4.0}, "d": 3.5}"#,
        )
        .unwrap();
        let expected = [
            "  a: 1",
            "~ b: [2,0.5] -> [2,0.5,100]",
            "  c:",
            "    n: 0",
            "  + m: 4",
            "~ d: 3 -> 3.5",
        ]
        .join("\n");
        assert_eq!(render_text(&diff, &plain()), expected);
    }

    #[test]
    fn json_output_shape() {
        let out = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["a"]["type"], "modified");
        assert_eq!(value["a"]["original"], 1);
        assert_eq!(value["a"]["new"], 2);
        assert_eq!(value["b"]["type"], "object");
        assert_eq!(value["b"]["value"]["y"]["new"], 3);
        assert_eq!(value["d"]["type"], "added");
    }

    #[test]
    fn summary_line() {
        let out = render_summary(&sample().summary());
        assert_eq!(out, "1 added, 1 removed, 2 modified, 2 unchanged (1 nested)");
    }
}
