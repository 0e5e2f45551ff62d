//! Object-level diff: compare two JSON objects key by key.
//!
//! Keys present only on the left are `Removed`, keys present only on the
//! right are `Added`, and keys present on both sides are `Unchanged`,
//! `Modified`, or `Nested` when both values are objects that differ.
//! Arrays and scalars are compared whole, never element by element.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::equality::EqualityPolicy;
use crate::JsonObject;

/// The result of comparing two JSON objects.
///
/// Keys appear in left-document order, followed by the keys found only in
/// the right document, in right-document order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiffResult {
    entries: IndexMap<String, DiffEntry>,
}

impl DiffResult {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up the entry for a key.
    pub fn get(&self, key: &str) -> Option<&DiffEntry> {
        self.entries.get(key)
    }

    /// Iterate over entries in result order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, DiffEntry> {
        self.entries.iter()
    }

    /// Iterate over keys in result order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, DiffEntry> {
        self.entries.keys()
    }

    /// Consume the diff, returning the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<String, DiffEntry> {
        self.entries
    }

    /// Number of added keys at this level.
    pub fn additions(&self) -> usize {
        self.count(|e| matches!(e, DiffEntry::Added { .. }))
    }

    /// Number of removed keys at this level.
    pub fn removals(&self) -> usize {
        self.count(|e| matches!(e, DiffEntry::Removed { .. }))
    }

    /// Number of modified keys at this level.
    pub fn modifications(&self) -> usize {
        self.count(|e| matches!(e, DiffEntry::Modified { .. }))
    }

    /// Number of unchanged keys at this level.
    pub fn unchanged(&self) -> usize {
        self.count(|e| matches!(e, DiffEntry::Unchanged { .. }))
    }

    /// Number of nested object groups at this level.
    pub fn nested(&self) -> usize {
        self.count(|e| matches!(e, DiffEntry::Nested { .. }))
    }

    /// Returns `true` if any entry, at any depth, is not `Unchanged`.
    pub fn has_changes(&self) -> bool {
        self.entries.values().any(DiffEntry::has_changes)
    }

    /// Recursive counts over the whole tree.
    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary::default();
        self.accumulate(&mut summary);
        summary
    }

    fn accumulate(&self, summary: &mut DiffSummary) {
        for entry in self.entries.values() {
            match entry {
                DiffEntry::Added { .. } => summary.added += 1,
                DiffEntry::Removed { .. } => summary.removed += 1,
                DiffEntry::Modified { .. } => summary.modified += 1,
                DiffEntry::Unchanged { .. } => summary.unchanged += 1,
                DiffEntry::Nested { children } => {
                    summary.nested += 1;
                    children.accumulate(summary);
                }
            }
        }
    }

    fn count(&self, pred: impl Fn(&DiffEntry) -> bool) -> usize {
        self.entries.values().filter(|e| pred(*e)).count()
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = (&'a String, &'a DiffEntry);
    type IntoIter = indexmap::map::Iter<'a, String, DiffEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The diff outcome for a single key.
///
/// Serializes in the `{"type": ..., ...}` shape: `value` for added, removed
/// and unchanged entries, `original`/`new` for modified entries, and a
/// child mapping under `value` for nested (`"object"`) entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiffEntry {
    /// The key exists only in the right document.
    Added { value: Value },
    /// The key exists only in the left document.
    Removed { value: Value },
    /// The key exists in both documents with different values.
    Modified {
        #[serde(rename = "original")]
        before: Value,
        #[serde(rename = "new")]
        after: Value,
    },
    /// The key exists in both documents with equal values.
    Unchanged { value: Value },
    /// Both documents hold differing objects at this key.
    #[serde(rename = "object")]
    Nested {
        #[serde(rename = "value")]
        children: DiffResult,
    },
}

impl DiffEntry {
    /// The presentation category, or `None` for a nested group.
    pub fn style_class(&self) -> Option<StyleClass> {
        match self {
            DiffEntry::Added { .. } => Some(StyleClass::Added),
            DiffEntry::Removed { .. } => Some(StyleClass::Removed),
            DiffEntry::Modified { .. } => Some(StyleClass::Modified),
            DiffEntry::Unchanged { .. } => Some(StyleClass::Unchanged),
            DiffEntry::Nested { .. } => None,
        }
    }

    /// Returns `true` unless this entry, and everything under it, is unchanged.
    pub fn has_changes(&self) -> bool {
        match self {
            DiffEntry::Unchanged { .. } => false,
            DiffEntry::Nested { children } => children.has_changes(),
            _ => true,
        }
    }
}

/// Presentation category of a leaf entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleClass {
    Added,
    Removed,
    Modified,
    Unchanged,
}

impl StyleClass {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleClass::Added => "added",
            StyleClass::Removed => "removed",
            StyleClass::Modified => "modified",
            StyleClass::Unchanged => "unchanged",
        }
    }

    /// Stylesheet class name for HTML renderers.
    pub fn css_class(self) -> &'static str {
        match self {
            StyleClass::Added => "json-diff-added",
            StyleClass::Removed => "json-diff-removed",
            StyleClass::Modified => "json-diff-modified",
            StyleClass::Unchanged => "json-diff-unchanged",
        }
    }
}

/// Recursive entry counts for a diff tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
    /// Number of nested object groups (not counted as leaves).
    pub nested: usize,
}

impl DiffSummary {
    /// Number of leaf entries that are added, removed, or modified.
    pub fn changes(&self) -> usize {
        self.added + self.removed + self.modified
    }
}

/// Compare two objects with the default [`EqualityPolicy::Serialized`] policy.
pub fn diff_objects(left: &JsonObject, right: &JsonObject) -> DiffResult {
    diff_objects_with(left, right, EqualityPolicy::default())
}

/// Compare two objects, judging differences with `policy`.
///
/// Recursion depth equals the nesting depth of the inputs; callers handling
/// untrusted text should go through [`crate::compare_texts_with`], which
/// enforces a depth limit first.
pub fn diff_objects_with(
    left: &JsonObject,
    right: &JsonObject,
    policy: EqualityPolicy,
) -> DiffResult {
    let mut entries = IndexMap::with_capacity(left.len());

    // Removed, modified, nested and unchanged keys, in left order.
    for (key, left_val) in left {
        let entry = match right.get(key) {
            None => DiffEntry::Removed {
                value: left_val.clone(),
            },
            Some(right_val) if policy.values_differ(left_val, right_val) => {
                match (left_val, right_val) {
                    (Value::Object(l), Value::Object(r)) => DiffEntry::Nested {
                        children: diff_objects_with(l, r, policy),
                    },
                    _ => DiffEntry::Modified {
                        before: left_val.clone(),
                        after: right_val.clone(),
                    },
                }
            }
            Some(_) => DiffEntry::Unchanged {
                value: left_val.clone(),
            },
        };
        entries.insert(key.clone(), entry);
    }

    // Added keys, in right order.
    for (key, right_val) in right {
        if !left.contains_key(key) {
            entries.insert(
                key.clone(),
                DiffEntry::Added {
                    value: right_val.clone(),
                },
            );
        }
    }

    DiffResult { entries }
}
