//! A comparison session: the two input texts and the last committed diff.

use tracing::warn;

use crate::compare::compare_texts_with;
use crate::config::CompareOptions;
use crate::error::Result;
use crate::object_diff::DiffResult;

/// Owns the left and right input texts along with the most recent
/// successful diff.
///
/// A failed comparison leaves the previous diff in place.
#[derive(Clone, Debug, Default)]
pub struct ComparisonSession {
    left: String,
    right: String,
    options: CompareOptions,
    current: Option<DiffResult>,
}

impl ComparisonSession {
    pub fn new(options: CompareOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn set_left(&mut self, text: impl Into<String>) {
        self.left = text.into();
    }

    pub fn set_right(&mut self, text: impl Into<String>) {
        self.right = text.into();
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// The diff from the last successful [`compare`](Self::compare), if any.
    pub fn current(&self) -> Option<&DiffResult> {
        self.current.as_ref()
    }

    /// Drop the committed diff. The input texts are kept.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Compare the current texts and commit the result.
    ///
    /// On error nothing is committed and the previous diff stays current.
    pub fn compare(&mut self) -> Result<&DiffResult> {
        match compare_texts_with(&self.left, &self.right, &self.options) {
            Ok(diff) => Ok(self.current.insert(diff)),
            Err(e) => {
                warn!(side = %e.side(), "comparison rejected: {}", e);
                Err(e)
            }
        }
    }
}
