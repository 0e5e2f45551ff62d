//! Structural diff engine for JSON documents.
//!
//! Compares two object-rooted JSON documents key by key, recursing into keys
//! whose values are objects on both sides, and produces an ordered diff tree.
//!
//! # Key Types
//!
//! - [`DiffResult`] / [`DiffEntry`] -- Ordered key-level diff tree
//! - [`EqualityPolicy`] -- How two values are judged different
//! - [`ComparisonSession`] -- Input texts plus the last successful diff
//! - [`DiffError`] -- Parse and precondition failures at the text boundary

pub mod compare;
pub mod config;
pub mod equality;
pub mod error;
pub mod object_diff;
pub mod session;

pub use compare::{compare_texts, compare_texts_with, parse_document};
pub use config::CompareOptions;
pub use equality::EqualityPolicy;
pub use error::{DiffError, Result, Side};
pub use object_diff::{diff_objects, diff_objects_with, DiffEntry, DiffResult, DiffSummary, StyleClass};
pub use session::ComparisonSession;

/// A parsed JSON object, in document key order.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
