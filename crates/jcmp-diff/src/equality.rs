//! Equality policies: how the engine decides two values at a key differ.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The rule used to decide whether two values at the same key differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EqualityPolicy {
    /// Values are equal when their canonical serializations are equal.
    ///
    /// Object key order is significant: `{"a":1,"b":2}` differs from
    /// `{"b":2,"a":1}`, so reordered objects are recursed into and come out
    /// with every field unchanged. Numbers are canonicalized as IEEE doubles,
    /// so `1`, `1.0` and `1e0` are equal, as are `0` and `-0`.
    #[default]
    Serialized,
    /// Values are equal under [`Value`] equality, which ignores object key
    /// order.
    Structural,
}

impl EqualityPolicy {
    /// Returns `true` if `a` and `b` are considered different.
    pub fn values_differ(self, a: &Value, b: &Value) -> bool {
        match self {
            EqualityPolicy::Serialized => !serialized_eq(a, b),
            EqualityPolicy::Structural => a != b,
        }
    }

    /// Stable lowercase name, as accepted in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            EqualityPolicy::Serialized => "serialized",
            EqualityPolicy::Structural => "structural",
        }
    }
}

/// Walks both values in document order, comparing keys, strings and
/// numbers the way their canonical text would compare.
fn serialized_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| serialized_eq(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .zip(y)
                    .all(|((lk, lv), (rk, rv))| lk == rk && serialized_eq(lv, rv))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn differs_by_text(a: &Value, b: &Value) -> bool {
        serde_json::to_string(a).unwrap() != serde_json::to_string(b).unwrap()
    }

    #[test]
    fn default_is_serialized() {
        assert_eq!(EqualityPolicy::default(), EqualityPolicy::Serialized);
    }

    #[test]
    fn serialized_matches_string_comparison() {
        let samples = [
            json!(null),
            json!(true),
            json!(1),
            json!(-3),
            json!("1"),
            json!([1, 2]),
            json!([1, 2, 3]),
            json!([]),
            json!({}),
            json!({"a": 1, "b": [true, null]}),
            json!({"b": [true, null], "a": 1}),
            json!({"a": {"x": "y"}}),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(
                    EqualityPolicy::Serialized.values_differ(a, b),
                    differs_by_text(a, b),
                    "{a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn serialized_is_key_order_sensitive() {
        let a = json!({"a": 1, "b": 2});
        let b = json!({"b": 2, "a": 1});
        assert!(EqualityPolicy::Serialized.values_differ(&a, &b));
        assert!(!EqualityPolicy::Structural.values_differ(&a, &b));
    }

    #[test]
    fn numbers_compare_as_doubles() {
        let pairs = [
            (json!(1), json!(1.0)),
            (json!(100), json!(1e2)),
            (json!(0), json!(-0.0)),
            (json!({"n": [2]}), json!({"n": [2.0]})),
        ];
        for (a, b) in &pairs {
            assert!(!EqualityPolicy::Serialized.values_differ(a, b), "{a} vs {b}");
        }
        assert!(EqualityPolicy::Serialized.values_differ(&json!(1), &json!(1.5)));
    }

    #[test]
    fn structural_keeps_number_representation() {
        assert!(EqualityPolicy::Structural.values_differ(&json!(1), &json!(1.0)));
    }

    #[test]
    fn type_change_differs() {
        let a = json!(42);
        let b = json!("42");
        assert!(EqualityPolicy::Serialized.values_differ(&a, &b));
        assert!(EqualityPolicy::Structural.values_differ(&a, &b));
    }

    #[test]
    fn policy_names_round_trip_through_serde() {
        for policy in [EqualityPolicy::Serialized, EqualityPolicy::Structural] {
            let text = serde_json::to_string(&policy).unwrap();
            assert_eq!(text, format!("\"{}\"", policy.as_str()));
            let back: EqualityPolicy = serde_json::from_str(&text).unwrap();
            assert_eq!(back, policy);
        }
    }
}
