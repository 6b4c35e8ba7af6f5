//! Structural equality over keyed records

#![allow(clippy::must_use_candidate)]

use serde_json::{Number, Value};

/// Compare two records structurally
///
/// Both operands must be present and non-null. Objects are equal when they
/// have the same key set, in any order, and every value under a key is
/// equal; nested objects are compared the same way and anything else by
/// value. Never fails: mismatches, asymmetric keys and absent operands all
/// yield `false`.
pub fn deep_equals(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (Some(Value::Null), _) | (_, Some(Value::Null)) | (None, _) | (_, None) => false,
        (Some(left), Some(right)) => values_equal(left, right),
    }
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, value)| right.get(key).is_some_and(|other| values_equal(value, other)))
        }
        (Value::Number(left), Value::Number(right)) => numbers_equal(left, right),
        _ => left == right,
    }
}

/// Numbers compare by value, so `1` equals `1.0`
///
/// Integers that fit the same integer type compare exactly.
#[allow(clippy::float_cmp)]
fn numbers_equal(left: &Number, right: &Number) -> bool {
    if let (Some(left), Some(right)) = (left.as_i64(), right.as_i64()) {
        return left == right;
    }

    if let (Some(left), Some(right)) = (left.as_u64(), right.as_u64()) {
        return left == right;
    }

    match (left.as_f64(), right.as_f64()) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}
