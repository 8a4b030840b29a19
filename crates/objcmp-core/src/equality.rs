//! Structural equality over [`Value`].
//!
//! Comparison walks an explicit worklist of pending pairs instead of recursing,
//! so nesting depth is bounded by heap, not stack.

use crate::value::Value;

/// Decide whether two values are structurally equivalent.
///
/// Rules, checked in order:
///
/// - Composite values (sequence, mapping, function) at the same address are equal.
/// - Differing type tags are unequal. `Null` and `Undefined` carry different
///   tags, so they never equal each other.
/// - Symbols compare by description, not identity.
/// - Functions compare by name, arity, and source text.
/// - Sequences need equal length and pairwise-equal elements.
/// - Mappings need the same number of own enumerable properties, and every own
///   enumerable key of `a` must be an own enumerable key of `b` with an equal
///   value. Prototypes and non-enumerable properties are ignored.
/// - Remaining primitives use native equality, so `NaN` is unequal to itself
///   and `0.0` equals `-0.0`.
///
/// # Examples
///
/// ```
/// use objcmp_core::{is_equal, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!({"x": [1, 2], "y": "z"}));
/// let b = Value::from(json!({"y": "z", "x": [1, 2]}));
/// assert!(is_equal(&a, &b));
/// assert!(is_equal(&Value::symbol("id"), &Value::symbol("id")));
/// assert!(!is_equal(&Value::Null, &Value::Undefined));
/// ```
pub fn is_equal(a: &Value, b: &Value) -> bool {
    let mut pending: Vec<(&Value, &Value)> = vec![(a, b)];
    while let Some((a, b)) = pending.pop() {
        if !compare_shallow(a, b, &mut pending) {
            return false;
        }
    }
    true
}

/// Compare one level of `a` and `b`, queueing child pairs onto `pending`.
fn compare_shallow<'v>(
    a: &'v Value,
    b: &'v Value,
    pending: &mut Vec<(&'v Value, &'v Value)>,
) -> bool {
    if is_composite(a) && std::ptr::eq(a, b) {
        return true;
    }
    if a.kind() != b.kind() {
        return false;
    }
    match (a, b) {
        (Value::Null, Value::Null) | (Value::Undefined, Value::Undefined) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x == y,
        (Value::Function(x), Value::Function(y)) => {
            x.name == y.name && x.arity == y.arity && x.source == y.source
        }
        (Value::Sequence(xs), Value::Sequence(ys)) => {
            if xs.len() != ys.len() {
                return false;
            }
            // Reversed so the lowest index is popped first.
            pending.extend(xs.iter().zip(ys.iter()).rev());
            true
        }
        (Value::Mapping(x), Value::Mapping(y)) => {
            if x.len() != y.len() {
                return false;
            }
            let mut children = Vec::with_capacity(x.len());
            for (key, value) in x.entries() {
                match y.get(key) {
                    Some(other) => children.push((value, other)),
                    None => return false,
                }
            }
            pending.extend(children.into_iter().rev());
            true
        }
        _ => false,
    }
}

fn is_composite(value: &Value) -> bool {
    matches!(
        value,
        Value::Sequence(_) | Value::Mapping(_) | Value::Function(_)
    )
}
