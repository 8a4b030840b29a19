//! Structural equality tests for `is_equal`.
//!
//! Covers each rule of the comparison in turn: primitives, the nullish
//! policy, symbols, functions, sequences, and mappings.

use objcmp_core::{is_equal, Mapping, Value};
use serde_json::json;

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

// ============================================================================
// 1. Primitives
// ============================================================================

#[test]
fn equal_primitives_are_equal() {
    assert!(is_equal(&Value::from(1), &Value::from(1)));
    assert!(is_equal(&Value::from("a"), &Value::from("a")));
    assert!(is_equal(&Value::Bool(false), &Value::Bool(false)));
    assert!(is_equal(&Value::BigInt(7), &Value::BigInt(7)));
}

#[test]
fn differing_primitives_are_unequal() {
    assert!(!is_equal(&Value::from(1), &Value::from(2)));
    assert!(!is_equal(&Value::from("a"), &Value::from("b")));
    assert!(!is_equal(&Value::Bool(true), &Value::Bool(false)));
}

#[test]
fn number_and_bigint_never_match() {
    assert!(!is_equal(&Value::Number(1.0), &Value::BigInt(1)));
}

#[test]
fn number_and_numeric_string_never_match() {
    assert!(!is_equal(&Value::from(1), &Value::from("1")));
}

#[test]
fn nan_follows_native_equality() {
    assert!(!is_equal(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
    assert!(is_equal(&Value::Number(0.0), &Value::Number(-0.0)));
}

// ============================================================================
// 2. Nullish policy: null and undefined are distinct
// ============================================================================

#[test]
fn null_equals_null() {
    assert!(is_equal(&Value::Null, &Value::Null));
    assert!(is_equal(&Value::Undefined, &Value::Undefined));
}

#[test]
fn null_and_undefined_are_distinct() {
    assert!(!is_equal(&Value::Null, &Value::Undefined));
    assert!(!is_equal(&Value::Undefined, &Value::Null));
}

#[test]
fn nullish_inside_mapping_is_distinct() {
    let a = Value::Mapping(Mapping::new().with("x", Value::Null));
    let b = Value::Mapping(Mapping::new().with("x", Value::Undefined));
    assert!(!is_equal(&a, &b));
}

// ============================================================================
// 3. Symbols compare by description
// ============================================================================

#[test]
fn symbols_with_same_description_are_equal() {
    assert!(is_equal(&Value::symbol("x"), &Value::symbol("x")));
}

#[test]
fn symbols_with_different_descriptions_are_unequal() {
    assert!(!is_equal(&Value::symbol("x"), &Value::symbol("y")));
}

#[test]
fn symbol_without_description_differs_from_empty_description() {
    assert!(is_equal(&Value::Symbol(None), &Value::Symbol(None)));
    assert!(!is_equal(&Value::Symbol(None), &Value::symbol("")));
}

#[test]
fn symbol_never_equals_its_description_string() {
    assert!(!is_equal(&Value::symbol("x"), &Value::from("x")));
}

// ============================================================================
// 4. Functions compare by name, arity, and source
// ============================================================================

#[test]
fn structurally_identical_functions_are_equal() {
    let a = Value::function("drive", 1, "drive(speed) { return speed; }");
    let b = Value::function("drive", 1, "drive(speed) { return speed; }");
    assert!(is_equal(&a, &b));
}

#[test]
fn functions_differing_in_name_are_unequal() {
    let a = Value::function("drive", 1, "(speed) => speed");
    let b = Value::function("steer", 1, "(speed) => speed");
    assert!(!is_equal(&a, &b));
}

#[test]
fn functions_differing_in_arity_are_unequal() {
    let a = Value::function("drive", 1, "(speed) => speed");
    let b = Value::function("drive", 2, "(speed) => speed");
    assert!(!is_equal(&a, &b));
}

#[test]
fn functions_differing_in_source_are_unequal() {
    let a = Value::function("drive", 1, "(speed) => speed");
    let b = Value::function("drive", 1, "(speed) => speed * 2");
    assert!(!is_equal(&a, &b));
}

// ============================================================================
// 5. Sequences
// ============================================================================

#[test]
fn sequences_with_equal_elements_are_equal() {
    assert!(is_equal(&v(json!([1, "a", [true]])), &v(json!([1, "a", [true]]))));
}

#[test]
fn sequences_of_different_length_are_unequal() {
    assert!(!is_equal(&v(json!([1, 2])), &v(json!([1, 2, 3]))));
    assert!(!is_equal(&v(json!([1, 2, 3])), &v(json!([1, 2]))));
}

#[test]
fn sequence_order_matters() {
    assert!(!is_equal(&v(json!([1, 2])), &v(json!([2, 1]))));
}

#[test]
fn empty_sequences_are_equal() {
    assert!(is_equal(&v(json!([])), &v(json!([]))));
}

#[test]
fn sequence_never_equals_mapping() {
    assert!(!is_equal(&v(json!([])), &v(json!({}))));
    assert!(!is_equal(&v(json!(["a"])), &v(json!({"0": "a"}))));
}

// ============================================================================
// 6. Mappings
// ============================================================================

#[test]
fn mappings_ignore_key_order() {
    let a = v(json!({"make": "Ford", "year": 1967}));
    let b = v(json!({"year": 1967, "make": "Ford"}));
    assert!(is_equal(&a, &b));
}

#[test]
fn mappings_with_extra_key_are_unequal() {
    let a = v(json!({"make": "Ford"}));
    let b = v(json!({"make": "Ford", "year": 1967}));
    assert!(!is_equal(&a, &b));
    assert!(!is_equal(&b, &a));
}

#[test]
fn mappings_with_same_size_but_different_keys_are_unequal() {
    assert!(!is_equal(&v(json!({"a": 1})), &v(json!({"b": 1}))));
}

#[test]
fn nested_difference_is_detected() {
    let a = v(json!({"engine": {"cylinders": [1, 2, 3, 4]}}));
    let b = v(json!({"engine": {"cylinders": [1, 2, 3, 5]}}));
    assert!(!is_equal(&a, &b));
}

#[test]
fn nested_symbols_and_functions_compare_structurally() {
    let build = || {
        Value::Mapping(
            Mapping::new()
                .with("id", Value::symbol("vin"))
                .with("honk", Value::function("honk", 0, "honk() {}")),
        )
    };
    assert!(is_equal(&build(), &build()));
}

#[test]
fn non_enumerable_properties_are_ignored() {
    let a = Value::Mapping(Mapping::new().with("a", 1).with_hidden("secret", 1));
    let b = Value::Mapping(Mapping::new().with("a", 1).with_hidden("secret", 2));
    assert!(is_equal(&a, &b));
}

#[test]
fn prototypes_are_ignored() {
    let a = Value::Mapping(Mapping::new().with("a", 1).with_prototype(Mapping::new().with("p", 1)));
    let b = Value::Mapping(Mapping::new().with("a", 1));
    assert!(is_equal(&a, &b));
}

#[test]
fn hidden_key_does_not_satisfy_enumerable_key() {
    let a = Value::Mapping(Mapping::new().with("a", 1).with("b", 2));
    let b = Value::Mapping(Mapping::new().with("a", 1).with_hidden("b", 2).with("c", 3));
    assert!(!is_equal(&a, &b));
}

#[test]
fn equality_is_symmetric_for_sample_pairs() {
    let samples = [
        v(json!({"a": [1, {"b": null}]})),
        v(json!({"a": [1, {"b": 0}]})),
        v(json!([1, 2, 3])),
        v(json!("abc")),
        Value::Undefined,
        Value::symbol("s"),
    ];
    for a in &samples {
        for b in &samples {
            assert_eq!(is_equal(a, b), is_equal(b, a), "{a:?} vs {b:?}");
        }
    }
}
