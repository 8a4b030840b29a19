//! The `Value` model: a closed tagged union over everything the engine can compare.
//!
//! Host data enters through [`From<serde_json::Value>`], which is the only place
//! runtime type inspection happens. Symbols, functions, prototypes, and
//! non-enumerable properties have no JSON spelling, so they are built directly
//! with the constructors on [`Value`] and [`Mapping`].

use std::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Largest integer magnitude an `f64` represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// A comparable value.
///
/// The derived `PartialEq` is a strict, order-sensitive representation check.
/// Structural comparison goes through [`crate::is_equal`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Undefined,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    /// A symbol, identified by its optional description label.
    Symbol(Option<String>),
    Function(FunctionValue),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

/// Runtime type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Undefined,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
    Sequence,
    Mapping,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Undefined => "undefined",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::BigInt => "bigint",
            ValueKind::String => "string",
            ValueKind::Symbol => "symbol",
            ValueKind::Function => "function",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A function compared by shape: name, declared parameter count, and source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionValue {
    pub name: String,
    pub arity: usize,
    pub source: String,
}

/// A single mapping entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Value,
    pub enumerable: bool,
}

/// Insertion-ordered string-keyed properties with an optional prototype.
///
/// Uses a `Vec` rather than a hash map: key order is observable in diff output
/// and mappings compared by this crate are small.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    properties: Vec<Property>,
    prototype: Option<Box<Mapping>>,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Undefined => ValueKind::Undefined,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::BigInt(_) => ValueKind::BigInt,
            Value::String(_) => ValueKind::String,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Function(_) => ValueKind::Function,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Mapping(_) => ValueKind::Mapping,
        }
    }

    /// `Symbol(description)`.
    pub fn symbol(description: impl Into<String>) -> Self {
        Value::Symbol(Some(description.into()))
    }

    pub fn function(name: impl Into<String>, arity: usize, source: impl Into<String>) -> Self {
        Value::Function(FunctionValue {
            name: name.into(),
            arity,
            source: source.into(),
        })
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an enumerable property. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.define(key, value, true);
    }

    /// Set a property with an explicit enumerable flag.
    pub fn define(&mut self, key: impl Into<String>, value: impl Into<Value>, enumerable: bool) {
        let key = key.into();
        let value = value.into();
        match self.properties.iter_mut().find(|p| p.key == key) {
            Some(existing) => {
                existing.value = value;
                existing.enumerable = enumerable;
            }
            None => self.properties.push(Property {
                key,
                value,
                enumerable,
            }),
        }
    }

    /// Builder form of [`Mapping::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`Mapping::define`] with `enumerable = false`.
    pub fn with_hidden(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.define(key, value, false);
        self
    }

    pub fn with_prototype(mut self, prototype: Mapping) -> Self {
        self.prototype = Some(Box::new(prototype));
        self
    }

    pub fn prototype(&self) -> Option<&Mapping> {
        self.prototype.as_deref()
    }

    /// Own properties in insertion order, enumerable or not.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    pub fn own_property(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.key == key)
    }

    /// Own enumerable `(key, value)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .filter(|p| p.enumerable)
            .map(|p| (p.key.as_str(), &p.value))
    }

    /// Value of an own enumerable property.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.own_property(key)
            .filter(|p| p.enumerable)
            .map(|p| &p.value)
    }

    /// Number of own enumerable properties.
    pub fn len(&self) -> usize {
        self.properties.iter().filter(|p| p.enumerable).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Value::Mapping(mapping)
    }
}

impl From<FunctionValue> for Value {
    fn from(f: FunctionValue) -> Self {
        Value::Function(f)
    }
}

/// Classify a JSON value into the comparison union.
///
/// Integers beyond the exactly-representable `f64` range become `BigInt` so no
/// precision is lost; everything else numeric becomes `Number`. Object key
/// order is preserved (`serde_json` is built with `preserve_order`).
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => number_to_value(&n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

fn number_to_value(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        if i.unsigned_abs() <= MAX_SAFE_INTEGER {
            return Value::Number(i as f64);
        }
        return Value::BigInt(i128::from(i));
    }
    if let Some(u) = n.as_u64() {
        if u <= MAX_SAFE_INTEGER {
            return Value::Number(u as f64);
        }
        return Value::BigInt(i128::from(u));
    }
    Value::Number(n.as_f64().unwrap_or(f64::NAN))
}

/// JSON rendering for reports. Lossy for kinds JSON cannot express:
/// nullish → `null`, non-finite numbers → `null`, bigints → decimal strings,
/// symbols → `"Symbol(desc)"`, functions → `"[Function name]"`. Mappings emit
/// own enumerable properties only.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null | Value::Undefined => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if !n.is_finite() => serializer.serialize_unit(),
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::BigInt(i) => serializer.serialize_str(&i.to_string()),
            Value::String(s) => serializer.serialize_str(s),
            Value::Symbol(description) => serializer.serialize_str(&format!(
                "Symbol({})",
                description.as_deref().unwrap_or_default()
            )),
            Value::Function(f) => serializer.serialize_str(&format!("[Function {}]", f.name)),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(mapping) => mapping.serialize(serializer),
        }
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.entries() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
