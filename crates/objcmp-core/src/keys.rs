//! Coercion of diff roots into keyed form and key enumeration.

use std::borrow::Cow;

use crate::diff::DiffOptions;
use crate::error::{DiffError, Result, Side};
use crate::value::{Mapping, Value};

/// Key of the non-enumerable length property exposed by sequences.
const LENGTH_KEY: &str = "length";

/// A diff root viewed as a keyed collection.
///
/// Strings are exploded into one single-character string per Unicode scalar
/// value, so they share the sequence representation.
#[derive(Debug)]
pub(crate) enum KeyedView<'a> {
    Mapping(&'a Mapping),
    Sequence(Cow<'a, [Value]>),
}

/// One key visible under the active options, with the value it resolves to.
#[derive(Debug)]
pub(crate) struct Entry<'a> {
    pub key: String,
    pub value: Cow<'a, Value>,
}

impl<'a> KeyedView<'a> {
    /// Fails when `value` is neither a mapping, a sequence, nor a string.
    pub(crate) fn coerce(value: &'a Value, side: Side) -> Result<Self> {
        match value {
            Value::Mapping(mapping) => Ok(Self::Mapping(mapping)),
            Value::Sequence(items) => Ok(Self::Sequence(Cow::Borrowed(items))),
            Value::String(s) => Ok(Self::Sequence(Cow::Owned(
                s.chars().map(|c| Value::String(c.to_string())).collect(),
            ))),
            other => Err(DiffError::InvalidArgument {
                side,
                kind: other.kind(),
            }),
        }
    }

    /// Visible keys in enumeration order.
    ///
    /// Mappings list own properties first, then (when inherited keys are
    /// allowed) each prototype level in chain order. A key seen at a nearer
    /// level shadows the same key further up, even when the nearer property
    /// is hidden by the enumerable filter.
    pub(crate) fn entries(&self, options: &DiffOptions) -> Vec<Entry<'_>> {
        match self {
            KeyedView::Mapping(mapping) => mapping_entries(mapping, options),
            KeyedView::Sequence(items) => sequence_entries(items, options),
        }
    }
}

fn mapping_entries<'m>(mapping: &'m Mapping, options: &DiffOptions) -> Vec<Entry<'m>> {
    let mut seen: Vec<&'m str> = Vec::new();
    let mut entries = Vec::new();
    let mut level = Some(mapping);

    while let Some(current) = level {
        for property in current.properties() {
            if seen.contains(&property.key.as_str()) {
                continue;
            }
            seen.push(&property.key);
            if property.enumerable || !options.enumerable_only {
                entries.push(Entry {
                    key: property.key.clone(),
                    value: Cow::Borrowed(&property.value),
                });
            }
        }
        level = if options.own_properties_only {
            None
        } else {
            current.prototype()
        };
    }

    entries
}

fn sequence_entries<'s>(items: &'s [Value], options: &DiffOptions) -> Vec<Entry<'s>> {
    let mut entries: Vec<Entry<'s>> = items
        .iter()
        .enumerate()
        .map(|(index, item)| Entry {
            key: index.to_string(),
            value: Cow::Borrowed(item),
        })
        .collect();

    if !options.enumerable_only {
        entries.push(Entry {
            key: LENGTH_KEY.to_string(),
            value: Cow::Owned(Value::Number(items.len() as f64)),
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(view: &KeyedView<'_>, options: &DiffOptions) -> Vec<String> {
        view.entries(options).into_iter().map(|e| e.key).collect()
    }

    #[test]
    fn strings_explode_per_scalar_value() {
        let value = Value::from("héllo");
        let view = KeyedView::coerce(&value, Side::Source).unwrap();
        let entries = view.entries(&DiffOptions::default());
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[1].value.as_ref(), &Value::from("é"));
    }

    #[test]
    fn primitives_are_rejected_with_side() {
        let err = KeyedView::coerce(&Value::Bool(true), Side::Target).unwrap_err();
        assert_eq!(
            err,
            DiffError::InvalidArgument {
                side: Side::Target,
                kind: crate::value::ValueKind::Boolean,
            }
        );
    }

    #[test]
    fn hidden_own_property_shadows_inherited_one() {
        let proto = Mapping::new().with("a", 1).with("b", 2);
        let mapping = Mapping::new().with_hidden("a", 0).with_prototype(proto);
        let view = KeyedView::Mapping(&mapping);
        let options = DiffOptions::default().own_properties_only(false);
        assert_eq!(keys(&view, &options), vec!["b"]);
        let all = options.enumerable_only(false);
        assert_eq!(keys(&view, &all), vec!["a", "b"]);
    }

    #[test]
    fn sequence_length_is_non_enumerable() {
        let value = Value::from(vec![Value::Null, Value::Null]);
        let view = KeyedView::coerce(&value, Side::Source).unwrap();
        assert_eq!(keys(&view, &DiffOptions::default()), vec!["0", "1"]);
        assert_eq!(
            keys(&view, &DiffOptions::default().enumerable_only(false)),
            vec!["0", "1", "length"]
        );
    }
}
