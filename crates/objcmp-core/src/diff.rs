//! Four-way key classification of two values.
//!
//! Every key visible on the source lands in exactly one of omitted, shared,
//! or altered; every key visible on the target lands in exactly one of added,
//! shared, or altered. Which keys are "visible" is controlled by
//! [`DiffOptions`] and is applied identically to both sides.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::equality::is_equal;
use crate::error::{Result, Side};
use crate::keys::{Entry, KeyedView};
use crate::value::Value;

/// Controls which keys participate in a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiffOptions {
    /// Only consider a mapping's own keys. When `false`, the prototype chain
    /// is walked and nearer keys shadow farther ones.
    pub own_properties_only: bool,
    /// Skip non-enumerable keys (including a sequence's `length`).
    pub enumerable_only: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            own_properties_only: true,
            enumerable_only: true,
        }
    }
}

impl DiffOptions {
    pub fn own_properties_only(mut self, own_properties_only: bool) -> Self {
        self.own_properties_only = own_properties_only;
        self
    }

    pub fn enumerable_only(mut self, enumerable_only: bool) -> Self {
        self.enumerable_only = enumerable_only;
        self
    }
}

/// A key present on both sides whose values differ.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlteredProperty {
    pub key: String,
    pub source_value: Value,
    pub target_value: Value,
}

/// The four relations between a source and a target.
///
/// Omitted, shared, and altered keys follow the source's key order; added keys
/// follow the target's.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub omitted_keys: Vec<String>,
    pub added_keys: Vec<String>,
    pub shared_keys: Vec<String>,
    pub altered: Vec<AlteredProperty>,
}

/// Names one of the four relations, for the [`DiffResult::has`] and
/// [`DiffResult::count`] queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Omitted,
    Added,
    Shared,
    Altered,
}

impl Relation {
    pub const ALL: [Relation; 4] = [
        Relation::Omitted,
        Relation::Added,
        Relation::Shared,
        Relation::Altered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Omitted => "omitted",
            Relation::Added => "added",
            Relation::Shared => "shared",
            Relation::Altered => "altered",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DiffResult {
    /// Keys of the altered properties, in order.
    pub fn altered_keys(&self) -> Vec<&str> {
        self.altered.iter().map(|a| a.key.as_str()).collect()
    }

    /// Keys belonging to `relation`.
    pub fn keys(&self, relation: Relation) -> Vec<&str> {
        match relation {
            Relation::Omitted => self.omitted_keys.iter().map(String::as_str).collect(),
            Relation::Added => self.added_keys.iter().map(String::as_str).collect(),
            Relation::Shared => self.shared_keys.iter().map(String::as_str).collect(),
            Relation::Altered => self.altered_keys(),
        }
    }

    pub fn count(&self, relation: Relation) -> usize {
        match relation {
            Relation::Omitted => self.omitted_keys.len(),
            Relation::Added => self.added_keys.len(),
            Relation::Shared => self.shared_keys.len(),
            Relation::Altered => self.altered.len(),
        }
    }

    pub fn has(&self, relation: Relation) -> bool {
        self.count(relation) != 0
    }

    /// True when nothing was omitted, added, or altered.
    pub fn is_identical(&self) -> bool {
        self.omitted_keys.is_empty() && self.added_keys.is_empty() && self.altered.is_empty()
    }

    /// `(key, value)` pairs for the omitted keys, resolved against `source`.
    ///
    /// `source` and `options` must be the ones this result was computed from.
    pub fn omitted_properties(
        &self,
        source: &Value,
        options: &DiffOptions,
    ) -> Result<Vec<(String, Value)>> {
        project(source, Side::Source, &self.omitted_keys, options)
    }

    /// `(key, value)` pairs for the added keys, resolved against `target`.
    pub fn added_properties(
        &self,
        target: &Value,
        options: &DiffOptions,
    ) -> Result<Vec<(String, Value)>> {
        project(target, Side::Target, &self.added_keys, options)
    }

    /// `(key, value)` pairs for the shared keys, resolved against `source`.
    pub fn shared_properties(
        &self,
        source: &Value,
        options: &DiffOptions,
    ) -> Result<Vec<(String, Value)>> {
        project(source, Side::Source, &self.shared_keys, options)
    }
}

/// Classify the keys of `source` and `target` into omitted, added, shared,
/// and altered.
///
/// Both roots must be a mapping, a sequence, or a string (strings compare as
/// sequences of characters). Source is validated first; an invalid root fails
/// the whole call before any comparison runs.
///
/// # Examples
///
/// ```
/// use objcmp_core::{diff, DiffOptions, Value};
/// use serde_json::json;
///
/// let source = Value::from(json!({"type": "car", "wheels": 4}));
/// let target = Value::from(json!({"type": "car", "wheels": 2, "safe": false}));
/// let result = diff(&source, &target, &DiffOptions::default()).unwrap();
///
/// assert!(result.omitted_keys.is_empty());
/// assert_eq!(result.added_keys, vec!["safe"]);
/// assert_eq!(result.shared_keys, vec!["type"]);
/// assert_eq!(result.altered_keys(), vec!["wheels"]);
/// ```
pub fn diff(source: &Value, target: &Value, options: &DiffOptions) -> Result<DiffResult> {
    let source_view = KeyedView::coerce(source, Side::Source)?;
    let target_view = KeyedView::coerce(target, Side::Target)?;

    let source_entries = source_view.entries(options);
    let target_entries = target_view.entries(options);

    let target_index: HashMap<&str, &Value> = target_entries
        .iter()
        .map(|e| (e.key.as_str(), e.value.as_ref()))
        .collect();
    let source_index: HashSet<&str> = source_entries.iter().map(|e| e.key.as_str()).collect();

    let mut result = DiffResult::default();

    for entry in &source_entries {
        match target_index.get(entry.key.as_str()) {
            None => {
                trace!(key = %entry.key, "omitted");
                result.omitted_keys.push(entry.key.clone());
            }
            Some(target_value) if is_equal(&entry.value, target_value) => {
                trace!(key = %entry.key, "shared");
                result.shared_keys.push(entry.key.clone());
            }
            Some(target_value) => {
                trace!(key = %entry.key, "altered");
                result.altered.push(AlteredProperty {
                    key: entry.key.clone(),
                    source_value: entry.value.as_ref().clone(),
                    target_value: (*target_value).clone(),
                });
            }
        }
    }

    for entry in &target_entries {
        if !source_index.contains(entry.key.as_str()) {
            trace!(key = %entry.key, "added");
            result.added_keys.push(entry.key.clone());
        }
    }

    debug!(
        source_kind = %source.kind(),
        target_kind = %target.kind(),
        omitted = result.omitted_keys.len(),
        added = result.added_keys.len(),
        shared = result.shared_keys.len(),
        altered = result.altered.len(),
        "classified keys"
    );

    Ok(result)
}

/// [`diff`] with [`DiffOptions::default`]: own, enumerable keys only.
pub fn diff_default(source: &Value, target: &Value) -> Result<DiffResult> {
    diff(source, target, &DiffOptions::default())
}

fn project(
    root: &Value,
    side: Side,
    keys: &[String],
    options: &DiffOptions,
) -> Result<Vec<(String, Value)>> {
    let view = KeyedView::coerce(root, side)?;
    let entries = view.entries(options);
    Ok(keys
        .iter()
        .filter_map(|key| find(&entries, key))
        .map(|e| (e.key.clone(), e.value.as_ref().clone()))
        .collect())
}

fn find<'e, 'v>(entries: &'e [Entry<'v>], key: &str) -> Option<&'e Entry<'v>> {
    entries.iter().find(|e| e.key == key)
}
