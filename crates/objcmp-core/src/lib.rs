//! # objcmp-core
//!
//! Structural equality and four-way key diffing for dynamically typed values.
//!
//! Given a **source** and a **target**, [`diff`] sorts every visible key into
//! one of four relations:
//!
//! - **omitted**: only in the source
//! - **added**: only in the target
//! - **shared**: in both, with structurally equal values
//! - **altered**: in both, with differing values (both values are kept)
//!
//! Values that differ are detected with [`is_equal`], a total structural
//! comparison over the [`Value`] union.
//!
//! ## Quick start
//!
//! ```rust
//! use objcmp_core::{diff_default, is_equal, Value};
//! use serde_json::json;
//!
//! let source = Value::from(json!({"type": "car", "wheels": 4}));
//! let target = Value::from(json!({"type": "car", "wheels": 2, "safe": false}));
//!
//! let result = diff_default(&source, &target).unwrap();
//! assert_eq!(result.added_keys, vec!["safe"]);
//! assert_eq!(result.shared_keys, vec!["type"]);
//! assert_eq!(result.altered[0].source_value, Value::from(4));
//!
//! // Strings diff as character sequences.
//! let result = diff_default(&Value::from("abc"), &Value::from("abd")).unwrap();
//! assert_eq!(result.altered_keys(), vec!["2"]);
//!
//! assert!(!is_equal(&source, &target));
//! ```
//!
//! ## Modules
//!
//! - [`value`] — `Value` union, `Mapping`, JSON coercion
//! - [`equality`] — structural equality (`is_equal`)
//! - [`diff`] — key classification (`diff`, `DiffOptions`, `DiffResult`)
//! - [`error`] — error types for invalid diff roots

pub mod diff;
pub mod equality;
pub mod error;
mod keys;
pub mod value;

pub use diff::{diff, diff_default, AlteredProperty, DiffOptions, DiffResult, Relation};
pub use equality::is_equal;
pub use error::{DiffError, Side};
pub use value::{FunctionValue, Mapping, Property, Value, ValueKind};
