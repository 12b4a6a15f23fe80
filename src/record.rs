//! Tagged reference records and their field values.
//!
//! This module provides the data model shared by every rule:
//! - [`Record`] - Mapping from field key to [`Value`], in insertion order
//! - [`Value`] - Raw fragments or a normalized scalar
//! - [`NameList`] - Ordered person names plus their joined display form
//!
//! # Examples
//!
//! ```
//! use refnorm::{Record, Value};
//!
//! let record = Record::builder()
//!     .text("author", "Doe, Jane and Smith, J")
//!     .fragments("title", ["Handbook, 3rd ed.", "Journal of Things"])
//!     .build();
//!
//! assert_eq!(record.len(), 2);
//! assert!(matches!(record.get("title"), Some(Value::Fragments(_))));
//! ```

use crate::error::{NormalizeError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Fragments assigned to one field: the primary fragment plus, usually, at
/// most one secondary fragment.
pub type Fragments = SmallVec<[String; 2]>;

/// Prefix of the synthetic keys that hold overflow fragments.
pub const UNMATCHED_PREFIX: &str = "unmatched-";

/// An ordered list of person names.
///
/// Keeps the individual names for indexing and the joined form for display;
/// both are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameList {
    names: Vec<String>,
    joined: String,
}

impl NameList {
    /// Create a name list, joining the names with `separator`.
    #[must_use]
    pub fn new(names: Vec<String>, separator: &str) -> Self {
        let joined = names.join(separator);
        NameList { names, joined }
    }

    /// The individual names, in source order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The names joined with the separator given at construction.
    #[must_use]
    pub fn joined(&self) -> &str {
        &self.joined
    }

    /// Number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no names were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Display for NameList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined)
    }
}

/// The value stored under one field key.
///
/// Serialized untagged, so a JSON record reads naturally:
/// `{"title": ["Handbook", "Journal"], "year": 2012, "etal": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean marker such as `etal`
    Flag(bool),
    /// Extracted number such as `year`, `edition`, `volume`
    Integer(u32),
    /// A single raw fragment or a normalized string
    Text(String),
    /// Primary fragment followed by secondary fragments
    Fragments(Fragments),
    /// Normalized person names
    Names(NameList),
}

impl Value {
    /// Build a [`Value::Fragments`] from any list of strings.
    #[must_use]
    pub fn fragments<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::Fragments(items.into_iter().map(Into::into).collect())
    }

    /// Short name of the value kind, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Flag(_) => "flag",
            Value::Integer(_) => "integer",
            Value::Text(_) => "text",
            Value::Fragments(_) => "fragments",
            Value::Names(_) => "names",
        }
    }

    /// True for values still in the tagger's raw form.
    #[must_use]
    pub fn is_raw(&self) -> bool {
        matches!(self, Value::Text(_) | Value::Fragments(_))
    }

    /// The string form of a text value, or the joined form of a name list.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Names(names) => Some(names.joined()),
            _ => None,
        }
    }

    /// The integer, if this is an integer value.
    #[must_use]
    pub fn as_integer(&self) -> Option<u32> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The flag, if this is a flag value.
    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// The name list, if this is a names value.
    #[must_use]
    pub fn as_names(&self) -> Option<&NameList> {
        match self {
            Value::Names(names) => Some(names),
            _ => None,
        }
    }

    /// Read the value as owned text fragments.
    ///
    /// Integers read as their decimal form and name lists as their joined
    /// form, so a rule rerun on its own output sees the same text again.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::UnexpectedValue`] for flags.
    pub fn to_fragments(&self, field: &str) -> Result<Fragments> {
        match self {
            Value::Text(s) => Ok(smallvec::smallvec![s.clone()]),
            Value::Fragments(fragments) => Ok(fragments.clone()),
            Value::Integer(n) => Ok(smallvec::smallvec![n.to_string()]),
            Value::Names(names) => Ok(smallvec::smallvec![names.joined().to_string()]),
            Value::Flag(_) => Err(NormalizeError::UnexpectedValue {
                field: field.to_string(),
                found: self.kind(),
            }),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Flag(value)
    }
}

impl From<NameList> for Value {
    fn from(value: NameList) -> Self {
        Value::Names(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::Fragments(value.into_iter().collect())
    }
}

/// A tagged reference: field key to value.
///
/// Fields are stored in insertion order using `IndexMap`; removing a key
/// keeps the relative order of the remaining ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Record {
            fields: IndexMap::new(),
        }
    }

    /// Create a builder for fluently constructing records.
    #[must_use]
    pub fn builder() -> RecordBuilder {
        RecordBuilder {
            record: Record::new(),
        }
    }

    /// Insert or replace a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Remove a field, keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    /// Get a field value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// True if the field is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Text of a field (see [`Value::as_str`]).
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Integer value of a field.
    #[must_use]
    pub fn integer(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(Value::as_integer)
    }

    /// Flag value of a field.
    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_flag)
    }

    /// Name list stored under a field.
    #[must_use]
    pub fn names(&self, key: &str) -> Option<&NameList> {
        self.get(key).and_then(Value::as_names)
    }

    /// Read a field as owned fragments.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::MissingField`] if the key is absent, or
    /// [`NormalizeError::UnexpectedValue`] if it holds a flag.
    pub fn fragments(&self, key: &str) -> Result<Fragments> {
        self.get(key)
            .ok_or_else(|| NormalizeError::MissingField(key.to_string()))?
            .to_fragments(key)
    }

    /// Store overflow fragments for `key` under `unmatched-<key>`.
    ///
    /// Does nothing when `dangling` is empty.
    pub fn set_unmatched(&mut self, key: &str, dangling: &[String]) {
        if dangling.is_empty() {
            return;
        }
        self.insert(format!("{UNMATCHED_PREFIX}{key}"), dangling.join(" "));
    }

    /// Overflow text recorded for `key`, if any.
    #[must_use]
    pub fn unmatched(&self, key: &str) -> Option<&str> {
        self.text(&format!("{UNMATCHED_PREFIX}{key}"))
    }

    /// Iterate over field keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Builder for fluently constructing records.
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Add a single-fragment field.
    #[must_use]
    pub fn text(mut self, key: &str, value: &str) -> Self {
        self.record.insert(key, value);
        self
    }

    /// Add a multi-fragment field.
    #[must_use]
    pub fn fragments<I, S>(mut self, key: &str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record.insert(key, Value::fragments(items));
        self
    }

    /// Add any value.
    #[must_use]
    pub fn value(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.record.insert(key, value);
        self
    }

    /// Build the record.
    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}
