//! Semantic attribute map used by business logic.
//!
//! Each key maps to nothing, to a single string, or to a list of strings.
//! Values accumulate the way multi-valued directory attributes do: the first
//! value is stored as a scalar and a second value promotes the entry to a
//! list.

use crate::error::{AttrError, AttrResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Value stored under one key of an [`AttrMap`].
///
/// Serializes to JSON `null`, a string, or an array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// No value; on the wire this removes the attribute
    #[default]
    Absent,
    Single(String),
    /// Multiple values. An empty list also means removal.
    Multi(Vec<String>),
}

impl AttrValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// All values held by this entry, in order. Empty for `Absent`.
    pub fn to_vec(&self) -> Vec<&str> {
        match self {
            Self::Absent => Vec::new(),
            Self::Single(value) => vec![value.as_str()],
            Self::Multi(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// First value, if any.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Single(value) => Some(value),
            Self::Multi(values) => values.first().map(String::as_str),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Single(_) => 1,
            Self::Multi(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Accumulate one more value into this entry.
    ///
    /// An absent value is only recorded when the entry has no values yet.
    pub fn push(&mut self, value: Option<String>) {
        let Some(value) = value else {
            return;
        };
        match self {
            Self::Absent => *self = Self::Single(value),
            Self::Single(current) => {
                let current = std::mem::take(current);
                *self = Self::Multi(vec![current, value]);
            }
            Self::Multi(values) => values.push(value),
        }
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Option<String>> for AttrValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Absent, Self::Single)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multi(values)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multi(values.into_iter().map(str::to_string).collect())
    }
}

/// Multi-valued attribute map keyed by attribute name.
///
/// Iteration is in key order.
///
/// ```rust
/// use admin_attrs::attrs::{AttrMap, AttrValue};
///
/// let mut map = AttrMap::new();
/// map.add("zimbraMailAlias", Some("a@example.com".to_string()));
/// map.add("zimbraMailAlias", Some("b@example.com".to_string()));
/// map.add("displayName", Some("Alice".to_string()));
///
/// assert_eq!(map.get("displayName"), Some(&AttrValue::from("Alice")));
/// assert_eq!(map.values("zimbraMailAlias"), vec!["a@example.com", "b@example.com"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrMap {
    entries: BTreeMap<String, AttrValue>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a flat `k1 v1 k2 v2 k2 v3` argument list into a map.
    ///
    /// Repeated keys accumulate. A trailing key with no value fails with
    /// [`AttrError::NotEnoughArguments`].
    pub fn from_key_value_args<S: AsRef<str>>(args: &[S]) -> AttrResult<Self> {
        let mut map = Self::new();
        let mut args = args.iter().map(AsRef::as_ref);
        while let Some(key) = args.next() {
            let value = args.next().ok_or_else(|| AttrError::NotEnoughArguments {
                key: key.to_string(),
            })?;
            map.add(key, Some(value.to_string()));
        }
        Ok(map)
    }

    /// Store `value` under `key`, replacing whatever was there.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Accumulate `value` under `key` with multi-value semantics.
    pub fn add(&mut self, key: impl Into<String>, value: Option<String>) {
        self.entries.entry(key.into()).or_default().push(value);
    }

    /// Record a value to add to an existing multi-valued attribute.
    pub fn add_value(&mut self, name: &str, value: impl Into<String>) {
        self.add(format!("+{name}"), Some(value.into()));
    }

    /// Record a value to remove from an existing multi-valued attribute.
    pub fn remove_value(&mut self, name: &str, value: impl Into<String>) {
        self.add(format!("-{name}"), Some(value.into()));
    }

    /// Mark the attribute for removal, replacing any pending values.
    pub fn unset(&mut self, name: impl Into<String>) {
        self.entries.insert(name.into(), AttrValue::Single(String::new()));
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    /// Values stored under `key`; empty when the key is missing or absent.
    pub fn values(&self, key: &str) -> Vec<&str> {
        self.entries.get(key).map(AttrValue::to_vec).unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, AttrValue> {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for AttrMap {
    type Item = (String, AttrValue);
    type IntoIter = btree_map::IntoIter<String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttrMap {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = btree_map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
