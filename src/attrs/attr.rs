//! The generic admin attribute element and its map conversions.
//!
//! `Attr` is the `<a n="name">value</a>` element carried by admin requests
//! and responses. The conversion helpers move attributes between the
//! ordered pair list used on the wire and the [`AttrMap`] used by callers.

use crate::attrs::key_value::KeyValuePair;
use crate::attrs::multimap::{AttrMap, AttrValue};
use crate::error::{AttrError, AttrResult};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One admin attribute name/value pair.
///
/// ```rust
/// use admin_attrs::attrs::{Attr, AttrMap, AttrValue};
///
/// let mut map = AttrMap::new();
/// map.insert("zimbraMailAlias", vec!["a@example.com", "b@example.com"]);
/// map.insert("zimbraNotes", AttrValue::Multi(vec![]));
///
/// let attrs = Attr::map_to_list(&map);
/// assert_eq!(attrs.len(), 3);
/// assert_eq!(attrs[0].key(), "zimbraMailAlias");
/// assert_eq!(attrs[2].value(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attr(KeyValuePair);

impl Attr {
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self(KeyValuePair::new(key, value))
    }

    /// Build an attribute from a name and a present value.
    pub fn from_name_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, Some(value.into()))
    }

    pub fn key(&self) -> &str {
        self.0.key()
    }

    pub fn value(&self) -> Option<&str> {
        self.0.value()
    }

    pub fn set_value(&mut self, value: Option<String>) -> Option<String> {
        self.0.set_value(value)
    }

    pub fn has_empty_value(&self) -> bool {
        self.0.has_empty_value()
    }

    pub fn into_parts(self) -> (String, Option<String>) {
        self.0.into_parts()
    }

    /// Flatten a semantic map into pairs.
    ///
    /// Each value of a list becomes its own pair, in list order. A missing
    /// value or an empty list becomes a single pair with no value, which
    /// tells the server to remove the attribute.
    pub fn map_to_list(map: &AttrMap) -> Vec<Attr> {
        let mut attrs = Vec::with_capacity(map.len());
        for (key, value) in map {
            push_entry(&mut attrs, key, value);
        }
        debug!(
            "Flattened {} attribute entries into {} pairs",
            map.len(),
            attrs.len()
        );
        attrs
    }

    /// Flatten the JSON `_attrs` object form into pairs.
    ///
    /// Accepts the same shapes as [`Attr::map_to_list`]: `null`, a string,
    /// or an array of strings per key. Any other value fails with
    /// [`AttrError::InvalidAttrType`] naming the key and the JSON type found.
    pub fn json_to_list(attrs: &Value) -> AttrResult<Vec<Attr>> {
        let Value::Object(entries) = attrs else {
            return Err(AttrError::invalid_request(format!(
                "attrs must be a JSON object, got {}",
                json_type_name(attrs)
            )));
        };

        let mut list = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let value = attr_value_from_json(key, value)?;
            push_entry(&mut list, key, &value);
        }
        debug!(
            "Flattened {} JSON attribute entries into {} pairs",
            entries.len(),
            list.len()
        );
        Ok(list)
    }

    /// Rebuild a semantic map from pairs.
    ///
    /// Pairs sharing a key accumulate in order. With `ignore_empty_values`,
    /// pairs whose value is missing or zero-length are skipped. A pair with
    /// no value that follows a value for the same key is discarded, so the
    /// removal marker only survives on a key that has no other values.
    pub fn collection_to_map<'a, I>(attrs: I, ignore_empty_values: bool) -> AttrMap
    where
        I: IntoIterator<Item = &'a Attr>,
    {
        let mut map = AttrMap::new();
        for attr in attrs {
            if ignore_empty_values && attr.has_empty_value() {
                trace!("Skipping empty value for '{}'", attr.key());
                continue;
            }
            map.add(attr.key(), attr.value().map(str::to_string));
        }
        map
    }
}

fn push_entry(attrs: &mut Vec<Attr>, key: &str, value: &AttrValue) {
    match value {
        AttrValue::Absent => attrs.push(Attr::new(key, None)),
        AttrValue::Single(value) => attrs.push(Attr::from_name_value(key, value.as_str())),
        AttrValue::Multi(values) if values.is_empty() => attrs.push(Attr::new(key, None)),
        AttrValue::Multi(values) => {
            trace!("Fanning out {} values for '{}'", values.len(), key);
            attrs.extend(
                values
                    .iter()
                    .map(|value| Attr::from_name_value(key, value.as_str())),
            );
        }
    }
}

fn attr_value_from_json(key: &str, value: &Value) -> AttrResult<AttrValue> {
    match value {
        Value::Null => Ok(AttrValue::Absent),
        Value::String(value) => Ok(AttrValue::Single(value.clone())),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(AttrValue::Multi)
            .ok_or_else(|| reject(key, value)),
        other => Err(reject(key, other)),
    }
}

fn reject(key: &str, value: &Value) -> AttrError {
    let actual = json_type_name(value);
    warn!("Rejecting attribute '{}' with unsupported type {}", key, actual);
    AttrError::invalid_attr_type(key, actual)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<KeyValuePair> for Attr {
    fn from(pair: KeyValuePair) -> Self {
        Self(pair)
    }
}

impl From<Attr> for KeyValuePair {
    fn from(attr: Attr) -> Self {
        attr.0
    }
}

impl AsRef<KeyValuePair> for Attr {
    fn as_ref(&self) -> &KeyValuePair {
        &self.0
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
