//! Key/value pair primitive for the admin protocol.
//!
//! A pair is rendered on the wire as `<a n="key">value</a>` in XML and as
//! `{"n": "key", "_content": "value"}` in JSON. A missing value means the
//! attribute is being removed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named value where the value may be absent.
///
/// ## Examples
///
/// ```rust
/// use admin_attrs::attrs::KeyValuePair;
///
/// let pair = KeyValuePair::new("zimbraMailQuota", Some("1048576".to_string()));
/// assert_eq!(pair.key(), "zimbraMailQuota");
/// assert_eq!(pair.value(), Some("1048576"));
///
/// let removal = KeyValuePair::new("zimbraMailQuota", None);
/// assert!(removal.value().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyValuePair {
    #[serde(rename = "n")]
    key: String,
    #[serde(rename = "_content", default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl KeyValuePair {
    /// Create a pair. The key is taken as given; an empty key is the
    /// caller's responsibility.
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Replace the value, returning the previous one.
    pub fn set_value(&mut self, value: Option<String>) -> Option<String> {
        std::mem::replace(&mut self.value, value)
    }

    /// True when the value is absent or zero-length.
    pub fn has_empty_value(&self) -> bool {
        self.value.as_deref().is_none_or(str::is_empty)
    }

    pub fn into_parts(self) -> (String, Option<String>) {
        (self.key, self.value)
    }
}

impl fmt::Display for KeyValuePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => write!(f, "{}=<null>", self.key),
        }
    }
}
