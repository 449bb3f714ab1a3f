//! Configured conversions between the attribute representations.
//!
//! [`AttrCodec`] bundles the free conversion helpers on [`Attr`] with a
//! [`CodecConfig`], so a transport layer can hold one value that knows how
//! it renders booleans, whether empty values survive decoding, and what the
//! pair element is called.
//!
//! The JSON flavor knows two shapes for an attribute list:
//!
//! - the `_attrs` object: `{"cn": "alice", "mail": ["a@x", "b@x"]}`
//! - the pair list: `{"a": [{"n": "cn", "_content": "alice"}, ...]}`

mod config;

pub use config::{AttrCodecBuilder, CodecConfig};

use crate::attrs::{Attr, AttrMap, AttrValue};
use crate::error::{AttrError, AttrResult};
use crate::wire::WireBoolean;
use log::debug;
use serde_json::{Map, Value};

const CONTENT_KEY: &str = "_content";

/// Attribute codec bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct AttrCodec {
    config: CodecConfig,
}

impl AttrCodec {
    /// Codec with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Flatten a semantic map into pairs.
    pub fn encode(&self, map: &AttrMap) -> Vec<Attr> {
        Attr::map_to_list(map)
    }

    /// Flatten a JSON `_attrs` object into pairs.
    pub fn encode_json(&self, attrs: &Value) -> AttrResult<Vec<Attr>> {
        Attr::json_to_list(attrs)
    }

    /// Rebuild a semantic map, honoring `ignore_empty_values`.
    pub fn decode(&self, attrs: &[Attr]) -> AttrMap {
        Attr::collection_to_map(attrs, self.config.ignore_empty_values)
    }

    /// Parse a JSON `_attrs` object straight into a semantic map.
    pub fn decode_json(&self, attrs: &Value) -> AttrResult<AttrMap> {
        let list = self.encode_json(attrs)?;
        Ok(self.decode(&list))
    }

    pub fn render_bool(&self, value: WireBoolean) -> &'static str {
        value.token(self.config.flavor)
    }

    /// Render pairs as a JSON `_attrs` object.
    ///
    /// Every pair is rendered regardless of `ignore_empty_values`, so an
    /// unset attribute keeps its empty-string removal marker.
    pub fn to_json_attrs(&self, attrs: &[Attr]) -> Value {
        let map = Attr::collection_to_map(attrs, false);
        let entries = map
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    AttrValue::Absent => Value::Null,
                    AttrValue::Single(value) => Value::String(value.clone()),
                    AttrValue::Multi(values) => {
                        Value::Array(values.iter().cloned().map(Value::String).collect())
                    }
                };
                (key.clone(), value)
            })
            .collect();
        Value::Object(entries)
    }

    /// Render pairs as the JSON pair list, using the configured element
    /// and key attribute names.
    pub fn to_json_pairs(&self, attrs: &[Attr]) -> Value {
        let pairs = attrs
            .iter()
            .map(|attr| {
                let mut pair = Map::new();
                pair.insert(
                    self.config.key_attribute.clone(),
                    Value::String(attr.key().to_string()),
                );
                if let Some(value) = attr.value() {
                    pair.insert(CONTENT_KEY.to_string(), Value::String(value.to_string()));
                }
                Value::Object(pair)
            })
            .collect();

        let mut root = Map::new();
        root.insert(self.config.element_name.clone(), Value::Array(pairs));
        Value::Object(root)
    }

    /// Parse the JSON pair list produced by [`AttrCodec::to_json_pairs`].
    ///
    /// The root must be a JSON object; a missing element list yields no
    /// pairs. Each pair must carry the key attribute as a string; its content
    /// must be a string when present.
    pub fn from_json_pairs(&self, value: &Value) -> AttrResult<Vec<Attr>> {
        let key_attribute = self.config.key_attribute.as_str();
        let Value::Object(root) = value else {
            return Err(AttrError::invalid_request(format!(
                "pair list must be a JSON object holding '{}'",
                self.config.element_name
            )));
        };
        let Some(pairs) = root.get(&self.config.element_name) else {
            return Ok(Vec::new());
        };
        let Value::Array(pairs) = pairs else {
            return Err(AttrError::invalid_request(format!(
                "'{}' must be an array of pairs",
                self.config.element_name
            )));
        };

        let attrs = pairs
            .iter()
            .map(|pair| {
                let key = pair
                    .get(key_attribute)
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        AttrError::invalid_request(format!(
                            "pair without string '{key_attribute}' attribute"
                        ))
                    })?;
                match pair.get(CONTENT_KEY) {
                    None | Some(Value::Null) => Ok(Attr::new(key, None)),
                    Some(Value::String(content)) => Ok(Attr::from_name_value(key, content.as_str())),
                    Some(_) => Err(AttrError::invalid_attr_type(key, "non-string content")),
                }
            })
            .collect::<AttrResult<Vec<_>>>()?;

        debug!("Parsed {} pairs from '{}'", attrs.len(), self.config.element_name);
        Ok(attrs)
    }
}
