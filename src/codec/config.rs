//! Codec configuration and builder.

use crate::codec::AttrCodec;
use crate::error::{AttrError, AttrResult};
use crate::wire::WireFlavor;
use serde::{Deserialize, Serialize};

/// Settings shared by every conversion an [`AttrCodec`] performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodecConfig {
    /// Encoding family used when rendering wire booleans.
    pub flavor: WireFlavor,

    /// Drop pairs with a missing or empty value when decoding to a map.
    pub ignore_empty_values: bool,

    /// Element name of one pair. Defaults to "a".
    pub element_name: String,

    /// Attribute holding the pair's key. Defaults to "n".
    pub key_attribute: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            flavor: WireFlavor::Xml,
            ignore_empty_values: false,
            element_name: "a".to_string(),
            key_attribute: "n".to_string(),
        }
    }
}

impl CodecConfig {
    /// Load a configuration from its JSON form, filling unset fields with
    /// defaults.
    pub fn from_json(json: &str) -> AttrResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Element and key attribute names must be XML names, and the key
    /// attribute cannot collide with the JSON content key.
    pub fn validate(&self) -> AttrResult<()> {
        validate_xml_name("element name", &self.element_name)?;
        validate_xml_name("key attribute", &self.key_attribute)?;

        if self.key_attribute == "_content" {
            return Err(AttrError::invalid_configuration(
                "key attribute cannot be '_content'",
            ));
        }

        Ok(())
    }
}

fn validate_xml_name(what: &str, name: &str) -> AttrResult<()> {
    if name.is_empty() {
        return Err(AttrError::invalid_configuration(format!(
            "{what} cannot be empty"
        )));
    }

    for (i, c) in name.chars().enumerate() {
        let valid = match c {
            ':' | '_' => true,
            c if c.is_ascii_alphabetic() => true,
            '-' | '.' | '\u{B7}' => i > 0,
            c if c.is_ascii_digit() => i > 0,
            // combining marks may not start a name
            '\u{300}'..='\u{36F}' => i > 0,
            c if !c.is_ascii() => c.is_alphanumeric(),
            _ => false,
        };
        if !valid {
            return Err(AttrError::invalid_configuration(format!(
                "invalid character '{c}' in {what} '{name}'"
            )));
        }
    }

    Ok(())
}

/// Builder for [`AttrCodec`].
///
/// ```rust
/// use admin_attrs::codec::AttrCodecBuilder;
/// use admin_attrs::wire::{WireBoolean, WireFlavor};
///
/// let codec = AttrCodecBuilder::new()
///     .with_flavor(WireFlavor::Json)
///     .build()?;
/// assert_eq!(codec.render_bool(WireBoolean::True), "true");
/// # Ok::<(), admin_attrs::AttrError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttrCodecBuilder {
    config: CodecConfig,
}

impl AttrCodecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn with_flavor(mut self, flavor: WireFlavor) -> Self {
        self.config.flavor = flavor;
        self
    }

    pub fn with_ignore_empty_values(mut self, ignore: bool) -> Self {
        self.config.ignore_empty_values = ignore;
        self
    }

    pub fn with_element_name(mut self, name: impl Into<String>) -> Self {
        self.config.element_name = name.into();
        self
    }

    pub fn with_key_attribute(mut self, name: impl Into<String>) -> Self {
        self.config.key_attribute = name.into();
        self
    }

    /// Validate the configuration and create the codec.
    pub fn build(self) -> AttrResult<AttrCodec> {
        self.config.validate()?;
        Ok(AttrCodec::with_config(self.config))
    }
}
