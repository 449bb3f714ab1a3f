//! Two-token boolean used by the admin protocol.
//!
//! The XML flavor writes booleans as `"1"` and `"0"`; the JSON flavor writes
//! `"true"` and `"false"`. Either spelling is accepted on input. An unset
//! boolean is modelled as `Option<WireBoolean>`, and every call site that
//! collapses the unset state picks its own default.

use crate::error::{AttrError, AttrResult};
use log::warn;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Wire encoding family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireFlavor {
    #[default]
    Xml,
    Json,
}

impl WireFlavor {
    pub fn true_token(self) -> &'static str {
        match self {
            Self::Xml => "1",
            Self::Json => "true",
        }
    }

    pub fn false_token(self) -> &'static str {
        match self {
            Self::Xml => "0",
            Self::Json => "false",
        }
    }
}

/// A boolean as it travels on the wire.
///
/// ```rust
/// use admin_attrs::wire::{WireBoolean, WireFlavor};
///
/// let flag = WireBoolean::from_bool(Some(true));
/// assert_eq!(WireBoolean::to_bool(flag), Some(true));
/// assert_eq!(flag.map(|f| f.token(WireFlavor::Xml)), Some("1"));
///
/// // An unset flag takes the default chosen by the caller.
/// assert!(!WireBoolean::to_bool_or(None, false));
/// assert!(WireBoolean::to_bool_or(None, true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireBoolean {
    False,
    True,
}

impl WireBoolean {
    pub fn from_bool(value: Option<bool>) -> Option<Self> {
        value.map(Self::from)
    }

    pub fn to_bool(value: Option<Self>) -> Option<bool> {
        value.map(Self::as_bool)
    }

    /// Decode an optional wire boolean, substituting `default` when unset.
    pub fn to_bool_or(value: Option<Self>, default: bool) -> bool {
        Self::to_bool(value).unwrap_or(default)
    }

    pub fn as_bool(self) -> bool {
        matches!(self, Self::True)
    }

    pub fn token(self, flavor: WireFlavor) -> &'static str {
        match self {
            Self::True => flavor.true_token(),
            Self::False => flavor.false_token(),
        }
    }

    /// Parse any accepted spelling. Matching is exact.
    pub fn parse(token: &str) -> AttrResult<Self> {
        match token {
            "1" | "true" => Ok(Self::True),
            "0" | "false" => Ok(Self::False),
            _ => {
                warn!("Rejecting wire boolean token '{}'", token);
                Err(AttrError::invalid_request(format!(
                    "invalid boolean value: {token}, valid values: [1, 0, true, false]"
                )))
            }
        }
    }
}

impl From<bool> for WireBoolean {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<WireBoolean> for bool {
    fn from(value: WireBoolean) -> Self {
        value.as_bool()
    }
}

impl FromStr for WireBoolean {
    type Err = AttrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WireBoolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token(WireFlavor::Xml))
    }
}

impl Serialize for WireBoolean {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(self.as_bool())
    }
}

impl<'de> Deserialize<'de> for WireBoolean {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct WireBooleanVisitor;

        impl Visitor<'_> for WireBooleanVisitor {
            type Value = WireBoolean;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean or one of \"1\", \"0\", \"true\", \"false\"")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(WireBoolean::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                WireBoolean::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(WireBooleanVisitor)
    }
}
