//! Lookup-key selectors.
//!
//! Admin requests name the entity they act on with an element such as
//! `<domain by="name">example.com</domain>`. The `by` attribute comes from a
//! small closed vocabulary per entity type, modelled here as enums that
//! implement [`SelectorBy`]. Parsing is exact and case-sensitive; anything
//! else is rejected as an invalid request that quotes the offending input.
//!
//! ```rust
//! use admin_attrs::selector::{DomainBy, DomainSelector, SelectorBy};
//!
//! assert_eq!(DomainBy::parse("virtualHostname")?, DomainBy::VirtualHostname);
//! assert!(DomainBy::parse("Name").is_err());
//!
//! let selector = DomainSelector::parse("name", "example.com")?;
//! assert_eq!(selector.by(), DomainBy::Name);
//! # Ok::<(), admin_attrs::AttrError>(())
//! ```

use crate::error::{AttrError, AttrResult};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed set of wire tokens.
pub trait SelectorBy: Copy + Eq + fmt::Debug + 'static {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse(s: &str) -> AttrResult<Self> {
        parse_closed_set(s)
    }

    fn names() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(Self::as_str).collect()
    }
}

/// Find the variant of `T` whose token is exactly `s`.
pub fn parse_closed_set<T: SelectorBy>(s: &str) -> AttrResult<T> {
    T::VARIANTS
        .iter()
        .copied()
        .find(|variant| variant.as_str() == s)
        .ok_or_else(|| {
            warn!("Rejecting {} token '{}'", T::NAME, s);
            AttrError::invalid_request(format!(
                "invalid {}: {}, valid values: {:?}",
                T::NAME,
                s,
                T::names()
            ))
        })
}

/// Declare a selector enum with its wire tokens.
macro_rules! selector_by {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::selector::SelectorBy for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $token ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::AttrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::selector::SelectorBy>::parse(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::selector::SelectorBy::as_str(self))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str($crate::selector::SelectorBy::as_str(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::selector::SelectorBy>::parse(&value)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

mod catalog;

pub use catalog::{
    AccountBy, AlwaysOnClusterBy, CacheEntryBy, CacheEntryType, CalendarResourceBy, CosBy,
    DistributionListBy, DomainBy, ReIndexBy, ServerBy, UcServiceBy, XmppComponentBy, ZimletBy,
};

/// Lookup element: which kind of key, and the key itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selector<B> {
    by: B,
    #[serde(rename = "_content")]
    key: String,
}

impl<B: SelectorBy> Selector<B> {
    pub fn new(by: B, key: impl Into<String>) -> Self {
        Self {
            by,
            key: key.into(),
        }
    }

    /// Build a selector from the raw `by` token.
    pub fn parse(by: &str, key: impl Into<String>) -> AttrResult<Self> {
        Ok(Self::new(B::parse(by)?, key))
    }

    pub fn by(&self) -> B {
        self.by
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<B: SelectorBy> fmt::Display for Selector<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.by.as_str(), self.key)
    }
}

pub type AccountSelector = Selector<AccountBy>;
pub type AlwaysOnClusterSelector = Selector<AlwaysOnClusterBy>;
pub type CacheEntrySelector = Selector<CacheEntryBy>;
pub type CalendarResourceSelector = Selector<CalendarResourceBy>;
pub type CosSelector = Selector<CosBy>;
pub type DistributionListSelector = Selector<DistributionListBy>;
pub type DomainSelector = Selector<DomainBy>;
pub type ServerSelector = Selector<ServerBy>;
pub type UcServiceSelector = Selector<UcServiceBy>;
pub type XmppComponentSelector = Selector<XmppComponentBy>;
pub type ZimletSelector = Selector<ZimletBy>;
