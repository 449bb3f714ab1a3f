//! Attribute marshaling for an administrative SOAP/JSON protocol.
//!
//! Provides the value layer an admin transport needs: generic attribute
//! pairs and their conversion to and from a multi-valued map, the two-token
//! wire boolean, and strictly parsed lookup-key selectors.
//!
//! # Core Components
//!
//! - [`attrs`] - `<a n="name">value</a>` pairs, attribute lists and the semantic map
//! - [`wire`] - [`WireBoolean`] and its XML/JSON spellings
//! - [`selector`] - `*By` selector enums and the [`Selector`] lookup element
//! - [`codec`] - [`AttrCodec`], a configured bundle of the conversions
//!
//! # Quick Start
//!
//! ```rust
//! use admin_attrs::{AdminAttrs, AttrMap, AttributeCollection, DomainBy, SelectorBy};
//!
//! # fn example() -> Result<(), admin_attrs::AttrError> {
//! let mut map = AttrMap::new();
//! map.insert("zimbraDomainStatus", "active");
//! map.insert("zimbraVirtualHostname", vec!["mail.example.com", "www.example.com"]);
//!
//! let mut request = AttributeCollection::new();
//! request.set_attrs_from_map(&map);
//! assert_eq!(request.attrs().len(), 3);
//!
//! let by = DomainBy::parse("name")?;
//! assert_eq!(by, DomainBy::Name);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod attrs;
pub mod codec;
pub mod error;
pub mod selector;
pub mod wire;

// Re-export commonly used types for convenience
pub use attrs::{AdminAttrs, AdminObjectInfo, Attr, AttrMap, AttrValue, AttributeCollection, KeyValuePair};
pub use codec::{AttrCodec, AttrCodecBuilder, CodecConfig};
pub use error::{AttrError, AttrResult};
pub use selector::{
    AccountBy, AccountSelector, AlwaysOnClusterBy, AlwaysOnClusterSelector, CacheEntryBy,
    CacheEntrySelector, CacheEntryType, CalendarResourceBy, CalendarResourceSelector, CosBy,
    CosSelector, DistributionListBy, DistributionListSelector, DomainBy, DomainSelector,
    ReIndexBy, Selector, SelectorBy, ServerBy, ServerSelector, UcServiceBy, UcServiceSelector,
    XmppComponentBy, XmppComponentSelector, ZimletBy, ZimletSelector,
};
pub use wire::{WireBoolean, WireFlavor};
