//! Generic admin attributes.
//!
//! Admin requests carry configuration as a flat, ordered list of
//! `<a n="name">value</a>` pairs, while callers work with a map from
//! attribute name to zero, one or many values. This module holds both
//! representations and the conversions between them.
//!
//! ## Representations
//!
//! - [`KeyValuePair`] / [`Attr`]: one pair on the wire
//! - [`AttributeCollection`]: the ordered pair list owned by a request
//! - [`AttrMap`] / [`AttrValue`]: the semantic multi-valued map
//!
//! ```rust
//! use admin_attrs::attrs::{AdminAttrs, AttrMap, AttributeCollection};
//!
//! let map = AttrMap::from_key_value_args(&["cn", "alice", "mail", "a@x", "mail", "b@x"])?;
//!
//! let mut request = AttributeCollection::new();
//! request.set_attrs_from_map(&map);
//! assert_eq!(request.attrs().len(), 3);
//!
//! assert_eq!(request.attrs_as_map(false), map);
//! # Ok::<(), admin_attrs::AttrError>(())
//! ```

mod attr;
mod collection;
mod key_value;
mod multimap;

pub use attr::Attr;
pub use collection::{AdminAttrs, AdminObjectInfo, AttributeCollection};
pub use key_value::KeyValuePair;
pub use multimap::{AttrMap, AttrValue};
