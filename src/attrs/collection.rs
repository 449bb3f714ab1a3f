//! Ordered attribute list owned by admin request and response objects.

use crate::attrs::attr::Attr;
use crate::attrs::multimap::AttrMap;
use crate::error::AttrResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Behaviour shared by every admin object that carries `<a>` elements.
///
/// Implementors only provide storage access; bulk operations are derived.
pub trait AdminAttrs {
    /// Read-only view of the attributes in insertion order.
    fn attrs(&self) -> &[Attr];

    /// Mutable storage backing the attribute list.
    fn attrs_mut(&mut self) -> &mut Vec<Attr>;

    /// Replace every attribute with `attrs`.
    ///
    /// Passing `None` clears the list.
    fn set_attrs<I>(&mut self, attrs: I)
    where
        I: IntoIterator<Item = Attr>,
        Self: Sized,
    {
        let list = self.attrs_mut();
        list.clear();
        list.extend(attrs);
    }

    /// Replace every attribute with the flattened contents of `map`.
    fn set_attrs_from_map(&mut self, map: &AttrMap)
    where
        Self: Sized,
    {
        self.set_attrs(Attr::map_to_list(map));
    }

    /// Replace every attribute with the flattened JSON `_attrs` object.
    ///
    /// On error the current attributes are left untouched.
    fn set_attrs_from_json(&mut self, attrs: &Value) -> AttrResult<()>
    where
        Self: Sized,
    {
        let list = Attr::json_to_list(attrs)?;
        self.set_attrs(list);
        Ok(())
    }

    fn add_attr(&mut self, attr: Attr) {
        self.attrs_mut().push(attr);
    }

    fn add_attr_nv(&mut self, key: impl Into<String>, value: impl Into<String>)
    where
        Self: Sized,
    {
        self.add_attr(Attr::from_name_value(key, value));
    }

    fn add_attrs<I>(&mut self, attrs: I)
    where
        I: IntoIterator<Item = Attr>,
        Self: Sized,
    {
        self.attrs_mut().extend(attrs);
    }

    /// Semantic map view of the attributes.
    fn attrs_as_map(&self, ignore_empty_values: bool) -> AttrMap {
        Attr::collection_to_map(self.attrs(), ignore_empty_values)
    }
}

/// Plain attribute list, the building block of admin requests.
///
/// Duplicate keys are kept; they are how multi-valued attributes travel.
///
/// ```rust
/// use admin_attrs::attrs::{AdminAttrs, Attr, AttributeCollection};
///
/// let mut collection = AttributeCollection::new();
/// collection.add_attr_nv("zimbraMailAlias", "a@example.com");
/// collection.add_attr_nv("zimbraMailAlias", "b@example.com");
/// assert_eq!(collection.attrs().len(), 2);
///
/// collection.set_attrs(vec![Attr::from_name_value("cn", "alice")]);
/// assert_eq!(collection.attrs(), &[Attr::from_name_value("cn", "alice")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeCollection {
    #[serde(rename = "a", default, skip_serializing_if = "Vec::is_empty")]
    attrs: Vec<Attr>,
}

impl AttributeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: &AttrMap) -> Self {
        Self {
            attrs: Attr::map_to_list(map),
        }
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn into_attrs(self) -> Vec<Attr> {
        self.attrs
    }
}

impl AdminAttrs for AttributeCollection {
    fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Vec<Attr> {
        &mut self.attrs
    }
}

impl FromIterator<Attr> for AttributeCollection {
    fn from_iter<I: IntoIterator<Item = Attr>>(iter: I) -> Self {
        Self {
            attrs: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Attr>> for AttributeCollection {
    fn from(attrs: Vec<Attr>) -> Self {
        Self { attrs }
    }
}

/// Named admin entity with attributes, such as a domain, server or COS
/// returned by a `Get*` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminObjectInfo {
    name: String,
    id: String,
    #[serde(flatten)]
    attrs: AttributeCollection,
}

impl AdminObjectInfo {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            attrs: AttributeCollection::new(),
        }
    }

    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.set_attrs(attrs);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl AdminAttrs for AdminObjectInfo {
    fn attrs(&self) -> &[Attr] {
        self.attrs.attrs()
    }

    fn attrs_mut(&mut self) -> &mut Vec<Attr> {
        self.attrs.attrs_mut()
    }
}
