//! Read-only key/value mapping for trace metadata and details.
//!
//! [`Fields`] is always built from a private copy of the caller's entries and
//! never hands out a mutable handle, so a trace's metadata cannot change after
//! construction no matter what happens to the map it was built from.

use serde::Serialize;
use serde_json::Value;

use crate::types::alloc_type::{BTreeMap, String, Vec};
use crate::types::{Dict, ValidationError};

/// Immutable string-keyed map of JSON values.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Fields(Dict);

impl Fields {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self(Dict::new())
    }

    /// Copies every entry of `entries` into a fresh map.
    ///
    /// Later entries win on duplicate keys.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Serializes every value of `entries` into a fresh map.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Serialization`] for the first value that has
    /// no JSON form, such as a map with non-string keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use resokerr::Fields;
    ///
    /// let fields = Fields::try_from_serialize([("ports", vec![80, 443])]).unwrap();
    /// assert_eq!(fields.get("ports"), Some(&serde_json::json!([80, 443])));
    /// ```
    pub fn try_from_serialize<I, K, V>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Serialize,
    {
        entries.into_iter().map(|(key, value)| serialized_entry(key, &value)).collect()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in key order.
    #[inline]
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    #[inline]
    pub fn keys(&self) -> serde_json::map::Keys<'_> {
        self.0.keys()
    }

    /// Returns an owned copy of the entries as a plain mapping.
    #[must_use]
    #[inline]
    pub fn to_dict(&self) -> Dict {
        self.0.clone()
    }
}

/// Serializes one entry; the building block of `fields!`.
#[doc(hidden)]
pub fn serialized_entry<K, V>(key: K, value: &V) -> Result<(String, Value), ValidationError>
where
    K: Into<String>,
    V: Serialize + ?Sized,
{
    Ok((key.into(), serde_json::to_value(value)?))
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl From<Dict> for Fields {
    #[inline]
    fn from(dict: Dict) -> Self {
        Self(dict)
    }
}

impl From<&Dict> for Fields {
    #[inline]
    fn from(dict: &Dict) -> Self {
        Self(dict.clone())
    }
}

impl<K, V> From<BTreeMap<K, V>> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::from_entries(map)
    }
}

impl<K, V> From<&BTreeMap<K, V>> for Fields
where
    K: Clone + Into<String>,
    V: Clone + Into<Value>,
{
    fn from(map: &BTreeMap<K, V>) -> Self {
        Self::from_entries(map.iter().map(|(k, v)| (k.clone(), v.clone())))
    }
}

#[cfg(feature = "std")]
impl<K, V, S> From<std::collections::HashMap<K, V, S>> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(map: std::collections::HashMap<K, V, S>) -> Self {
        Self::from_entries(map)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(entries: [(K, V); N]) -> Self {
        Self::from_entries(entries)
    }
}

impl<K, V> From<Vec<(K, V)>> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(entries: Vec<(K, V)>) -> Self {
        Self::from_entries(entries)
    }
}
