//! Key/value properties and their ordered collection.
//!
//! [`PropertyCollection`] wraps an [`IndexMap`] so that keys iterate (and are
//! written back out) in the order they were first added. Lookups go through a
//! normalized key, which is the key itself or its lower-cased form when the
//! collection is case-insensitive; the [`Property`] keeps the original spelling.
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::PropertyCollection;
//!
//! let mut props = PropertyCollection::new();
//! props.insert("name", "Alice").unwrap();
//! props.insert("role", "admin").unwrap();
//! props.insert("name", "Bob").unwrap();
//!
//! assert_eq!(props.value("name"), Some("Bob"));
//! assert_eq!(props.value("missing"), None);
//! let keys: Vec<_> = props.keys().collect();
//! assert_eq!(keys, vec!["name", "role"]);
//! ```

use crate::error::{validate_name, Result};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Cow;

/// Returns the map key a name is stored under for the given case policy.
pub(crate) fn lookup_key(name: &str, case_insensitive: bool) -> Cow<'_, str> {
    if case_insensitive {
        Cow::Owned(name.to_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

/// A single key/value pair plus the comment lines that precede it.
///
/// # Examples
///
/// ```rust
/// use ini_doc::Property;
///
/// let mut prop = Property::new("timeout").unwrap();
/// assert_eq!(prop.value(), "");
/// prop.set_value("30");
/// prop.comments_mut().push("seconds".to_string());
/// assert_eq!(prop.value(), "30");
/// assert_eq!(prop.comments(), ["seconds"]);
///
/// assert!(Property::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    key: String,
    value: String,
    comments: Vec<String>,
}

impl Property {
    /// Creates a property with an empty value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`](crate::Error::Construction) if `key` is
    /// empty or whitespace-only.
    pub fn new(key: &str) -> Result<Self> {
        Self::with_value(key, "")
    }

    /// Creates a property with the given value.
    ///
    /// Any other text is accepted, including keys and values the INI syntax
    /// cannot spell; [`Writer::try_write`](crate::Writer::try_write) reports those.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`](crate::Error::Construction) if `key` is
    /// empty or whitespace-only.
    pub fn with_value(key: &str, value: &str) -> Result<Self> {
        validate_name("key", key)?;
        Ok(Property {
            key: key.to_string(),
            value: value.to_string(),
            comments: Vec::new(),
        })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn comments_mut(&mut self) -> &mut Vec<String> {
        &mut self.comments
    }

    pub fn set_comments(&mut self, comments: Vec<String>) {
        self.comments = comments;
    }
}

/// An ordered map from key name to [`Property`].
///
/// Cloning produces a fully independent copy.
#[derive(Debug, Clone, Default)]
pub struct PropertyCollection {
    entries: IndexMap<String, Property>,
    case_insensitive: bool,
}

impl PropertyCollection {
    /// Creates an empty, case-sensitive collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection with the given case policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::PropertyCollection;
    ///
    /// let mut props = PropertyCollection::with_case_insensitive(true);
    /// props.insert("Path", "/usr").unwrap();
    /// assert_eq!(props.value("PATH"), Some("/usr"));
    /// assert_eq!(props.get("path").unwrap().key(), "Path");
    /// ```
    #[must_use]
    pub fn with_case_insensitive(case_insensitive: bool) -> Self {
        PropertyCollection {
            entries: IndexMap::new(),
            case_insensitive,
        }
    }

    #[must_use]
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Changes the case policy, re-keying existing entries.
    ///
    /// When switching to case-insensitive, keys that now collide keep the
    /// position of the first and the contents of the last.
    pub fn set_case_insensitive(&mut self, case_insensitive: bool) {
        if self.case_insensitive == case_insensitive {
            return;
        }
        self.case_insensitive = case_insensitive;
        let old = std::mem::take(&mut self.entries);
        for (_, property) in old {
            let key = lookup_key(&property.key, case_insensitive).into_owned();
            self.entries.insert(key, property);
        }
    }

    /// Sets `key` to `value`, adding the key if it is absent.
    ///
    /// An existing property keeps its position and comments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`](crate::Error::Construction) if `key` is
    /// empty or whitespace-only.
    pub fn insert(&mut self, key: &str, value: &str) -> Result<()> {
        match self.get_mut(key) {
            Some(existing) => existing.set_value(value),
            None => {
                self.add_property(Property::with_value(key, value)?);
            }
        }
        Ok(())
    }

    /// Adds `key` with an empty value. Returns `false` if it already existed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`](crate::Error::Construction) if `key` is
    /// empty or whitespace-only.
    pub fn add_key(&mut self, key: &str) -> Result<bool> {
        if self.contains_key(key) {
            return Ok(false);
        }
        self.add_property(Property::new(key)?);
        Ok(true)
    }

    /// Adds a property, replacing (and returning) any property under the same key.
    pub fn add_property(&mut self, property: Property) -> Option<Property> {
        let key = lookup_key(&property.key, self.case_insensitive).into_owned();
        self.entries.insert(key, property)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Property> {
        self.entries.get(&*lookup_key(key, self.case_insensitive))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Property> {
        self.entries.get_mut(&*lookup_key(key, self.case_insensitive))
    }

    /// Returns the value stored under `key`, or `None` if the key is absent.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(Property::value)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes a property, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Property> {
        self.entries.shift_remove(&*lookup_key(key, self.case_insensitive))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the properties, in insertion order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Property> {
        self.entries.values()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::ValuesMut<'_, String, Property> {
        self.entries.values_mut()
    }

    /// Returns an iterator over the original key spellings, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(Property::key)
    }

    /// Merges `other` into `self`; on conflicting keys the value from `other` wins.
    ///
    /// Comments of merged properties are appended. Existing keys keep their
    /// position, keys new to `self` follow in `other`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::PropertyCollection;
    ///
    /// let mut a = PropertyCollection::new();
    /// a.insert("k1", "v1").unwrap();
    /// a.insert("k2", "v2").unwrap();
    /// let mut b = PropertyCollection::new();
    /// b.insert("k1", "v11").unwrap();
    /// b.insert("k4", "v4").unwrap();
    ///
    /// a.merge(&b);
    /// let pairs: Vec<_> = a.iter().map(|p| (p.key(), p.value())).collect();
    /// assert_eq!(pairs, vec![("k1", "v11"), ("k2", "v2"), ("k4", "v4")]);
    /// ```
    pub fn merge(&mut self, other: &PropertyCollection) {
        for incoming in other.iter() {
            match self.get_mut(incoming.key()) {
                Some(existing) => {
                    existing.set_value(incoming.value());
                    existing.comments.extend(incoming.comments.iter().cloned());
                }
                None => {
                    self.add_property(incoming.clone());
                }
            }
        }
    }

    /// Removes the comments of every property.
    pub fn clear_comments(&mut self) {
        for property in self.entries.values_mut() {
            property.comments.clear();
        }
    }
}

/// Equal when both hold the same entries in the same order under the same case policy.
impl PartialEq for PropertyCollection {
    fn eq(&self, other: &Self) -> bool {
        self.case_insensitive == other.case_insensitive
            && self.entries.len() == other.entries.len()
            && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for PropertyCollection {}

impl<'a> IntoIterator for &'a PropertyCollection {
    type Item = &'a Property;
    type IntoIter = indexmap::map::Values<'a, String, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serializes as a map of key to value, in insertion order.
impl Serialize for PropertyCollection {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for property in self.iter() {
            map.serialize_entry(property.key(), property.value())?;
        }
        map.end()
    }
}
