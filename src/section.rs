//! Named sections and their ordered collection.

use crate::error::{validate_name, Result};
use crate::property::{lookup_key, PropertyCollection};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A named group of properties, with the comment lines preceding its header.
///
/// # Examples
///
/// ```rust
/// use ini_doc::Section;
///
/// let mut section = Section::new("server").unwrap();
/// section.properties_mut().insert("port", "8080").unwrap();
/// section.comments_mut().push("main listener".to_string());
///
/// assert_eq!(section.name(), "server");
/// assert_eq!(section.properties().value("port"), Some("8080"));
/// assert!(Section::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    comments: Vec<String>,
    properties: PropertyCollection,
}

impl Section {
    /// Creates an empty section with case-sensitive keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`](crate::Error::Construction) if `name` is
    /// empty or whitespace-only.
    pub fn new(name: &str) -> Result<Self> {
        Self::with_case_insensitive(name, false)
    }

    /// Creates an empty section whose keys follow the given case policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`](crate::Error::Construction) if `name` is
    /// empty or whitespace-only.
    pub fn with_case_insensitive(name: &str, case_insensitive: bool) -> Result<Self> {
        validate_name("section", name)?;
        Ok(Section {
            name: name.to_string(),
            comments: Vec::new(),
            properties: PropertyCollection::with_case_insensitive(case_insensitive),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn comments_mut(&mut self) -> &mut Vec<String> {
        &mut self.comments
    }

    #[must_use]
    pub fn properties(&self) -> &PropertyCollection {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertyCollection {
        &mut self.properties
    }

    /// Merges another section's comments and properties into this one.
    ///
    /// Comments are appended; properties merge as in [`PropertyCollection::merge`].
    pub fn merge(&mut self, other: &Section) {
        self.comments.extend(other.comments.iter().cloned());
        self.properties.merge(&other.properties);
    }

    /// Removes the section's own comments and those of all its properties.
    pub fn clear_comments(&mut self) {
        self.comments.clear();
        self.properties.clear_comments();
    }
}

/// Serializes as the map of its properties.
impl Serialize for Section {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.properties.serialize(serializer)
    }
}

/// An ordered map from section name to [`Section`].
///
/// # Examples
///
/// ```rust
/// use ini_doc::SectionCollection;
///
/// let mut sections = SectionCollection::with_case_insensitive(true);
/// assert!(sections.add_section("Test").unwrap());
/// assert!(!sections.add_section("TEST").unwrap());
///
/// assert!(sections.get("test").is_some());
/// assert_eq!(sections.get("TEST").unwrap().name(), "Test");
/// assert_eq!(sections.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SectionCollection {
    entries: IndexMap<String, Section>,
    case_insensitive: bool,
}

impl SectionCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection; sections it creates inherit the case policy.
    #[must_use]
    pub fn with_case_insensitive(case_insensitive: bool) -> Self {
        SectionCollection {
            entries: IndexMap::new(),
            case_insensitive,
        }
    }

    #[must_use]
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Changes the case policy of the collection and of every section's properties.
    pub fn set_case_insensitive(&mut self, case_insensitive: bool) {
        if self.case_insensitive == case_insensitive {
            return;
        }
        self.case_insensitive = case_insensitive;
        let old = std::mem::take(&mut self.entries);
        for (_, mut section) in old {
            section.properties.set_case_insensitive(case_insensitive);
            let key = lookup_key(&section.name, case_insensitive).into_owned();
            self.entries.insert(key, section);
        }
    }

    /// Adds an empty section. Returns `false`, leaving the existing section
    /// untouched, if the name is already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`](crate::Error::Construction) if `name` is
    /// empty or whitespace-only.
    pub fn add_section(&mut self, name: &str) -> Result<bool> {
        if self.contains(name) {
            return Ok(false);
        }
        let section = Section::with_case_insensitive(name, self.case_insensitive)?;
        Ok(self.add(section))
    }

    /// Adds a section unless one with the same name exists; returns whether it was added.
    ///
    /// The section's properties are switched to this collection's case policy.
    pub fn add(&mut self, mut section: Section) -> bool {
        let key = lookup_key(&section.name, self.case_insensitive).into_owned();
        if self.entries.contains_key(&key) {
            return false;
        }
        section.properties.set_case_insensitive(self.case_insensitive);
        self.entries.insert(key, section);
        true
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Section> {
        self.entries.get(&*lookup_key(name, self.case_insensitive))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.entries.get_mut(&*lookup_key(name, self.case_insensitive))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes a section, preserving the order of the remaining sections.
    pub fn remove(&mut self, name: &str) -> Option<Section> {
        self.entries.shift_remove(&*lookup_key(name, self.case_insensitive))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the sections, in insertion order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Section> {
        self.entries.values()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::ValuesMut<'_, String, Section> {
        self.entries.values_mut()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(Section::name)
    }

    /// Merges `other` into `self`: shared sections merge recursively, sections
    /// only present in `other` are cloned in after the existing ones.
    pub fn merge(&mut self, other: &SectionCollection) {
        for incoming in other.iter() {
            match self.get_mut(incoming.name()) {
                Some(existing) => existing.merge(incoming),
                None => {
                    self.add(incoming.clone());
                }
            }
        }
    }

    pub fn clear_comments(&mut self) {
        for section in self.entries.values_mut() {
            section.clear_comments();
        }
    }
}

/// Equal when both hold the same entries in the same order under the same case policy.
impl PartialEq for SectionCollection {
    fn eq(&self, other: &Self) -> bool {
        self.case_insensitive == other.case_insensitive
            && self.entries.len() == other.entries.len()
            && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for SectionCollection {}

impl<'a> IntoIterator for &'a SectionCollection {
    type Item = &'a Section;
    type IntoIter = indexmap::map::Values<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for SectionCollection {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for section in self.iter() {
            map.serialize_entry(section.name(), section)?;
        }
        map.end()
    }
}
