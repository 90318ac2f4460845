//! The root aggregate of a parsed INI file.
//!
//! A [`Document`] owns its [`SectionCollection`] and the global
//! [`PropertyCollection`] holding keys that appear before any section header.
//! Nothing inside a document is shared: `clone()` is a full deep copy.
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::from_str;
//!
//! let doc = from_str("name = demo\n[server]\nport = 8080\n").unwrap();
//! assert_eq!(doc.global().value("name"), Some("demo"));
//! assert_eq!(doc.get_key_path("server.port", '.'), Some("8080"));
//! assert_eq!(doc.get_key_path("name", '.'), Some("demo"));
//! ```

use crate::config::Configuration;
use crate::property::PropertyCollection;
use crate::section::{Section, SectionCollection};
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    global: PropertyCollection,
    sections: SectionCollection,
}

impl Document {
    /// Creates an empty, case-sensitive document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document following the configuration's case policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::{Configuration, Document};
    ///
    /// let config = Configuration::new().with_case_insensitive(true);
    /// let mut doc = Document::with_configuration(&config);
    /// doc.sections_mut().add_section("Test").unwrap();
    /// assert!(doc.section("test").is_some());
    /// ```
    #[must_use]
    pub fn with_configuration(config: &Configuration) -> Self {
        Document {
            global: PropertyCollection::with_case_insensitive(config.case_insensitive),
            sections: SectionCollection::with_case_insensitive(config.case_insensitive),
        }
    }

    #[must_use]
    pub fn is_case_insensitive(&self) -> bool {
        self.sections.is_case_insensitive()
    }

    /// Switches the case policy of every collection in the document.
    pub fn set_case_insensitive(&mut self, case_insensitive: bool) {
        self.global.set_case_insensitive(case_insensitive);
        self.sections.set_case_insensitive(case_insensitive);
    }

    /// Properties that appear before the first section header.
    #[must_use]
    pub fn global(&self) -> &PropertyCollection {
        &self.global
    }

    pub fn global_mut(&mut self) -> &mut PropertyCollection {
        &mut self.global
    }

    #[must_use]
    pub fn sections(&self) -> &SectionCollection {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut SectionCollection {
        &mut self.sections
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Looks up a value by `section<separator>key` path.
    ///
    /// The path is split at the first separator. A path without the separator
    /// addresses the global properties.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::from_str;
    ///
    /// let doc = from_str("[db]\nhost.name = localhost\n").unwrap();
    /// assert_eq!(doc.get_key_path("db.host.name", '.'), Some("localhost"));
    /// assert_eq!(doc.get_key_path("db/host.name", '/'), Some("localhost"));
    /// assert_eq!(doc.get_key_path("db.missing", '.'), None);
    /// ```
    #[must_use]
    pub fn get_key_path(&self, path: &str, separator: char) -> Option<&str> {
        match path.split_once(separator) {
            Some((section, key)) => self.sections.get(section)?.properties().value(key),
            None => self.global.value(path),
        }
    }

    /// Looks up a value by path, splitting it at
    /// [`Configuration::section_key_separator`].
    ///
    /// ```rust
    /// use ini_doc::{from_str, Configuration};
    ///
    /// let doc = from_str("[db]\nhost = localhost\n").unwrap();
    /// let config = Configuration::new().with_section_key_separator('/');
    /// assert_eq!(doc.get_key_with_config("db/host", &config), Some("localhost"));
    /// ```
    #[must_use]
    pub fn get_key_with_config(&self, path: &str, config: &Configuration) -> Option<&str> {
        self.get_key_path(path, config.section_key_separator)
    }

    /// Merges `other` into `self`: global properties and shared sections merge
    /// with `other`'s values winning, sections only in `other` are added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::from_str;
    ///
    /// let mut base = from_str("[a]\nx = 1\ny = 2\n").unwrap();
    /// let overlay = from_str("[a]\nx = 10\n[b]\nz = 3\n").unwrap();
    /// base.merge(&overlay);
    ///
    /// assert_eq!(base.get_key_path("a.x", '.'), Some("10"));
    /// assert_eq!(base.get_key_path("a.y", '.'), Some("2"));
    /// assert_eq!(base.get_key_path("b.z", '.'), Some("3"));
    /// ```
    pub fn merge(&mut self, other: &Document) {
        self.global.merge(&other.global);
        self.sections.merge(&other.sections);
    }

    /// Removes every comment in the document.
    pub fn clear_all_comments(&mut self) {
        self.global.clear_comments();
        self.sections.clear_comments();
    }
}

/// Serializes as one map: global keys first, then one nested map per section.
///
/// A global key sharing its name with a section produces a repeated map key.
impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.global.len() + self.sections.len()))?;
        for property in self.global.iter() {
            map.serialize_entry(property.key(), property.value())?;
        }
        for section in self.sections.iter() {
            map.serialize_entry(section.name(), section)?;
        }
        map.end()
    }
}
