//! Parse-time policy for INI documents.
//!
//! - [`Configuration`]: every switch the parser and writer honour
//! - [`DuplicatePropertiesBehaviour`]: how a repeated key inside one section is resolved
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::{Configuration, DuplicatePropertiesBehaviour};
//!
//! // Best-effort parsing of "dirty" files
//! let config = Configuration::new()
//!     .with_skip_invalid_lines(true)
//!     .with_allow_duplicate_sections(true)
//!     .with_duplicate_properties_behaviour(DuplicatePropertiesBehaviour::AllowAndKeepLastValue);
//!
//! let doc = ini_doc::from_str_with_config("[a]\nx=1\n???\n[a]\nx=2\n", &config).unwrap();
//! assert_eq!(doc.section("a").unwrap().properties().value("x"), Some("2"));
//! ```

use serde::{Deserialize, Serialize};

/// Resolution rule for a key that appears twice in the same section.
///
/// # Examples
///
/// ```rust
/// use ini_doc::DuplicatePropertiesBehaviour;
///
/// assert_eq!(
///     DuplicatePropertiesBehaviour::default(),
///     DuplicatePropertiesBehaviour::DisallowAndStopWithError
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicatePropertiesBehaviour {
    #[default]
    DisallowAndStopWithError,
    AllowAndKeepFirstValue,
    AllowAndKeepLastValue,
    AllowAndConcatenateValues,
}

/// Parser and writer configuration.
///
/// All fields are public and also settable through the chaining `with_*`
/// methods. The type is plain data: `clone()` yields a fully independent copy.
///
/// Missing fields take their defaults when deserialized, so a stored policy
/// only has to name the options it changes:
///
/// ```rust
/// use ini_doc::Configuration;
///
/// let config: Configuration =
///     serde_json::from_str(r#"{ "case_insensitive": true }"#).unwrap();
/// assert!(config.case_insensitive);
/// assert!(config.trim_properties);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Section and key lookups ignore case.
    pub case_insensitive: bool,
    /// Properties may appear before the first section header.
    pub allow_keys_without_section: bool,
    pub duplicate_properties_behaviour: DuplicatePropertiesBehaviour,
    /// Joins values under [`DuplicatePropertiesBehaviour::AllowAndConcatenateValues`].
    pub concatenate_duplicate_properties_string: String,
    /// When unset, [`Parser::try_parse`](crate::Parser::try_parse) reports failure as `Ok(None)`.
    pub throw_exceptions_on_error: bool,
    /// A repeated section header reuses the existing section instead of failing.
    pub allow_duplicate_sections: bool,
    /// Unrecognized lines are dropped instead of failing.
    pub skip_invalid_lines: bool,
    pub trim_properties: bool,
    pub trim_sections: bool,

    /// Line leads that start a comment. The first one is used when writing.
    pub comment_strings: Vec<String>,
    pub section_start: char,
    pub section_end: char,
    pub key_value_assignment: char,
    /// Split trailing `; comment` text off section headers and values.
    pub allow_inline_comments: bool,
    /// Separator between section and key in paths read by
    /// [`Document::get_key_with_config`](crate::Document::get_key_with_config).
    pub section_key_separator: char,
    /// Written on both sides of the assignment character. Omitted when
    /// `trim_properties` is unset, since the spacer would become part of the
    /// key and value.
    pub assignment_spacer: String,
    pub new_line: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            case_insensitive: false,
            allow_keys_without_section: true,
            duplicate_properties_behaviour: DuplicatePropertiesBehaviour::default(),
            concatenate_duplicate_properties_string: ";".to_string(),
            throw_exceptions_on_error: true,
            allow_duplicate_sections: false,
            skip_invalid_lines: false,
            trim_properties: true,
            trim_sections: true,
            comment_strings: vec![";".to_string(), "#".to_string()],
            section_start: '[',
            section_end: ']',
            key_value_assignment: '=',
            allow_inline_comments: false,
            section_key_separator: '.',
            assignment_spacer: " ".to_string(),
            new_line: "\n".to_string(),
        }
    }
}

impl Configuration {
    /// Creates the default configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::Configuration;
    ///
    /// let config = Configuration::new();
    /// assert!(!config.case_insensitive);
    /// assert!(config.allow_keys_without_section);
    /// assert_eq!(config.concatenate_duplicate_properties_string, ";");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies every option from `source` into `self`. `None` leaves `self` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::Configuration;
    ///
    /// let source = Configuration::new().with_case_insensitive(true);
    /// let mut target = Configuration::new();
    /// target.overwrite_with(Some(&source));
    /// assert!(target.case_insensitive);
    ///
    /// target.overwrite_with(None);
    /// assert!(target.case_insensitive);
    /// ```
    pub fn overwrite_with(&mut self, source: Option<&Configuration>) {
        let Some(source) = source else {
            return;
        };
        self.case_insensitive = source.case_insensitive;
        self.allow_keys_without_section = source.allow_keys_without_section;
        self.duplicate_properties_behaviour = source.duplicate_properties_behaviour;
        self.concatenate_duplicate_properties_string
            .clone_from(&source.concatenate_duplicate_properties_string);
        self.throw_exceptions_on_error = source.throw_exceptions_on_error;
        self.allow_duplicate_sections = source.allow_duplicate_sections;
        self.skip_invalid_lines = source.skip_invalid_lines;
        self.trim_properties = source.trim_properties;
        self.trim_sections = source.trim_sections;
        self.comment_strings.clone_from(&source.comment_strings);
        self.section_start = source.section_start;
        self.section_end = source.section_end;
        self.key_value_assignment = source.key_value_assignment;
        self.allow_inline_comments = source.allow_inline_comments;
        self.section_key_separator = source.section_key_separator;
        self.assignment_spacer.clone_from(&source.assignment_spacer);
        self.new_line.clone_from(&source.new_line);
    }

    #[must_use]
    pub fn with_case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    #[must_use]
    pub fn with_allow_keys_without_section(mut self, value: bool) -> Self {
        self.allow_keys_without_section = value;
        self
    }

    #[must_use]
    pub fn with_duplicate_properties_behaviour(
        mut self,
        behaviour: DuplicatePropertiesBehaviour,
    ) -> Self {
        self.duplicate_properties_behaviour = behaviour;
        self
    }

    /// Sets the string placed between concatenated duplicate values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::Configuration;
    ///
    /// let config = Configuration::new().with_concatenate_duplicate_properties_string(", ");
    /// assert_eq!(config.concatenate_duplicate_properties_string, ", ");
    /// ```
    #[must_use]
    pub fn with_concatenate_duplicate_properties_string(mut self, separator: &str) -> Self {
        self.concatenate_duplicate_properties_string = separator.to_string();
        self
    }

    #[must_use]
    pub fn with_throw_exceptions_on_error(mut self, value: bool) -> Self {
        self.throw_exceptions_on_error = value;
        self
    }

    #[must_use]
    pub fn with_allow_duplicate_sections(mut self, value: bool) -> Self {
        self.allow_duplicate_sections = value;
        self
    }

    #[must_use]
    pub fn with_skip_invalid_lines(mut self, value: bool) -> Self {
        self.skip_invalid_lines = value;
        self
    }

    #[must_use]
    pub fn with_trim_properties(mut self, value: bool) -> Self {
        self.trim_properties = value;
        self
    }

    #[must_use]
    pub fn with_trim_sections(mut self, value: bool) -> Self {
        self.trim_sections = value;
        self
    }

    /// Replaces the recognized comment leads.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::Configuration;
    ///
    /// let config = Configuration::new().with_comment_strings(&["//"]);
    /// let doc = ini_doc::from_str_with_config("[s]\n// note\nk=v\n", &config).unwrap();
    /// let prop = doc.section("s").unwrap().properties().get("k").unwrap();
    /// assert_eq!(prop.comments(), ["note"]);
    /// ```
    #[must_use]
    pub fn with_comment_strings(mut self, leads: &[&str]) -> Self {
        self.comment_strings = leads.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Sets the section header delimiters.
    #[must_use]
    pub fn with_section_delimiters(mut self, start: char, end: char) -> Self {
        self.section_start = start;
        self.section_end = end;
        self
    }

    #[must_use]
    pub fn with_key_value_assignment(mut self, assignment: char) -> Self {
        self.key_value_assignment = assignment;
        self
    }

    #[must_use]
    pub fn with_allow_inline_comments(mut self, value: bool) -> Self {
        self.allow_inline_comments = value;
        self
    }

    #[must_use]
    pub fn with_section_key_separator(mut self, separator: char) -> Self {
        self.section_key_separator = separator;
        self
    }

    #[must_use]
    pub fn with_assignment_spacer(mut self, spacer: &str) -> Self {
        self.assignment_spacer = spacer.to_string();
        self
    }

    #[must_use]
    pub fn with_new_line(mut self, new_line: &str) -> Self {
        self.new_line = new_line.to_string();
        self
    }

    /// Returns the comment lead used by the writer.
    pub(crate) fn primary_comment_string(&self) -> &str {
        self.comment_strings.first().map_or(";", String::as_str)
    }
}
