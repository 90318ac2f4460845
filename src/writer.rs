//! INI output.
//!
//! The [`Writer`] turns a [`Document`] back into text using the recognition
//! tokens of its [`Configuration`]: global properties first, then each section
//! in order. Every comment is written on its own line in front of the entity
//! it belongs to. Exact original layout is not preserved, content is: the
//! output parses back into an equal document under the same configuration.
//!
//! ```rust
//! use ini_doc::{from_str, to_string};
//!
//! let doc = from_str("a=1\n;about s\n[s]\nb=2\n").unwrap();
//! assert_eq!(to_string(&doc), "a = 1\n\n;about s\n[s]\nb = 2\n");
//! ```
//!
//! ## Unrepresentable documents
//!
//! A document built in code can hold text the INI syntax has no way to spell,
//! such as a key containing the assignment character or a value with
//! surrounding whitespace while properties are trimmed. [`Writer::write`]
//! emits such text as is. [`Writer::try_write`] checks the document first and
//! returns [`Error::Unrepresentable`] instead.
//!
//! ```rust
//! use ini_doc::{Configuration, Document, Error, Writer};
//!
//! let mut doc = Document::new();
//! doc.global_mut().insert("a=b", "1").unwrap();
//! let err = Writer::new(Configuration::new()).try_write(&doc).unwrap_err();
//! assert!(matches!(err, Error::Unrepresentable(_)));
//! ```

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::property::lookup_key;
use crate::{Configuration, Document, Property, PropertyCollection};

/// Serializes a [`Document`] to INI text.
pub struct Writer {
    output: String,
    config: Configuration,
}

impl Writer {
    pub fn new(config: Configuration) -> Self {
        Writer {
            output: String::with_capacity(256),
            config,
        }
    }

    /// Writes `document` and returns the accumulated text.
    ///
    /// Entries the configured syntax cannot express are written unchanged and
    /// will not read back as they were; use [`try_write`](Self::try_write) to
    /// reject them.
    pub fn write(mut self, document: &Document) -> String {
        self.write_properties(document.global());

        for section in document.sections() {
            if !self.output.is_empty() {
                self.output.push_str(&self.config.new_line);
            }
            self.write_comments(section.comments());
            self.output.push(self.config.section_start);
            self.output.push_str(section.name());
            self.output.push(self.config.section_end);
            self.output.push_str(&self.config.new_line);
            self.write_properties(section.properties());
        }

        self.output
    }

    /// Writes `document` after checking that every entry reads back unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unrepresentable`] naming the first offending key,
    /// value, section name or comment.
    pub fn try_write(self, document: &Document) -> Result<String> {
        self.check_document(document)?;
        Ok(self.write(document))
    }

    fn write_properties(&mut self, properties: &PropertyCollection) {
        for property in properties {
            self.write_property(property);
        }
    }

    fn write_property(&mut self, property: &Property) {
        self.write_comments(property.comments());
        self.output.push_str(property.key());
        // Untrimmed keys and values keep every character, spacer included.
        if self.config.trim_properties {
            self.output.push_str(&self.config.assignment_spacer);
            self.output.push(self.config.key_value_assignment);
            self.output.push_str(&self.config.assignment_spacer);
        } else {
            self.output.push(self.config.key_value_assignment);
        }
        self.output.push_str(property.value());
        self.output.push_str(&self.config.new_line);
    }

    fn write_comments(&mut self, comments: &[String]) {
        for comment in comments {
            self.output.push_str(self.config.primary_comment_string());
            self.output.push_str(comment);
            self.output.push_str(&self.config.new_line);
        }
    }

    fn check_document(&self, document: &Document) -> Result<()> {
        if !document.global().is_empty() && !self.config.allow_keys_without_section {
            return Err(unrepresentable(
                "global properties",
                "",
                "keys without a section are not allowed",
            ));
        }
        self.check_properties(document.global())?;

        let mut seen = HashSet::new();
        for section in document.sections() {
            let name = section.name();
            if !seen.insert(lookup_key(name, self.config.case_insensitive)) {
                return Err(unrepresentable("section", name, "repeats another section name"));
            }
            if has_line_break(name) {
                return Err(unrepresentable("section", name, "contains a line break"));
            }
            if self.config.trim_sections && name.trim() != name {
                return Err(unrepresentable("section", name, "has surrounding whitespace"));
            }
            if self.config.allow_inline_comments && name.contains(self.config.section_end) {
                return Err(unrepresentable("section", name, "contains the section end"));
            }
            self.check_comments(section.comments())?;
            self.check_properties(section.properties())?;
        }
        Ok(())
    }

    fn check_properties(&self, properties: &PropertyCollection) -> Result<()> {
        let mut seen = HashSet::new();
        for property in properties {
            let key = property.key();
            if !seen.insert(lookup_key(key, self.config.case_insensitive)) {
                return Err(unrepresentable("key", key, "repeats another key"));
            }
            self.check_key(key)?;
            self.check_value(property.value())?;
            self.check_comments(property.comments())?;
        }
        Ok(())
    }

    fn check_key(&self, key: &str) -> Result<()> {
        if has_line_break(key) {
            return Err(unrepresentable("key", key, "contains a line break"));
        }
        if key.contains(self.config.key_value_assignment) {
            return Err(unrepresentable("key", key, "contains the assignment character"));
        }
        if self.config.trim_properties && key.trim() != key {
            return Err(unrepresentable("key", key, "has surrounding whitespace"));
        }
        let start = key.trim_start();
        if start.starts_with(self.config.section_start) || self.starts_with_comment_lead(start) {
            return Err(unrepresentable("key", key, "reads as a section or comment line"));
        }
        Ok(())
    }

    fn check_value(&self, value: &str) -> Result<()> {
        if has_line_break(value) {
            return Err(unrepresentable("value", value, "contains a line break"));
        }
        if self.config.trim_properties && value.trim() != value {
            return Err(unrepresentable("value", value, "has surrounding whitespace"));
        }
        if self.config.allow_inline_comments && self.contains_comment_lead(value) {
            return Err(unrepresentable("value", value, "contains a comment lead"));
        }
        Ok(())
    }

    fn check_comments(&self, comments: &[String]) -> Result<()> {
        if comments.is_empty() {
            return Ok(());
        }
        if !self.starts_with_comment_lead(self.config.primary_comment_string()) {
            return Err(unrepresentable("comment", &comments[0], "no comment lead is configured"));
        }
        for comment in comments {
            if has_line_break(comment) {
                return Err(unrepresentable("comment", comment, "contains a line break"));
            }
            if comment.trim() != comment {
                return Err(unrepresentable("comment", comment, "has surrounding whitespace"));
            }
        }
        Ok(())
    }

    fn comment_leads(&self) -> impl Iterator<Item = &str> {
        self.config
            .comment_strings
            .iter()
            .map(String::as_str)
            .filter(|lead| !lead.is_empty())
    }

    fn starts_with_comment_lead(&self, text: &str) -> bool {
        self.comment_leads().any(|lead| text.starts_with(lead))
    }

    fn contains_comment_lead(&self, text: &str) -> bool {
        self.comment_leads().any(|lead| text.contains(lead))
    }
}

fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r'])
}

fn unrepresentable(what: &str, text: &str, reason: &str) -> Error {
    Error::Unrepresentable(format!("{what} {text:?}: {reason}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    fn write(config: &Configuration, doc: &Document) -> String {
        Writer::new(config.clone()).write(doc)
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(write(&Configuration::new(), &Document::new()), "");
    }

    #[test]
    fn test_sections_are_separated() {
        let config = Configuration::new();
        let doc = Parser::new(config.clone())
            .parse("[a]\nx=1\n[b]\n;c\ny=2\n")
            .unwrap();
        assert_eq!(write(&config, &doc), "[a]\nx = 1\n\n[b]\n;c\ny = 2\n");
    }

    #[test]
    fn test_custom_tokens() {
        let config = Configuration::new()
            .with_comment_strings(&["#", ";"])
            .with_section_delimiters('<', '>')
            .with_key_value_assignment(':')
            .with_assignment_spacer("")
            .with_new_line("\r\n");
        let doc = Parser::new(config.clone())
            .parse("g:0\n;note\n<s>\nk:v\n")
            .unwrap();
        assert_eq!(write(&config, &doc), "g:0\r\n\r\n#note\r\n<s>\r\nk:v\r\n");
    }

    #[test]
    fn test_output_parses_back() {
        let config = Configuration::new();
        let text = "; top\nname = x\n\n; first\n[one]\n; k\nk = a = b\nempty =\n[two]\nz = 1\n";
        let doc = Parser::new(config.clone()).parse(text).unwrap();
        let written = write(&config, &doc);
        let reparsed = Parser::new(config).parse(&written).unwrap();
        assert_eq!(reparsed, doc);
        assert_eq!(
            reparsed.sections().names().collect::<Vec<_>>(),
            vec!["one", "two"]
        );
    }

    #[test]
    fn test_untrimmed_properties_parse_back() {
        let config = Configuration::new().with_trim_properties(false);
        let text = "[s]\nkey=value\n padded = both sides \n";
        let doc = Parser::new(config.clone()).parse(text).unwrap();
        let written = write(&config, &doc);
        assert_eq!(written, text);

        let reparsed = Parser::new(config).parse(&written).unwrap();
        assert_eq!(reparsed, doc);
        let props = reparsed.section("s").unwrap().properties();
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["key", " padded "]);
        assert_eq!(props.value("key"), Some("value"));
        assert_eq!(props.value(" padded "), Some(" both sides "));
    }

    #[test]
    fn test_untrimmed_sections_parse_back() {
        let config = Configuration::new().with_trim_sections(false);
        let doc = Parser::new(config.clone())
            .parse("[ s ]\nk=v\n[t]\nx=1\n")
            .unwrap();
        let written = write(&config, &doc);
        assert_eq!(written, "[ s ]\nk = v\n\n[t]\nx = 1\n");

        let reparsed = Parser::new(config).parse(&written).unwrap();
        assert_eq!(reparsed, doc);
        assert_eq!(
            reparsed.sections().names().collect::<Vec<_>>(),
            vec![" s ", "t"]
        );
    }

    #[test]
    fn test_try_write_accepts_parsed_documents() {
        let config = Configuration::new();
        let doc = Parser::new(config.clone())
            .parse(";c\ng=1\n[s]\n;d\nk = a = b\n")
            .unwrap();
        let written = Writer::new(config.clone()).try_write(&doc).unwrap();
        assert_eq!(written, write(&config, &doc));
    }

    #[test]
    fn test_try_write_rejects_unrepresentable_entries() {
        let rejects = |config: &Configuration, doc: &Document| {
            matches!(
                Writer::new(config.clone()).try_write(doc),
                Err(Error::Unrepresentable(_))
            )
        };
        let config = Configuration::new();

        let mut doc = Document::new();
        doc.global_mut().insert("a=b", "1").unwrap();
        assert!(rejects(&config, &doc));

        let mut doc = Document::new();
        doc.global_mut().insert("k", " padded ").unwrap();
        assert!(rejects(&config, &doc));
        assert!(!rejects(&config.clone().with_trim_properties(false), &doc));

        let mut doc = Document::new();
        doc.global_mut().insert(";k", "1").unwrap();
        assert!(rejects(&config, &doc));

        let mut doc = Document::new();
        doc.global_mut().insert("[k", "1").unwrap();
        assert!(rejects(&config, &doc));

        let mut doc = Document::new();
        doc.global_mut().insert("k", "line\nbreak").unwrap();
        assert!(rejects(&config, &doc));

        let mut doc = Document::new();
        doc.global_mut().insert("k", "a ; b").unwrap();
        assert!(!rejects(&config, &doc));
        assert!(rejects(&config.clone().with_allow_inline_comments(true), &doc));

        let mut doc = Document::new();
        doc.sections_mut().add_section(" s ").unwrap();
        assert!(rejects(&config, &doc));
        assert!(!rejects(&config.clone().with_trim_sections(false), &doc));

        let mut doc = Document::new();
        doc.global_mut().insert("k", "v").unwrap();
        assert!(rejects(
            &config.clone().with_allow_keys_without_section(false),
            &doc
        ));

        let mut doc = Document::new();
        doc.sections_mut().add_section("S").unwrap();
        doc.sections_mut().add_section("s").unwrap();
        assert!(!rejects(&config, &doc));
        assert!(rejects(&config.clone().with_case_insensitive(true), &doc));

        let mut doc = Document::new();
        doc.global_mut().insert("k", "v").unwrap();
        doc.global_mut()
            .get_mut("k")
            .unwrap()
            .comments_mut()
            .push("two\nlines".to_string());
        assert!(rejects(&config, &doc));
    }
}
