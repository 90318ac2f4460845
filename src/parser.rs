//! INI parsing.
//!
//! This module provides the [`Parser`], a single-pass, line-oriented state
//! machine that turns INI text into a [`Document`].
//!
//! ## Overview
//!
//! Every line is classified, in this order, as blank, comment, section header,
//! property or invalid. Comment lines are buffered and attached to the next
//! section or property; comments still pending at end of input are dropped.
//! The recognition tokens (comment leads, section delimiters, assignment
//! character) all come from the [`Configuration`].
//!
//! ## Error policy
//!
//! [`Parser::parse`] always returns the structured error. [`Parser::try_parse`]
//! honours [`Configuration::throw_exceptions_on_error`]: when it is unset a
//! failed parse yields `Ok(None)` and the error is kept in [`Parser::errors`].
//! A partially built document is never returned.
//!
//! ```rust
//! use ini_doc::{Configuration, Parser};
//!
//! let mut parser = Parser::new(Configuration::new().with_throw_exceptions_on_error(false));
//! assert_eq!(parser.try_parse("[a]\n[a]\n").unwrap(), None);
//! assert_eq!(parser.errors().len(), 1);
//! assert_eq!(parser.errors()[0].line(), Some(2));
//! ```

use crate::config::{Configuration, DuplicatePropertiesBehaviour};
use crate::error::{Error, Result, StructuralErrorKind};
use crate::{Document, Property, PropertyCollection, Section};
use tracing::{debug, trace};

/// Shape of a single input line.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Blank,
    Comment(&'a str),
    Section {
        name: &'a str,
        comment: Option<&'a str>,
    },
    Property {
        key: &'a str,
        value: &'a str,
        comment: Option<&'a str>,
    },
    Invalid,
}

/// The INI parser.
///
/// Holds a [`Configuration`] and the errors recorded by previous parses.
/// A parser can be reused; each failed parse appends its error to
/// [`errors`](Self::errors) until [`clear_errors`](Self::clear_errors) is
/// called, and successful parses leave the list untouched.
///
/// # Examples
///
/// ```rust
/// use ini_doc::{Configuration, DuplicatePropertiesBehaviour, Parser};
///
/// let config = Configuration::new().with_duplicate_properties_behaviour(
///     DuplicatePropertiesBehaviour::AllowAndConcatenateValues,
/// );
/// let mut parser = Parser::new(config);
/// let doc = parser.parse("[S]\nk=1\nk=2\n").unwrap();
/// assert_eq!(doc.section("S").unwrap().properties().value("k"), Some("1;2"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: Configuration,
    errors: Vec<Error>,
}

impl Parser {
    pub fn new(config: Configuration) -> Self {
        Parser {
            config,
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    /// Errors recorded by every failed parse since the last [`clear_errors`](Self::clear_errors),
    /// oldest first.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Parses `text` into a [`Document`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Structural`] with the 1-based line number and raw line
    /// text of the first line that violates the configured policy.
    pub fn parse(&mut self, text: &str) -> Result<Document> {
        let result = ParseState::new(&self.config).run(text);
        if let Err(err) = &result {
            debug!(error = %err, "parse failed");
            self.errors.push(err.clone());
        }
        result
    }

    /// Parses `text`, reporting failure according to
    /// [`Configuration::throw_exceptions_on_error`].
    ///
    /// Returns `Ok(Some(doc))` on success. On failure returns `Err` when the
    /// option is set, and `Ok(None)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Structural`] only when `throw_exceptions_on_error` is set.
    pub fn try_parse(&mut self, text: &str) -> Result<Option<Document>> {
        match self.parse(text) {
            Ok(document) => Ok(Some(document)),
            Err(err) if self.config.throw_exceptions_on_error => Err(err),
            Err(_) => Ok(None),
        }
    }
}

/// Mutable state of one parse.
struct ParseState<'c> {
    config: &'c Configuration,
    document: Document,
    current_section: Option<String>,
    pending_comments: Vec<String>,
}

impl<'c> ParseState<'c> {
    fn new(config: &'c Configuration) -> Self {
        ParseState {
            config,
            document: Document::with_configuration(config),
            current_section: None,
            pending_comments: Vec::new(),
        }
    }

    fn run(mut self, text: &str) -> Result<Document> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        for (index, raw) in text.lines().enumerate() {
            self.process_line(index + 1, raw)?;
        }
        if !self.pending_comments.is_empty() {
            trace!(
                count = self.pending_comments.len(),
                "dropping trailing comments"
            );
        }
        Ok(self.document)
    }

    fn process_line(&mut self, line: usize, raw: &str) -> Result<()> {
        let classified = classify(self.config, raw);
        trace!(line, kind = ?classified, "classified line");

        match classified {
            Line::Blank => {}
            Line::Comment(text) => self.pending_comments.push(text.to_string()),
            Line::Section { name, comment } => {
                self.pending_comments.extend(comment.map(str::to_string));
                self.open_section(line, raw, name)?;
            }
            Line::Property {
                key,
                value,
                comment,
            } => {
                self.pending_comments.extend(comment.map(str::to_string));
                self.add_property(line, raw, key, value)?;
            }
            Line::Invalid if self.config.skip_invalid_lines => {
                debug!(line, text = raw, "skipping invalid line");
            }
            Line::Invalid => {
                return Err(Error::structural(line, raw, StructuralErrorKind::InvalidLine));
            }
        }
        Ok(())
    }

    fn open_section(&mut self, line: usize, raw: &str, name: &str) -> Result<()> {
        if self.document.sections().contains(name) {
            if !self.config.allow_duplicate_sections {
                return Err(Error::structural(
                    line,
                    raw,
                    StructuralErrorKind::DuplicateSection,
                ));
            }
            debug!(line, section = name, "reusing duplicate section");
            // The existing section keeps its own comments.
            self.pending_comments.clear();
        } else {
            let mut section = Section::with_case_insensitive(name, self.config.case_insensitive)
                .map_err(|_| Error::structural(line, raw, StructuralErrorKind::InvalidLine))?;
            *section.comments_mut() = std::mem::take(&mut self.pending_comments);
            self.document.sections_mut().add(section);
        }
        self.current_section = Some(name.to_string());
        Ok(())
    }

    fn add_property(&mut self, line: usize, raw: &str, key: &str, value: &str) -> Result<()> {
        let mut property = Property::with_value(key, value)
            .map_err(|_| Error::structural(line, raw, StructuralErrorKind::InvalidLine))?;
        property.set_comments(std::mem::take(&mut self.pending_comments));

        let properties: Option<&mut PropertyCollection> = match self.current_section.as_deref() {
            Some(name) => self
                .document
                .section_mut(name)
                .map(Section::properties_mut),
            None if self.config.allow_keys_without_section => Some(self.document.global_mut()),
            None => {
                return Err(Error::structural(
                    line,
                    raw,
                    StructuralErrorKind::PropertyWithoutSection,
                ))
            }
        };
        let Some(properties) = properties else {
            return Err(Error::structural(line, raw, StructuralErrorKind::InvalidLine));
        };

        match properties.get_mut(key) {
            None => {
                properties.add_property(property);
            }
            Some(existing) => {
                let behaviour = self.config.duplicate_properties_behaviour;
                debug!(line, key, ?behaviour, "duplicate key");
                if !resolve_duplicate(self.config, existing, property) {
                    return Err(Error::structural(
                        line,
                        raw,
                        StructuralErrorKind::DuplicateProperty,
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Applies the duplicate-key policy to `existing`. Returns `false` when the
/// policy rejects the duplicate.
fn resolve_duplicate(
    config: &Configuration,
    existing: &mut Property,
    mut incoming: Property,
) -> bool {
    match config.duplicate_properties_behaviour {
        DuplicatePropertiesBehaviour::DisallowAndStopWithError => return false,
        DuplicatePropertiesBehaviour::AllowAndKeepFirstValue => {}
        DuplicatePropertiesBehaviour::AllowAndKeepLastValue => {
            existing.set_value(incoming.value());
        }
        DuplicatePropertiesBehaviour::AllowAndConcatenateValues => {
            let joined = format!(
                "{}{}{}",
                existing.value(),
                config.concatenate_duplicate_properties_string,
                incoming.value()
            );
            existing.set_value(joined);
        }
    }
    existing.comments_mut().append(incoming.comments_mut());
    true
}

fn classify<'a>(config: &Configuration, raw: &'a str) -> Line<'a> {
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if let Some(text) = strip_comment_lead(config, line) {
        return Line::Comment(text.trim());
    }
    if let Some(rest) = line.strip_prefix(config.section_start) {
        return classify_section(config, rest);
    }
    classify_property(config, raw)
}

fn classify_section<'a>(config: &Configuration, rest: &'a str) -> Line<'a> {
    let (name, comment) = if config.allow_inline_comments {
        let Some(end) = rest.find(config.section_end) else {
            return Line::Invalid;
        };
        let trailing = rest[end + config.section_end.len_utf8()..].trim();
        if trailing.is_empty() {
            (&rest[..end], None)
        } else {
            match strip_comment_lead(config, trailing) {
                Some(text) => (&rest[..end], Some(text.trim())),
                None => return Line::Invalid,
            }
        }
    } else {
        match rest.strip_suffix(config.section_end) {
            Some(name) => (name, None),
            None => return Line::Invalid,
        }
    };

    let name = if config.trim_sections {
        name.trim()
    } else {
        name
    };
    if name.trim().is_empty() {
        return Line::Invalid;
    }
    Line::Section { name, comment }
}

fn classify_property<'a>(config: &Configuration, raw: &'a str) -> Line<'a> {
    let Some((key, value)) = raw.split_once(config.key_value_assignment) else {
        return Line::Invalid;
    };

    let (value, comment) = if config.allow_inline_comments {
        split_inline_comment(config, value)
    } else {
        (value, None)
    };

    let (key, value) = if config.trim_properties {
        (key.trim(), value.trim())
    } else {
        (key, value)
    };
    if key.trim().is_empty() {
        return Line::Invalid;
    }
    Line::Property {
        key,
        value,
        comment,
    }
}

fn strip_comment_lead<'a>(config: &Configuration, line: &'a str) -> Option<&'a str> {
    config
        .comment_strings
        .iter()
        .filter(|lead| !lead.is_empty())
        .find_map(|lead| line.strip_prefix(lead.as_str()))
}

/// Splits `value` at the earliest comment lead.
fn split_inline_comment<'a>(config: &Configuration, value: &'a str) -> (&'a str, Option<&'a str>) {
    let earliest = config
        .comment_strings
        .iter()
        .filter(|lead| !lead.is_empty())
        .filter_map(|lead| value.find(lead.as_str()).map(|pos| (pos, lead.len())))
        .min_by_key(|(pos, _)| *pos);

    match earliest {
        Some((pos, lead_len)) => (&value[..pos], Some(value[pos + lead_len..].trim())),
        None => (value, None),
    }
}
