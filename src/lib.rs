//! # ini_doc
//!
//! A tolerant, configurable reader and writer for INI configuration files.
//!
//! Text is parsed into a mutable [`Document`] made of ordered [`Section`]s and
//! [`Property`] entries, each carrying the comment lines written above it. The
//! document can be queried, edited, cloned, merged with another document and
//! written back to text.
//!
//! ## Key Features
//!
//! - **Configurable recognition**: comment leads, section delimiters and the
//!   assignment character are all part of the [`Configuration`]
//! - **Duplicate policies**: repeated keys can fail, keep the first or last
//!   value, or concatenate; repeated sections can fail or be reused
//! - **Tolerant mode**: skip unrecognized lines instead of failing
//! - **Positional errors**: every parse error names the line number and raw text
//! - **Ordered**: sections and keys keep their insertion order
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```rust
//! use ini_doc::{from_str, to_string};
//!
//! let text = "\
//! ; general settings
//! [server]
//! host = localhost
//! port = 8080
//! ";
//!
//! let mut doc = from_str(text).unwrap();
//! let server = doc.section("server").unwrap();
//! assert_eq!(server.properties().value("port"), Some("8080"));
//! assert_eq!(server.comments(), ["general settings"]);
//!
//! doc.section_mut("server")
//!     .unwrap()
//!     .properties_mut()
//!     .insert("port", "9090")
//!     .unwrap();
//! assert!(to_string(&doc).contains("port = 9090"));
//! ```
//!
//! ### Custom configuration
//!
//! ```rust
//! use ini_doc::{from_str_with_config, Configuration, DuplicatePropertiesBehaviour};
//!
//! let config = Configuration::new()
//!     .with_case_insensitive(true)
//!     .with_duplicate_properties_behaviour(DuplicatePropertiesBehaviour::AllowAndKeepLastValue);
//!
//! let doc = from_str_with_config("[Test]\nkey = 1\nKEY = 2\n", &config).unwrap();
//! assert_eq!(doc.get_key_path("test.key", '.'), Some("2"));
//! ```
//!
//! ### Lenient parsing
//!
//! ```rust
//! use ini_doc::{Configuration, Parser};
//!
//! let config = Configuration::new().with_throw_exceptions_on_error(false);
//! let mut parser = Parser::new(config);
//! assert!(parser.try_parse("[a]\nnot valid\n").unwrap().is_none());
//! assert_eq!(parser.errors()[0].line(), Some(2));
//! ```
//!
//! ## Logging
//!
//! Parsing emits [`tracing`] events: `debug` for policy decisions (skipped
//! lines, absorbed duplicates, failed parses) and `trace` for each classified
//! line. Install any subscriber to see them.
//!
//! ## Format
//!
//! See the [`format`] module for the accepted dialect.

pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod macros;
pub mod parser;
pub mod property;
pub mod section;
pub mod writer;

pub use config::{Configuration, DuplicatePropertiesBehaviour};
pub use document::Document;
pub use error::{Error, Result, StructuralErrorKind};
pub use parser::Parser;
pub use property::{Property, PropertyCollection};
pub use section::{Section, SectionCollection};
pub use writer::Writer;

use std::io;

/// Parse INI text with the default [`Configuration`].
///
/// # Examples
///
/// ```rust
/// use ini_doc::from_str;
///
/// let doc = from_str("[a]\nx = 1\n").unwrap();
/// assert_eq!(doc.get_key_path("a.x", '.'), Some("1"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Structural`] for the first line that breaks the default
/// policy (invalid line, repeated section, repeated key).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Document> {
    from_str_with_config(s, &Configuration::default())
}

/// Parse INI text with a custom [`Configuration`].
///
/// This always reports failure as `Err`; use [`Parser::try_parse`] to honour
/// [`Configuration::throw_exceptions_on_error`].
///
/// # Errors
///
/// Returns [`Error::Structural`] for the first line that breaks the policy.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_config(s: &str, config: &Configuration) -> Result<Document> {
    Parser::new(config.clone()).parse(s)
}

/// Parse INI text from UTF-8 bytes with the default [`Configuration`].
///
/// # Examples
///
/// ```rust
/// use ini_doc::from_slice;
///
/// let doc = from_slice(b"[a]\nx = 1\n").unwrap();
/// assert!(doc.section("a").is_some());
/// assert!(from_slice(&[0xff, 0xfe]).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Utf8`] if the bytes are not valid UTF-8, otherwise as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Document> {
    let s = std::str::from_utf8(v).map_err(|e| Error::Utf8(e.to_string()))?;
    from_str(s)
}

/// Write a document as INI text with the default [`Configuration`].
///
/// Entries the syntax cannot express are written as is; see
/// [`Writer::try_write`] for a checked variant.
#[must_use]
pub fn to_string(document: &Document) -> String {
    to_string_with_config(document, &Configuration::default())
}

/// Write a document as INI text using the tokens of `config`.
///
/// Like [`to_string`], this does not check that the output reads back as the
/// same document.
///
/// # Examples
///
/// ```rust
/// use ini_doc::{from_str, to_string_with_config, Configuration};
///
/// let doc = from_str("[a]\nx = 1\n").unwrap();
/// let config = Configuration::new().with_key_value_assignment(':').with_assignment_spacer("");
/// assert_eq!(to_string_with_config(&doc, &config), "[a]\nx:1\n");
/// ```
#[must_use]
pub fn to_string_with_config(document: &Document, config: &Configuration) -> String {
    Writer::new(config.clone()).write(document)
}

/// Write a document as INI text to an I/O stream.
///
/// The document is checked with [`Writer::try_write`] before anything is
/// written, so a failed check leaves the stream untouched.
///
/// # Examples
///
/// ```rust
/// use ini_doc::{from_str, to_writer, Configuration};
///
/// let doc = from_str("[a]\nx = 1\n").unwrap();
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc, &Configuration::default()).unwrap();
/// assert_eq!(buffer, b"[a]\nx = 1\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::Unrepresentable`] if an entry would not read back
/// unchanged, or [`Error::Io`] if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, document: &Document, config: &Configuration) -> Result<()>
where
    W: io::Write,
{
    let text = Writer::new(config.clone()).try_write(document)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
