//! Error types for INI parsing and document construction.
//!
//! ## Error Categories
//!
//! - **Structural errors**: the input text breaks a parse policy (malformed line,
//!   repeated section or key where repeats are disallowed, property before any
//!   section where that is disallowed). Always carry the 1-based line number and
//!   the raw line text.
//! - **Construction errors**: an empty or whitespace-only key or section name was
//!   handed to a model constructor. These never depend on the [`Configuration`].
//! - **Unrepresentable entries**: a name, value or comment built in code that
//!   the writer cannot express in the configured syntax.
//! - **I/O and UTF-8 errors**: from the reader/writer convenience functions.
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::{from_str, Error, StructuralErrorKind};
//!
//! let err = from_str("[a]\nnot a property\n").unwrap_err();
//! match err {
//!     Error::Structural { line, kind, .. } => {
//!         assert_eq!(line, 2);
//!         assert_eq!(kind, StructuralErrorKind::InvalidLine);
//!     }
//!     other => panic!("unexpected error: {other}"),
//! }
//! ```
//!
//! [`Configuration`]: crate::Configuration

use std::fmt;
use thiserror::Error;

/// What went wrong on a structurally invalid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralErrorKind {
    /// The line is not blank, a comment, a section header or a property.
    InvalidLine,
    /// A section header repeats an existing section name.
    DuplicateSection,
    /// A key repeats within one section (or within the global properties).
    DuplicateProperty,
    /// A property appears before the first section header.
    PropertyWithoutSection,
}

impl fmt::Display for StructuralErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            StructuralErrorKind::InvalidLine => "unrecognized line",
            StructuralErrorKind::DuplicateSection => "duplicate section",
            StructuralErrorKind::DuplicateProperty => "duplicate key",
            StructuralErrorKind::PropertyWithoutSection => "key outside of any section",
        };
        f.write_str(msg)
    }
}

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input text violated the active parse policy.
    #[error("Parse error at line {line}: {kind}\n  {text}")]
    Structural {
        line: usize,
        text: String,
        kind: StructuralErrorKind,
    },

    /// A model entity was constructed with an invalid name.
    #[error("Invalid name: {0}")]
    Construction(String),

    /// Input bytes were not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    Utf8(String),

    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// A document entry would not read back unchanged once written.
    #[error("Cannot write {0}")]
    Unrepresentable(String),
}

impl Error {
    /// Creates a structural error for the given 1-based line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::{Error, StructuralErrorKind};
    ///
    /// let err = Error::structural(3, "k=v", StructuralErrorKind::DuplicateProperty);
    /// assert!(err.to_string().contains("line 3"));
    /// assert!(err.to_string().contains("k=v"));
    /// ```
    pub fn structural(line: usize, text: &str, kind: StructuralErrorKind) -> Self {
        Error::Structural {
            line,
            text: text.to_string(),
            kind,
        }
    }

    /// Creates a construction error.
    pub fn construction<T: fmt::Display>(msg: T) -> Self {
        Error::Construction(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the line number of a structural error.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Structural { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns the kind of a structural error.
    #[must_use]
    pub fn kind(&self) -> Option<StructuralErrorKind> {
        match self {
            Error::Structural { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Rejects empty or whitespace-only names.
pub(crate) fn validate_name(what: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::construction(format!("{what} name must not be empty")));
    }
    Ok(())
}

pub type Result<T> = std::result::Result<T, Error>;
