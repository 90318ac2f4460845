//! The INI dialect accepted by this crate.
//!
//! This module only carries documentation.
//!
//! # Lines
//!
//! Input is read line by line; `\n` and `\r\n` terminators are both accepted
//! and a leading byte-order mark is ignored. Each line, with surrounding
//! whitespace removed, is one of:
//!
//! | Shape | Default syntax | Example |
//! |-------|----------------|---------|
//! | Blank | empty or whitespace only | |
//! | Comment | starts with `;` or `#` | `; listen on all interfaces` |
//! | Section header | `[` name `]` | `[server]` |
//! | Property | key `=` value | `port = 8080` |
//!
//! Anything else is an invalid line. The comment leads, the section delimiters
//! and the assignment character are set on the [`Configuration`].
//!
//! # Sections
//!
//! ```text
//! [server]
//! host = 0.0.0.0
//! ```
//!
//! - The name is the text between the delimiters, trimmed unless
//!   [`Configuration::trim_sections`] is unset. An empty name is invalid.
//! - A repeated header is an error unless
//!   [`Configuration::allow_duplicate_sections`] is set, in which case later
//!   properties join the existing section.
//!
//! # Properties
//!
//! ```text
//! url = http://example.com/?a=b
//! ```
//!
//! - The line is split at the **first** assignment character, so values may
//!   contain it (`url` above has the value `http://example.com/?a=b`).
//! - Key and value are trimmed unless [`Configuration::trim_properties`] is unset.
//! - An empty key is invalid; an empty value is fine.
//! - Properties before the first header are global, unless
//!   [`Configuration::allow_keys_without_section`] is unset.
//! - A repeated key is resolved by
//!   [`Configuration::duplicate_properties_behaviour`]:
//!
//! | Behaviour | `k=1` then `k=2` gives |
//! |-----------|------------------------|
//! | `DisallowAndStopWithError` | error at the second line |
//! | `AllowAndKeepFirstValue` | `1` |
//! | `AllowAndKeepLastValue` | `2` |
//! | `AllowAndConcatenateValues` | `1;2` (separator configurable) |
//!
//! # Comments
//!
//! Comment lines attach, in order, to the next section header or property.
//! Comments after the last entity are dropped. With
//! [`Configuration::allow_inline_comments`] a comment lead after a header or
//! inside a value starts a trailing comment for that same entity:
//!
//! ```text
//! [server] ; main listener
//! port = 8080 # default
//! ```
//!
//! Without the option, `8080 # default` is the whole value.
//!
//! # Errors
//!
//! The first violation stops the parse with an error naming the 1-based line
//! number and the raw line. [`Configuration::skip_invalid_lines`] turns invalid
//! lines into no-ops instead.
//!
//! [`Configuration`]: crate::Configuration
//! [`Configuration::trim_sections`]: crate::Configuration::trim_sections
//! [`Configuration::allow_duplicate_sections`]: crate::Configuration::allow_duplicate_sections
//! [`Configuration::trim_properties`]: crate::Configuration::trim_properties
//! [`Configuration::allow_keys_without_section`]: crate::Configuration::allow_keys_without_section
//! [`Configuration::duplicate_properties_behaviour`]: crate::Configuration::duplicate_properties_behaviour
//! [`Configuration::allow_inline_comments`]: crate::Configuration::allow_inline_comments
//! [`Configuration::skip_invalid_lines`]: crate::Configuration::skip_invalid_lines
