//! Builder-code format
//!
//! Serializing runs the tree translator; parsing runs the reader and re-applies the calls
//! through the builder. The two are inverses for any tree the translator can express.
//!
//! Extra parameters:
//!
//!     indent   Indentation unit: a literal string, `tab`, or a number of spaces.
//!     strict   `true` to accept only known tag names when reading.

pub mod reader;

pub use reader::Reader;

use crate::dom::Fragment;
use crate::error::FormatError;
use crate::format::Format;
use crate::translate::{translate_fragment, DEFAULT_INDENT};
use std::collections::HashMap;

/// Options for reading and writing builder code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImperativeOptions {
    pub indent: String,
    pub strict: bool,
}

impl Default for ImperativeOptions {
    fn default() -> Self {
        ImperativeOptions {
            indent: DEFAULT_INDENT.to_string(),
            strict: false,
        }
    }
}

impl ImperativeOptions {
    /// Overlays extra parameters on these options.
    pub fn with_overrides(&self, options: &HashMap<String, String>) -> Result<Self, FormatError> {
        let mut resolved = self.clone();
        for (key, value) in options {
            match key.as_str() {
                "indent" => resolved.indent = parse_indent(value),
                "strict" => {
                    resolved.strict = value.parse().map_err(|_| {
                        FormatError::NotSupported(format!(
                            "Invalid value '{value}' for 'strict' (expected true or false)"
                        ))
                    })?
                }
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'imperative' does not support parameter '{other}'"
                    )))
                }
            }
        }
        Ok(resolved)
    }
}

/// `tab` is a tab, a number is that many spaces, anything else is used as is.
pub fn parse_indent(value: &str) -> String {
    if value == "tab" {
        return "\t".to_string();
    }
    match value.parse::<usize>() {
        Ok(width) => " ".repeat(width),
        Err(_) => value.to_string(),
    }
}

/// Format implementation for builder code
#[derive(Debug, Default, Clone)]
pub struct ImperativeFormat {
    options: ImperativeOptions,
}

impl ImperativeFormat {
    pub fn new(options: ImperativeOptions) -> Self {
        ImperativeFormat { options }
    }

    pub fn options(&self) -> &ImperativeOptions {
        &self.options
    }

    fn reader(options: &ImperativeOptions) -> Reader {
        if options.strict {
            Reader::strict()
        } else {
            Reader::new()
        }
    }
}

impl Format for ImperativeFormat {
    fn name(&self) -> &str {
        "imperative"
    }

    fn description(&self) -> &str {
        "Builder calls (HTML.div(...), SVG.circle(...))"
    }

    fn file_extensions(&self) -> &[&str] {
        &["js", "mjs"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Fragment, FormatError> {
        Ok(Self::reader(&self.options).read(source)?)
    }

    fn serialize(&self, doc: &Fragment) -> Result<String, FormatError> {
        Ok(translate_fragment(doc, &self.options.indent))
    }

    fn serialize_with_options(
        &self,
        doc: &Fragment,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let resolved = self.options.with_overrides(options)?;
        Ok(translate_fragment(doc, &resolved.indent))
    }
}
