//! Format trait definition
//!
//! This module defines the Format trait every format implements. The trait provides a
//! uniform interface for parsing source text into a [`Fragment`] and serializing a
//! fragment back out.

use crate::dom::Fragment;
use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for tree formats
///
/// Implementors convert between a string representation and an element tree.
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct Outline;
///
/// impl Format for Outline {
///     fn name(&self) -> &str {
///         "outline"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, doc: &Fragment) -> Result<String, FormatError> {
///         Ok(format!("{} top-level nodes", doc.children().len()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "imperative")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → tree)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (tree → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a fragment
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Fragment, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a fragment into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _doc: &Fragment) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a fragment, optionally using extra parameters.
    ///
    /// The default implementation delegates to [`Format::serialize`] and rejects
    /// any parameters.
    fn serialize_with_options(
        &self,
        doc: &Fragment,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
