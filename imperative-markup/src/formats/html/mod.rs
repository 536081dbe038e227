//! HTML format implementation
//!
//! Bidirectional conversion between HTML source and the element tree.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` pair for both directions:
//! - `html5ever`: Browser-grade HTML5 parser and serializer from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM the parser builds into
//!
//! Parsing is a fragment parse in `<body>` context, so the usual HTML error recovery applies
//! (misnested tags, stray end tags) and leading whitespace is kept. Serialization mirrors the
//! tree into rcdom handles and lets html5ever write them.
//!
//! # Lossy Conversions
//!
//! - Comments, doctypes and processing instructions are dropped on import.
//! - `<html>`, `<head>` and `<body>` wrappers are dropped; their content is kept.
//! - The content of `<template>` elements lives outside the children list in rcdom and is
//!   not imported.

pub mod parser;
pub mod serializer;

pub use parser::parse_html;
pub use serializer::{serialize_fragment, serialize_node};

use crate::dom::Fragment;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for HTML
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Fragment, FormatError> {
        parse_html(source)
    }

    fn serialize(&self, doc: &Fragment) -> Result<String, FormatError> {
        serialize_fragment(doc)
    }
}
