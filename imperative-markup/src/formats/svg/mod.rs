//! SVG format implementation
//!
//! Parsing uses `roxmltree`: SVG is XML, so a strict XML parser gives exact tag case
//! (`linearGradient`, `feGaussianBlur`) and real namespace resolution. Serialization reuses
//! the html5ever serializer and writes inline-SVG markup.

pub mod parser;

pub use parser::parse_svg;

use crate::dom::Fragment;
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::html::serialize_fragment;

/// Format implementation for SVG
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgFormat;

impl Format for SvgFormat {
    fn name(&self) -> &str {
        "svg"
    }

    fn description(&self) -> &str {
        "SVG markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["svg"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Fragment, FormatError> {
        parse_svg(source)
    }

    fn serialize(&self, doc: &Fragment) -> Result<String, FormatError> {
        serialize_fragment(doc)
    }
}
