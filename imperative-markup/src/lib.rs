//! Imperative construction of HTML and SVG element trees, and the way back
//!
//!     This crate has two halves that mirror each other:
//!
//!         - The builder takes a flat list of mixed arguments (strings, nodes, nested lists, lazy
//!           producers, iterators, attribute bags) and turns them into children and attributes
//!           of an element or fragment.
//!         - The translator takes a finished tree and writes the builder calls that would
//!           rebuild it, as source text.
//!
//!     The reader closes the loop: it reads the translator's output back through the builder,
//!     so `read(translate(tree)) == tree` for any tree the builder can produce.
//!
//!     This is a pure lib. Nothing here prints or touches the environment; warnings go to an
//!     injected `DiagnosticSink` (by default the `log` facade), and the CLI lives in
//!     imperative-cli.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # FormatError, ReadError
//!     ├── value.rs                # Builder arguments (Value, Producer, Drain, Object)
//!     ├── diagnostics.rs          # Warning sinks
//!     ├── dom                     # Element tree and inline style
//!     ├── build                   # Argument classifier and tree builder
//!     ├── factory                 # HTML / SVG accessor surface, known tag tables
//!     ├── translate               # Tree translator, identifier namer, literal formatter
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     └── formats
//!         ├── html                # html5ever parser + serializer
//!         ├── svg                 # roxmltree parser
//!         ├── imperative          # builder-code reader + translator
//!         └── json                # serde_json tree dump
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs includes
//!     them as modules.
//!
//! Classification Policy
//!
//!     Arguments are classified in a fixed order and the first match wins: node, string,
//!     producer, sequence, other iterable, attribute bag (element targets only), anything else.
//!     The order matters for values with several capabilities: a `<select>` element is
//!     iterable but is appended as a node, and a string is iterable but becomes one text node.
//!     Anything unrecognized is appended as its display text (`null`, `0`, `/^.*$/`).

pub mod build;
pub mod diagnostics;
pub mod dom;
pub mod error;
pub mod factory;
pub mod format;
pub mod formats;
pub mod registry;
pub mod translate;
pub mod value;

pub use build::{classify, ArgumentKind, Builder};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, LogSink};
pub use dom::{Attribute, Element, Fragment, Namespace, Node, ParentNode};
pub use error::{FormatError, ReadError};
pub use factory::{ElementFactory, TagResolver};
pub use format::Format;
pub use formats::imperative::Reader;
pub use registry::FormatRegistry;
pub use translate::{translate, translate_fragment, DEFAULT_INDENT};
pub use value::{Drain, Object, Producer, Value};

/// Parses HTML and translates it to builder code.
pub fn translate_html(source: &str, indent: &str) -> Result<String, FormatError> {
    let fragment = formats::html::parse_html(source)?;
    Ok(translate_fragment(&fragment, indent))
}

/// Parses SVG content and translates it to builder code.
pub fn translate_svg(source: &str, indent: &str) -> Result<String, FormatError> {
    let fragment = formats::svg::parse_svg(source)?;
    Ok(translate_fragment(&fragment, indent))
}

/// Parses `source` with any registered parsing format (`html`, `svg`, `imperative`) and
/// translates the result to builder code.
pub fn translate_markup(source: &str, format: &str, indent: &str) -> Result<String, FormatError> {
    let fragment = FormatRegistry::with_defaults().parse(source, format)?;
    Ok(translate_fragment(&fragment, indent))
}
