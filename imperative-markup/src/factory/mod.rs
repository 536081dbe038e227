//! Element factories
//!
//!     An `ElementFactory` is the accessor surface of builder code: `HTML.div(...)` asks the
//!     HTML factory for accessor `div`, `SVG.color_profile(...)` asks the SVG factory for
//!     `color_profile`. Accessors resolve to tag names through a table of known tags and, unless
//!     the factory is strict, a naming-convention resolver for everything else:
//!
//!         HTML   myCustomElement  ->  my-custom-element
//!                my_element       ->  my-element
//!         SVG    color_profile    ->  color-profile
//!
//!     Strict factories know only the tables in `tags`.

pub mod tags;

use crate::build::Builder;
use crate::dom::{Element, Fragment, Namespace};
use crate::error::FormatError;
use crate::formats::{html, svg};
use crate::value::Value;
use std::collections::HashMap;
use std::rc::Rc;

/// Maps accessor names the tag table does not know to tag names.
pub trait TagResolver {
    fn resolve(&self, accessor: &str) -> Option<String>;
}

/// HTML convention: uppercase letters become `-` plus the lowercase letter,
/// a leading `-` is dropped and `_` becomes `-`.
#[derive(Debug, Default, Clone, Copy)]
pub struct KebabCaseResolver;

impl TagResolver for KebabCaseResolver {
    fn resolve(&self, accessor: &str) -> Option<String> {
        let mut kebab = String::with_capacity(accessor.len() + 4);
        for c in accessor.chars() {
            if c.is_uppercase() {
                kebab.push('-');
                kebab.extend(c.to_lowercase());
            } else {
                kebab.push(c);
            }
        }
        let kebab = kebab.strip_prefix('-').unwrap_or(&kebab);
        Some(kebab.replace('_', "-"))
    }
}

/// SVG convention: `_` becomes `-`, case is kept.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnakeCaseResolver;

impl TagResolver for SnakeCaseResolver {
    fn resolve(&self, accessor: &str) -> Option<String> {
        Some(accessor.replace('_', "-"))
    }
}

/// Creates elements of one namespace by accessor name.
#[derive(Clone)]
pub struct ElementFactory {
    namespace: Namespace,
    tags: &'static [&'static str],
    known: HashMap<String, &'static str>,
    resolver: Option<Rc<dyn TagResolver>>,
    builder: Builder,
}

impl std::fmt::Debug for ElementFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementFactory")
            .field("namespace", &self.namespace)
            .field("strict", &self.is_strict())
            .finish_non_exhaustive()
    }
}

impl ElementFactory {
    fn new(
        namespace: Namespace,
        tags: &'static [&'static str],
        resolver: Option<Rc<dyn TagResolver>>,
    ) -> Self {
        let mut known = HashMap::new();
        for &tag in tags {
            known.insert(tag.to_string(), tag);
            if namespace == Namespace::Svg && tag.contains('-') {
                known.insert(tag.replace('-', "_"), tag);
            }
        }
        ElementFactory {
            namespace,
            tags,
            known,
            resolver,
            builder: Builder::new(),
        }
    }

    pub fn html() -> Self {
        Self::new(Namespace::Html, tags::HTML_TAGS, Some(Rc::new(KebabCaseResolver)))
    }

    pub fn svg() -> Self {
        Self::new(Namespace::Svg, tags::SVG_TAGS, Some(Rc::new(SnakeCaseResolver)))
    }

    pub fn strict_html() -> Self {
        Self::new(Namespace::Html, tags::HTML_TAGS, None)
    }

    pub fn strict_svg() -> Self {
        Self::new(Namespace::Svg, tags::SVG_TAGS, None)
    }

    /// Replaces the builder used to apply arguments.
    pub fn with_builder(mut self, builder: Builder) -> Self {
        self.builder = builder;
        self
    }

    /// Replaces the resolver for unknown accessors. A strict factory
    /// becomes non-strict.
    pub fn with_resolver(mut self, resolver: Rc<dyn TagResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn is_strict(&self) -> bool {
        self.resolver.is_none()
    }

    pub fn builder(&self) -> &Builder {
        &self.builder
    }

    /// Tags with a predefined accessor, in table order.
    pub fn known_tags(&self) -> &'static [&'static str] {
        self.tags
    }

    /// Resolves an accessor name to a tag name.
    pub fn resolve(&self, accessor: &str) -> Option<String> {
        if let Some(tag) = self.known.get(accessor) {
            return Some((*tag).to_string());
        }
        self.resolver
            .as_ref()
            .and_then(|resolver| resolver.resolve(accessor))
    }

    /// Creates the element named by `accessor` and applies `args` to it.
    pub fn create(&self, accessor: &str, args: Vec<Value>) -> Option<Element> {
        let tag = self.resolve(accessor)?;
        let mut element = Element::new(tag, self.namespace.clone());
        self.builder.apply(&mut element, args);
        Some(element)
    }

    /// The accessor itself as a lazy producer, for passing `HTML.hr`
    /// uncalled. Each call creates a fresh, empty element.
    pub fn producer(&self, accessor: &str) -> Option<Value> {
        let tag = self.resolve(accessor)?;
        let namespace = self.namespace.clone();
        Some(Value::function(move || {
            Value::from(Element::new(tag.clone(), namespace.clone()))
        }))
    }

    /// A fragment with `args` applied.
    pub fn fragment(&self, args: Vec<Value>) -> Fragment {
        let mut fragment = Fragment::new();
        self.builder.apply(&mut fragment, args);
        fragment
    }

    /// Parses markup in this factory's namespace. Sources are joined with `,`.
    pub fn parse(&self, sources: &[&str]) -> Result<Fragment, FormatError> {
        let source = sources.join(",");
        match self.namespace {
            Namespace::Html => html::parse_html(&source),
            Namespace::Svg => svg::parse_svg(&source),
            Namespace::Other(ref uri) => Err(FormatError::NotSupported(format!(
                "No markup parser for namespace '{uri}'"
            ))),
        }
    }
}
