//! Tree node types.

use super::style::StyleDeclaration;
use crate::value::{Producer, Value};
use serde::Serialize;

pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Namespace of an element, fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Html,
    Svg,
    /// Any other namespace a parser hands us (MathML, custom XML).
    Other(String),
}

impl Namespace {
    pub fn from_uri(uri: &str) -> Self {
        match uri {
            HTML_NAMESPACE => Namespace::Html,
            SVG_NAMESPACE => Namespace::Svg,
            other => Namespace::Other(other.to_string()),
        }
    }

    pub fn uri(&self) -> &str {
        match self {
            Namespace::Html => HTML_NAMESPACE,
            Namespace::Svg => SVG_NAMESPACE,
            Namespace::Other(uri) => uri,
        }
    }
}

/// A single attribute. `specified` is false for values the element carries
/// without the author writing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub specified: bool,
}

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text(String),
    Fragment(Fragment),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Children of container nodes. Text nodes have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Fragment(fragment) => &fragment.children,
            Node::Text(_) => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Element(element) => Some(&mut element.children),
            Node::Fragment(fragment) => Some(&mut fragment.children),
            Node::Text(_) => None,
        }
    }

    /// Whether the node can be iterated like a collection. Select and form
    /// elements are, as are fragments.
    pub fn is_iterable(&self) -> bool {
        match self {
            Node::Element(element) => {
                element.namespace == Namespace::Html
                    && matches!(element.tag.as_str(), "select" | "form")
            }
            Node::Fragment(_) => true,
            Node::Text(_) => false,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            other => other.children().iter().map(Node::text_content).collect(),
        }
    }

    /// DOM-style object display, e.g. `[object HTMLElement]`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Node::Element(element) => match element.namespace {
                Namespace::Html => "[object HTMLElement]",
                Namespace::Svg => "[object SVGElement]",
                Namespace::Other(_) => "[object Element]",
            },
            Node::Text(_) => "[object Text]",
            Node::Fragment(_) => "[object DocumentFragment]",
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Fragment> for Node {
    fn from(fragment: Fragment) -> Self {
        Node::Fragment(fragment)
    }
}

/// Containers the builder can append to.
pub trait ParentNode {
    fn children(&self) -> &[Node];

    /// Appends a node. Fragments are spliced: their children move in.
    fn append_child(&mut self, node: Node);

    /// The element itself, for targets that accept attributes.
    fn as_element_mut(&mut self) -> Option<&mut Element> {
        None
    }
}

fn append_into(children: &mut Vec<Node>, node: Node) {
    match node {
        Node::Fragment(fragment) => children.extend(fragment.children),
        other => children.push(other),
    }
}

/// An element with a tag, ordered attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    tag: String,
    namespace: Namespace,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
    #[serde(skip)]
    properties: Vec<(String, Producer)>,
}

impl Element {
    /// Creates an empty element. HTML tag names are stored lowercased.
    pub fn new(tag: impl Into<String>, namespace: Namespace) -> Self {
        let mut tag = tag.into();
        if namespace == Namespace::Html {
            tag.make_ascii_lowercase();
        }
        Element {
            tag,
            namespace,
            attributes: Vec::new(),
            children: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn html(tag: impl Into<String>) -> Self {
        Self::new(tag, Namespace::Html)
    }

    pub fn svg(tag: impl Into<String>) -> Self {
        Self::new(tag, Namespace::Svg)
    }

    /// Local tag name as stored.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// DOM `tagName`: uppercased for HTML elements.
    pub fn tag_name(&self) -> String {
        match self.namespace {
            Namespace::Html => self.tag.to_ascii_uppercase(),
            _ => self.tag.clone(),
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Sets an attribute. An existing attribute keeps its position.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.write_attribute(name.into(), value.into(), true);
    }

    /// Sets an attribute the author did not write (a default value).
    pub fn set_default_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.write_attribute(name.into(), value.into(), false);
    }

    fn write_attribute(&mut self, name: String, value: String, specified: bool) {
        match self
            .attributes
            .iter_mut()
            .find(|attribute| attribute.name == name)
        {
            Some(attribute) => {
                attribute.value = value;
                attribute.specified = specified;
            }
            None => self.attributes.push(Attribute {
                name,
                value,
                specified,
            }),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let position = self
            .attributes
            .iter()
            .position(|attribute| attribute.name == name)?;
        Some(self.attributes.remove(position).value)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    /// The inline style, parsed from the `style` attribute.
    pub fn style(&self) -> StyleDeclaration {
        self.attribute("style")
            .map(StyleDeclaration::parse)
            .unwrap_or_default()
    }

    /// Assigns a recognized style property (camelCase or kebab-case key).
    /// Returns `false` if the key is not a recognized property.
    pub fn set_style(&mut self, key: &str, value: &str) -> bool {
        self.update_style(|style| style.set(key, value))
    }

    /// Registers a style property by CSS name, including custom properties.
    pub fn set_style_property(&mut self, name: &str, value: &str) -> bool {
        self.update_style(|style| style.set_property(name, value))
    }

    fn update_style(&mut self, update: impl FnOnce(&mut StyleDeclaration) -> bool) -> bool {
        let mut style = self.style();
        if !update(&mut style) {
            return false;
        }
        let css_text = style.css_text();
        if css_text.is_empty() && !self.has_attribute("style") {
            return true;
        }
        self.set_attribute("style", css_text);
        true
    }

    /// Stores a callback property. Callbacks never become attributes.
    pub fn set_property(&mut self, name: impl Into<String>, callback: Producer) {
        let name = name.into();
        match self
            .properties
            .iter_mut()
            .find(|(existing, _)| *existing == name)
        {
            Some(entry) => entry.1 = callback,
            None => self.properties.push((name, callback)),
        }
    }

    pub fn property(&self, name: &str) -> Option<&Producer> {
        self.properties
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, callback)| callback)
    }

    /// Invokes a stored callback property.
    pub fn invoke(&self, name: &str) -> Option<Value> {
        self.property(name).map(Producer::call)
    }
}

impl ParentNode for Element {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn append_child(&mut self, node: Node) {
        append_into(&mut self.children, node);
    }

    fn as_element_mut(&mut self) -> Option<&mut Element> {
        Some(self)
    }
}

/// A childful container with no tag and no attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Fragment {
    children: Vec<Node>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(children: Vec<Node>) -> Self {
        let mut fragment = Self::new();
        for child in children {
            fragment.append_child(child);
        }
        fragment
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl ParentNode for Fragment {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn append_child(&mut self, node: Node) {
        append_into(&mut self.children, node);
    }
}
