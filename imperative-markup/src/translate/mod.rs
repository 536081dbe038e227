//! Tree translator
//!
//!     Walks a built tree and writes the builder calls that rebuild it:
//!
//!         HTML.div({class: "container"},
//!             "Hello ",
//!             HTML.b("World"),
//!         )
//!
//!     Elements become `HTML.<name>(...)` or `SVG.<name>(...)`, with the bracket form
//!     `HTML["name"](...)` when the name is not a safe bare identifier. Attributes go into a
//!     single leading bag in declaration order. A lone single-line text child collapses onto
//!     the call line; anything else is written one child per line, one indent deeper, each
//!     followed by `,`. The trailing separator of the last top-level item is dropped.
//!
//!     Nodes the builder API cannot express (elements in other namespaces, nested fragments)
//!     become a `<Unrecognized node type>` line and the walk moves on. The tree is never
//!     mutated.

pub mod literal;
pub mod naming;

use crate::dom::{Element, Fragment, Namespace, Node};
use literal::{format_attribute_value, format_text, quote};
use naming::{is_bare_identifier_syntax, to_identifier, IdentCase};

pub const DEFAULT_INDENT: &str = "\t";

/// Placeholder line for nodes with no builder-call form.
pub const UNRECOGNIZED_NODE: &str = "<Unrecognized node type>";

const SEPARATOR: &str = ",\n";

/// Translates a node. A fragment translates as the sequence of its children.
pub fn translate(node: &Node, indent: &str) -> String {
    match node {
        Node::Fragment(fragment) => translate_fragment(fragment, indent),
        other => translate_items(std::slice::from_ref(other), indent),
    }
}

pub fn translate_fragment(fragment: &Fragment, indent: &str) -> String {
    translate_items(fragment.children(), indent)
}

fn translate_items(nodes: &[Node], indent: &str) -> String {
    let mut output = String::new();
    Translator { indent }.write_items(nodes, &mut output);
    if output.ends_with(SEPARATOR) {
        output.truncate(output.len() - SEPARATOR.len());
    }
    output
}

struct Translator<'a> {
    indent: &'a str,
}

impl Translator<'_> {
    fn write_items(&self, nodes: &[Node], output: &mut String) {
        for node in nodes {
            match node {
                Node::Text(text) => {
                    if let Some(literal) = format_text(text) {
                        output.push_str(&literal);
                        output.push_str(SEPARATOR);
                    }
                }
                Node::Element(element) => self.write_element(element, 0, output),
                Node::Fragment(_) => {
                    output.push_str(UNRECOGNIZED_NODE);
                    output.push_str(SEPARATOR);
                }
            }
        }
    }

    fn write_element(&self, element: &Element, depth: usize, output: &mut String) {
        let indentation = self.indent.repeat(depth);
        let (accessor, case) = match element.namespace() {
            Namespace::Html => ("HTML", IdentCase::Markup),
            Namespace::Svg => ("SVG", IdentCase::VectorGraphics),
            Namespace::Other(_) => {
                output.push_str(&indentation);
                output.push_str(UNRECOGNIZED_NODE);
                output.push_str(SEPARATOR);
                return;
            }
        };

        let raw_name = match case {
            IdentCase::Markup => element.tag().to_ascii_lowercase(),
            IdentCase::VectorGraphics => element.tag().to_string(),
        };
        let identifier = to_identifier(&raw_name, case);

        let attributes: Vec<String> = element
            .attributes()
            .iter()
            .filter(|attribute| attribute.specified)
            .map(|attribute| {
                let key = if is_bare_identifier_syntax(&attribute.name) {
                    attribute.name.clone()
                } else {
                    quote(&attribute.name)
                };
                format!("{key}: {}", format_attribute_value(&attribute.value))
            })
            .collect();

        let child_indentation = format!("{indentation}{}", self.indent);
        let mut body = String::new();
        let mut collapsed = false;
        for child in element.children() {
            match child {
                Node::Text(text) => {
                    let Some(literal) = format_text(text) else {
                        continue;
                    };
                    if attributes.is_empty()
                        && element.children().len() == 1
                        && !literal.contains('\n')
                    {
                        body.push_str(&literal);
                        collapsed = true;
                    } else {
                        body.push_str(&child_indentation);
                        body.push_str(&literal);
                        body.push_str(SEPARATOR);
                    }
                }
                Node::Element(child) => self.write_element(child, depth + 1, &mut body),
                Node::Fragment(_) => {
                    body.push_str(&child_indentation);
                    body.push_str(UNRECOGNIZED_NODE);
                    body.push_str(SEPARATOR);
                }
            }
        }

        output.push_str(&indentation);
        output.push_str(accessor);
        if identifier.is_valid_bare_identifier {
            output.push('.');
            output.push_str(&identifier.text);
        } else {
            output.push('[');
            output.push_str(&quote(&raw_name));
            output.push(']');
        }
        output.push('(');
        if !attributes.is_empty() {
            output.push('{');
            output.push_str(&attributes.join(", "));
            output.push('}');
            if !body.is_empty() {
                output.push(',');
            }
        }
        if collapsed {
            output.push_str(&body);
        } else if !body.is_empty() {
            output.push('\n');
            output.push_str(&body);
            output.push_str(&indentation);
        }
        output.push(')');
        output.push_str(SEPARATOR);
    }
}
