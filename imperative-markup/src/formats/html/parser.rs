//! HTML parsing via html5ever
//!
//! The source is parsed as a fragment in the context of a `<body>` element, so leading
//! whitespace and head-only elements are kept in place. Comments, doctypes and processing
//! instructions are dropped.

use crate::dom::{Element, Fragment, Namespace, Node, ParentNode};
use crate::error::FormatError;
use html5ever::tendril::TendrilSink;
use html5ever::{local_name, ns, parse_fragment, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse HTML source into a fragment
pub fn parse_html(source: &str) -> Result<Fragment, FormatError> {
    let dom = parse_fragment(
        RcDom::default(),
        ParseOpts::default(),
        QualName::new(None, ns!(html), local_name!("body")),
        vec![],
        true,
    )
    .one(source);

    // The fragment parser wraps its output in a synthetic <html> root.
    let root = find_html_element(&dom.document).ok_or_else(|| {
        FormatError::ParseError("HTML fragment has no root element".to_string())
    })?;

    let mut fragment = Fragment::new();
    for child in root.children.borrow().iter() {
        if let Some(node) = convert_handle(child) {
            fragment.append_child(node);
        }
    }
    log::trace!("parsed {} top-level HTML nodes", fragment.children().len());
    Ok(fragment)
}

fn find_html_element(document: &Handle) -> Option<Handle> {
    document
        .children
        .borrow()
        .iter()
        .find(|child| is_element(child, local_name!("html")))
        .cloned()
}

fn is_element(handle: &Handle, local: html5ever::LocalName) -> bool {
    matches!(&handle.data, NodeData::Element { name, .. } if name.ns == ns!(html) && name.local == local)
}

fn convert_handle(handle: &Handle) -> Option<Node> {
    match &handle.data {
        NodeData::Element { name, attrs, .. } => {
            let namespace = if name.ns == ns!(html) {
                Namespace::Html
            } else if name.ns == ns!(svg) {
                Namespace::Svg
            } else {
                Namespace::Other(name.ns.to_string())
            };
            let mut element = Element::new(name.local.to_string(), namespace);
            for attribute in attrs.borrow().iter() {
                let attribute_name = match &attribute.name.prefix {
                    Some(prefix) => format!("{prefix}:{}", attribute.name.local),
                    None => attribute.name.local.to_string(),
                };
                element.set_attribute(attribute_name, attribute.value.to_string());
            }
            for child in handle.children.borrow().iter() {
                if let Some(node) = convert_handle(child) {
                    element.append_child(node);
                }
            }
            Some(Node::Element(element))
        }
        NodeData::Text { contents } => Some(Node::Text(contents.borrow().to_string())),
        _ => None,
    }
}
