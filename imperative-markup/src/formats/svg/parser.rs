//! SVG parsing via roxmltree
//!
//! The source is wrapped in `<svg xmlns="http://www.w3.org/2000/svg">...</svg>` so that a
//! bare list of shapes parses as a well-formed document in the SVG namespace. The wrapper's
//! children become the fragment. A leading XML declaration and doctype, as found in
//! standalone `.svg` files, are removed before wrapping.

use crate::dom::{Element, Fragment, Namespace, Node, ParentNode, SVG_NAMESPACE};
use crate::error::FormatError;
use roxmltree::{Document, NodeType};

const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Parse SVG source into a fragment
pub fn parse_svg(source: &str) -> Result<Fragment, FormatError> {
    let content = strip_prolog(source);
    let wrapped = format!("<svg xmlns=\"{SVG_NAMESPACE}\">{content}</svg>");
    let document = Document::parse(&wrapped)
        .map_err(|e| FormatError::ParseError(format!("SVG parsing error: {e}")))?;

    let mut fragment = Fragment::new();
    for child in document.root_element().children() {
        if let Some(node) = convert_node(child) {
            fragment.append_child(node);
        }
    }
    log::trace!("parsed {} top-level SVG nodes", fragment.children().len());
    Ok(fragment)
}

/// Drops a leading `<?xml ...?>` declaration and `<!DOCTYPE ...>`. Content without a
/// prolog is returned untouched, leading whitespace included.
fn strip_prolog(source: &str) -> &str {
    let mut rest = source;
    loop {
        let trimmed = rest.trim_start();
        if let Some(after) = trimmed.strip_prefix("<?xml") {
            if !after.starts_with(|c: char| c.is_ascii_whitespace()) {
                return rest;
            }
            match after.find("?>") {
                Some(end) => rest = &after[end + 2..],
                None => return rest,
            }
        } else if trimmed
            .get(..9)
            .is_some_and(|head| head.eq_ignore_ascii_case("<!DOCTYPE"))
        {
            match doctype_end(&trimmed[9..]) {
                Some(end) => rest = &trimmed[9 + end + 1..],
                None => return rest,
            }
        } else {
            return rest;
        }
    }
}

/// Index of the `>` closing a doctype, skipping an internal `[...]` subset.
fn doctype_end(body: &str) -> Option<usize> {
    let close = body.find('>')?;
    match body.find('[') {
        Some(open) if open < close => {
            let subset_end = open + body[open..].find(']')?;
            body[subset_end..].find('>').map(|end| subset_end + end)
        }
        _ => Some(close),
    }
}

fn convert_node(node: roxmltree::Node) -> Option<Node> {
    match node.node_type() {
        NodeType::Element => {
            let tag = node.tag_name();
            let namespace = match tag.namespace() {
                Some(uri) => Namespace::from_uri(uri),
                None => Namespace::Other(String::new()),
            };
            let mut element = Element::new(tag.name(), namespace);
            for attribute in node.attributes() {
                let name = match attribute.namespace() {
                    Some(XLINK_NAMESPACE) => format!("xlink:{}", attribute.name()),
                    Some(XML_NAMESPACE) => format!("xml:{}", attribute.name()),
                    _ => attribute.name().to_string(),
                };
                element.set_attribute(name, attribute.value());
            }
            for child in node.children() {
                if let Some(converted) = convert_node(child) {
                    element.append_child(converted);
                }
            }
            Some(Node::Element(element))
        }
        NodeType::Text => node.text().map(Node::text),
        _ => None,
    }
}
