//! Markup serialization via html5ever
//!
//! The tree is mirrored into rcdom handles and written with html5ever's serializer, so
//! escaping, void elements and raw-text elements follow the HTML serialization algorithm.
//! SVG elements serialize through the same path (inline SVG form).

use crate::dom::{Element, Fragment, Namespace, Node};
use crate::error::FormatError;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node as RcNode, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

/// Serialize the children of a fragment to markup
pub fn serialize_fragment(fragment: &Fragment) -> Result<String, FormatError> {
    serialize_nodes(fragment.children())
}

/// Serialize a single node to markup
pub fn serialize_node(node: &Node) -> Result<String, FormatError> {
    serialize_nodes(std::slice::from_ref(node))
}

fn serialize_nodes(nodes: &[Node]) -> Result<String, FormatError> {
    let mut output = Vec::new();

    // IncludeNode serializes each handle together with its subtree
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for handle in nodes.iter().flat_map(to_handles) {
        let serializable = SerializableHandle::from(handle);
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            FormatError::SerializationError(format!("HTML serialization failed: {e}"))
        })?;
    }

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}

fn to_handles(node: &Node) -> Vec<Handle> {
    match node {
        Node::Element(element) => vec![element_handle(element)],
        Node::Text(text) => vec![create_text(text)],
        Node::Fragment(fragment) => fragment.children().iter().flat_map(to_handles).collect(),
    }
}

fn element_handle(element: &Element) -> Handle {
    let handle = create_element(element);
    for child in element.children().iter().flat_map(to_handles) {
        child.parent.set(Some(Rc::downgrade(&handle)));
        handle.children.borrow_mut().push(child);
    }
    handle
}

fn qualified_namespace(namespace: &Namespace) -> html5ever::Namespace {
    match namespace {
        Namespace::Html => ns!(html),
        Namespace::Svg => ns!(svg),
        Namespace::Other(uri) => html5ever::Namespace::from(uri.as_str()),
    }
}

/// Create an element node carrying the element's attributes
fn create_element(element: &Element) -> Handle {
    let qual_name = QualName::new(
        None,
        qualified_namespace(element.namespace()),
        LocalName::from(element.tag()),
    );
    let attributes = element
        .attributes()
        .iter()
        .map(|attribute| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(attribute.name.as_str())),
            value: attribute.value.clone().into(),
        })
        .collect();

    Rc::new(RcNode {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(RcNode {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ParentNode;

    #[test]
    fn test_serialize_element_with_attributes() {
        let mut div = Element::html("div");
        div.set_attribute("class", "a \"b\"");
        div.append_child(Node::text("1 < 2"));
        assert_eq!(
            serialize_node(&div.into()).unwrap(),
            "<div class=\"a &quot;b&quot;\">1 &lt; 2</div>"
        );
    }

    #[test]
    fn test_serialize_void_element() {
        let mut input = Element::html("input");
        input.set_attribute("type", "checkbox");
        input.set_attribute("checked", "");
        assert_eq!(
            serialize_node(&input.into()).unwrap(),
            "<input type=\"checkbox\" checked=\"\">"
        );
    }

    #[test]
    fn test_serialize_fragment_sequence() {
        let fragment = Fragment::with_children(vec![
            Element::html("br").into(),
            Node::text("x"),
            Element::svg("g").into(),
        ]);
        assert_eq!(serialize_fragment(&fragment).unwrap(), "<br>x<g></g>");
    }
}
