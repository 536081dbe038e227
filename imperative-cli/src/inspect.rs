//! Tree view for `imperative inspect`
//!
//! One line per node, drawn with box characters:
//!
//!     #fragment
//!     └─ <div class="card">
//!        ├─ <h1>
//!        │  └─ "Title"
//!        └─ <svg:circle r="1">

use imperative_markup::{Element, Fragment, Namespace, Node};

pub const AVAILABLE_VIEWS: &[&str] = &["tree", "json"];

pub fn render_tree(fragment: &Fragment) -> String {
    let mut output = String::from("#fragment\n");
    write_children(fragment.children(), "", &mut output);
    output
}

fn write_children(children: &[Node], prefix: &str, output: &mut String) {
    for (index, child) in children.iter().enumerate() {
        let last = index + 1 == children.len();
        let (branch, continuation) = if last { ("└─ ", "   ") } else { ("├─ ", "│  ") };
        output.push_str(prefix);
        output.push_str(branch);
        output.push_str(&label(child));
        output.push('\n');
        write_children(
            child.children(),
            &format!("{prefix}{continuation}"),
            output,
        );
    }
}

fn label(node: &Node) -> String {
    match node {
        Node::Text(text) => format!("{text:?}"),
        Node::Element(element) => element_label(element),
        Node::Fragment(_) => "#fragment".to_string(),
    }
}

fn element_label(element: &Element) -> String {
    let mut label = String::from("<");
    match element.namespace() {
        Namespace::Html => {}
        Namespace::Svg => label.push_str("svg:"),
        Namespace::Other(uri) => {
            label.push('{');
            label.push_str(uri);
            label.push('}');
        }
    }
    label.push_str(element.tag());
    for attribute in element.attributes() {
        label.push_str(&format!(" {}={:?}", attribute.name, attribute.value));
    }
    label.push('>');
    label
}
