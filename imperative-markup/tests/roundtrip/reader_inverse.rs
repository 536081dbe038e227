use imperative_markup::{translate_fragment, Element, Fragment, Node, ParentNode, Reader};
use proptest::prelude::*;

const HTML_TAGS: &[&str] = &[
    "div", "p", "span", "b", "select", "form", "var", "input", "x-card", "my-widget",
];
const SVG_TAGS: &[&str] = &["g", "circle", "linearGradient", "color-profile", "switch"];
const ATTRIBUTE_NAMES: &[&str] = &[
    "id", "data-x", "hidden", "for", "value", "aria-label", "title",
];

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9\"'`$\\\\{}][a-zA-Z0-9 \"'`$\\\\{}]{0,8}[a-zA-Z0-9.!]",
        "[a-zA-Z0-9]",
        "[a-z]{1,5}\n\t[a-z]{1,5}",
    ]
}

fn attribute_value() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9 ]{0,6}",
        "-?[1-9][0-9]{0,3}",
        "[0-9]\\.[0-9]{1,2}",
        Just(String::new()),
    ]
}

fn attributes() -> impl Strategy<Value = Vec<(String, String)>> {
    let named = prop::collection::btree_map(
        prop::sample::select(ATTRIBUTE_NAMES).prop_map(str::to_string),
        attribute_value(),
        0..4,
    );
    let class = prop::option::of("[a-z]{1,6}( [a-z]{1,6})?");
    (class, named).prop_map(|(class, named)| {
        class
            .map(|class| ("class".to_string(), class))
            .into_iter()
            .chain(named)
            .collect()
    })
}

fn element(tags: &'static [&'static str], svg: bool) -> impl Strategy<Value = Element> {
    (prop::sample::select(tags), attributes()).prop_map(move |(tag, attributes)| {
        let mut element = if svg { Element::svg(tag) } else { Element::html(tag) };
        for (name, value) in attributes {
            element.set_attribute(name, value);
        }
        element
    })
}

fn node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        text().prop_map(Node::text),
        element(HTML_TAGS, false).prop_map(Node::from),
        element(SVG_TAGS, true).prop_map(Node::from),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            prop_oneof![element(HTML_TAGS, false), element(SVG_TAGS, true)],
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(mut parent, children)| {
                for child in children {
                    parent.append_child(child);
                }
                Node::from(parent)
            })
    })
}

proptest! {
    #[test]
    fn test_reader_inverts_translator(children in prop::collection::vec(node(), 0..4)) {
        let tree = Fragment::with_children(children);
        let code = translate_fragment(&tree, "\t");
        let read = Reader::new().read(&code);
        prop_assert!(read.is_ok(), "failed to read {:?}: {:?}", code, read);
        prop_assert_eq!(read.unwrap(), tree, "code: {}", code);
    }

    #[test]
    fn test_translation_is_stable(children in prop::collection::vec(node(), 0..4)) {
        let tree = Fragment::with_children(children);
        let code = translate_fragment(&tree, "  ");
        let reread = Reader::new().read(&code).unwrap();
        prop_assert_eq!(translate_fragment(&reread, "  "), code);
    }
}

#[test]
fn test_strict_reader_accepts_known_tags() {
    let mut svg = Element::svg("svg");
    svg.append_child(Element::svg("linearGradient").into());
    svg.append_child(Element::svg("color-profile").into());
    let tree = Fragment::with_children(vec![Element::html("var").into(), svg.into()]);

    let code = translate_fragment(&tree, "\t");
    assert_eq!(Reader::strict().read(&code).unwrap(), tree);
}

#[test]
fn test_strict_reader_rejects_custom_tags() {
    let tree = Fragment::with_children(vec![Element::html("x-card").into()]);
    let code = translate_fragment(&tree, "\t");
    assert_eq!(code, "HTML.xCard()");

    let error = Reader::strict().read(&code).unwrap_err();
    assert_eq!((error.line, error.col), (1, 1));
    assert!(error.message.contains("xCard"));
}
