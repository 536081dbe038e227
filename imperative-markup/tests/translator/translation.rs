use imperative_markup::{
    translate, translate_fragment, translate_html, translate_svg, Element, Fragment, Namespace,
    Node, ParentNode, DEFAULT_INDENT,
};
use insta::assert_snapshot;

fn html(source: &str) -> String {
    translate_html(source, DEFAULT_INDENT).expect("parses")
}

#[test]
fn test_empty_element() {
    assert_eq!(html("<div></div>"), "HTML.div()");
}

#[test]
fn test_svg_fragment() {
    assert_eq!(translate_svg("<g></g>", DEFAULT_INDENT).unwrap(), "SVG.g()");
}

#[test]
fn test_text_node() {
    let node = Node::text("Hello World!");
    assert_eq!(translate(&node, DEFAULT_INDENT), "\"Hello World!\"");
    assert_eq!(html("Hello World!"), "\"Hello World!\"");
}

#[test]
fn test_leading_space_survives_parsing() {
    assert_eq!(html(" Hello"), "\" Hello\"");
    assert_eq!(html(" Hello <b>x</b>"), "\" Hello \",\nHTML.b(\"x\")");
}

#[test]
fn test_fragment_items() {
    let mut p = Element::html("p");
    p.append_child(Node::text("Hello World!"));
    let fragment = Fragment::with_children(vec![Element::html("div").into(), p.into()]);
    assert_eq!(
        translate_fragment(&fragment, DEFAULT_INDENT),
        "HTML.div(),\nHTML.p(\"Hello World!\")"
    );
    assert_eq!(
        translate(&Node::from(fragment), DEFAULT_INDENT),
        "HTML.div(),\nHTML.p(\"Hello World!\")"
    );
}

#[test]
fn test_nested_elements() {
    assert_eq!(html("<div><div></div></div>"), "HTML.div(\n\tHTML.div(),\n)");
    assert_eq!(
        translate_html("<div><div></div></div>", "  ").unwrap(),
        "HTML.div(\n  HTML.div(),\n)"
    );
}

#[test]
fn test_attributes_with_text() {
    assert_eq!(
        html("<div class=\"container\">Hello World!</div>"),
        "HTML.div({class: \"container\"},\n\t\"Hello World!\",\n)"
    );
}

#[test]
fn test_mixed_children() {
    assert_eq!(
        html("<div>Hello <b>Awesome</b> World!</div>"),
        "HTML.div(\n\t\"Hello \",\n\tHTML.b(\"Awesome\"),\n\t\" World!\",\n)"
    );
}

#[test]
fn test_svg_inside_html() {
    assert_eq!(
        html("<div><svg><a></a></svg><a></a></div>"),
        "HTML.div(\n\tSVG.svg(\n\t\tSVG.a(),\n\t),\n\tHTML.a(),\n)"
    );
}

#[test]
fn test_multiline_text() {
    assert_eq!(
        html("<p>Hello\n\tWorld!</p>"),
        "HTML.p(\n\t`Hello\n\tWorld!`,\n)"
    );
}

#[test]
fn test_character_entities() {
    assert_eq!(html("<p>&lt; &amp; &gt;</p>"), "HTML.p(\"< & >\")");
}

#[test]
fn test_escapes_double_quotes() {
    assert_eq!(
        html("<p>\"Hello World!\"</p>"),
        "HTML.p(\"\\\"Hello World!\\\"\")"
    );
}

#[test]
fn test_escapes_back_ticks() {
    assert_eq!(
        html("<p>Hello\n\t`Awesome` World!</p>"),
        "HTML.p(\n\t`Hello\n\t\\`Awesome\\` World!`,\n)"
    );
}

#[test]
fn test_element_names() {
    assert_eq!(html("<custom-name></custom-name>"), "HTML.customName()");
    assert_eq!(html("<var></var>"), "HTML[\"var\"]()");
    assert_eq!(
        html("<svg><switch></switch></svg>"),
        "SVG.svg(\n\tSVG[\"switch\"](),\n)"
    );
    assert_eq!(
        html("<svg><color-profile></color-profile></svg>"),
        "SVG.svg(\n\tSVG.color_profile(),\n)"
    );
    assert_eq!(
        html("<svg><linearGradient></linearGradient></svg>"),
        "SVG.svg(\n\tSVG.linearGradient(),\n)"
    );
}

#[test]
fn test_invalid_identifier_element_name() {
    let node = Node::from(Element::html("fake*"));
    assert_eq!(translate(&node, DEFAULT_INDENT), "HTML[\"fake*\"]()");
}

#[test]
fn test_attribute_forms() {
    assert_eq!(
        html("<div data-test=\"test\"></div>"),
        "HTML.div({\"data-test\": \"test\"})"
    );
    assert_eq!(html("<div hidden></div>"), "HTML.div({hidden: true})");
    assert_eq!(html("<input value=\"1\">"), "HTML.input({value: 1})");
    assert_eq!(
        html("<div onclick=\"alert('test')\"></div>"),
        "HTML.div({onclick: \"alert('test')\"})"
    );
    assert_eq!(html("<label for=\"test\"></div>"), "HTML.label({for: \"test\"})");
}

#[test]
fn test_multiple_attributes_keep_order() {
    assert_eq!(
        html("<div class=\"container\" style=\"z-index: 1;\" value=\"1\" hidden onclick=\"alert('test')\"></div>"),
        "HTML.div({class: \"container\", style: \"z-index: 1;\", value: 1, hidden: true, onclick: \"alert('test')\"})"
    );
}

#[test]
fn test_whitespace_text_is_skipped() {
    assert_eq!(html("\n\t <div>\n\t </div>\n\t "), "HTML.div()");
}

#[test]
fn test_extra_whitespace_is_trimmed() {
    assert_eq!(
        html("<div>\n\t   Hello World!\n\t </div>"),
        "HTML.div(\" Hello World! \")"
    );
}

#[test]
fn test_unrecognized_namespace() {
    assert_eq!(
        html("<div><math></math></div>"),
        "HTML.div(\n\t<Unrecognized node type>,\n)"
    );

    let mut div = Element::html("div");
    div.append_child(Node::from(Element::new(
        "annotation",
        Namespace::Other("urn:example".to_string()),
    )));
    div.append_child(Node::text("after"));
    assert_eq!(
        translate(&Node::from(div), DEFAULT_INDENT),
        "HTML.div(\n\t<Unrecognized node type>,\n\t\"after\",\n)"
    );
}

#[test]
fn test_unspecified_attributes_are_omitted() {
    let mut input = Element::html("input");
    input.set_default_attribute("type", "text");
    input.set_attribute("name", "q");
    assert_eq!(
        translate(&Node::from(input), DEFAULT_INDENT),
        "HTML.input({name: \"q\"})"
    );
}

#[test]
fn test_translation_does_not_mutate() {
    let fragment = imperative_markup::formats::html::parse_html("<p>a<b>b</b></p>").unwrap();
    let before = fragment.clone();
    let _ = translate_fragment(&fragment, DEFAULT_INDENT);
    assert_eq!(fragment, before);
}

#[test]
fn test_single_line_snapshots() {
    assert_snapshot!(html("<a href=\"/docs?page=2\" target=\"_blank\"></a>"), @r#"HTML.a({href: "/docs?page=2", target: "_blank"})"#);
    assert_snapshot!(html("<meter value=\"2\" max=\"1.5\"></meter>"), @"HTML.meter({value: 2, max: 1.5})");
    assert_snapshot!(html("<my-card-header></my-card-header>"), @"HTML.myCardHeader()");
}

#[test]
fn test_numeric_lookalikes_stay_quoted() {
    assert_snapshot!(html("<input value=\"+1\" min=\"1.0\" max=\"1e2\" step=\"0.5\">"), @r#"HTML.input({value: "+1", min: "1.0", max: "1e2", step: 0.5})"#);
}
