use imperative_markup::formats::html::{serialize_fragment, serialize_node};
use imperative_markup::{
    args, attrs, Builder, CollectingSink, Diagnostic, Element, ElementFactory, Fragment, Node,
    Object, Value,
};
use std::cell::RefCell;
use std::rc::Rc;

fn markup(element: Element) -> String {
    serialize_node(&Node::from(element)).expect("serializes")
}

#[test]
fn test_nested_sequences_producers_and_iterators() {
    let html = ElementFactory::html();
    let div = html
        .create(
            "div",
            vec![
                Value::from(vec![Value::from(0), Value::from(vec![1])]),
                Value::from(2),
                Value::function(|| Value::from(3)),
                Value::iter(std::iter::once(Value::from(4))),
            ],
        )
        .unwrap();
    assert_eq!(markup(div), "<div>01234</div>");
}

#[test]
fn test_unrecognized_values_become_text() {
    let html = ElementFactory::html();
    let div = html
        .create(
            "div",
            vec![
                Value::Null,
                Value::Undefined,
                Value::from(0),
                Value::regex("^.*$"),
                Value::Object(Object::new()),
            ],
        )
        .unwrap();
    assert_eq!(markup(div), "<div>nullundefined0/^.*$/</div>");
}

#[test]
fn test_fragment_targets_stringify_bags() {
    let html = ElementFactory::html();
    let fragment = html.fragment(vec![Value::from("a"), Value::Object(Object::new())]);
    assert_eq!(serialize_fragment(&fragment).unwrap(), "a[object Object]");
}

#[test]
fn test_object_attribute_values_are_stringified() {
    let html = ElementFactory::html();
    let div = html
        .create("div", args![attrs! { "data-object" => Object::new() }])
        .unwrap();
    assert_eq!(markup(div), "<div data-object=\"[object Object]\"></div>");
}

#[test]
fn test_boolean_attributes() {
    let html = ElementFactory::html();
    let mut input = html
        .create("input", args![attrs! { "type" => "checkbox", "checked" => true }])
        .unwrap();
    assert_eq!(markup(input.clone()), "<input type=\"checkbox\" checked=\"\">");

    html.builder()
        .apply(&mut input, args![attrs! { "checked" => false }]);
    assert_eq!(markup(input), "<input type=\"checkbox\">");
}

#[test]
fn test_iterable_elements_are_appended_whole() {
    let html = ElementFactory::html();
    let option = html.create("option", args!["File"]).unwrap();
    let select = html.create("select", args![option]).unwrap();
    let div = html.create("div", args![select]).unwrap();
    assert_eq!(
        markup(div),
        "<div><select><option>File</option></select></div>"
    );
}

#[test]
fn test_style_map() {
    let html = ElementFactory::html();
    let div = html
        .create(
            "div",
            args![attrs! {
                "style" => attrs! { "font-family" => "sans-serif", "--my-variable" => 0 }
            }],
        )
        .unwrap();
    assert_eq!(
        div.attribute("style"),
        Some("font-family: sans-serif; --my-variable: 0;")
    );
    assert_eq!(div.style().get("fontFamily"), Some("sans-serif"));
}

#[test]
fn test_svg_elements() {
    let svg = ElementFactory::svg();
    let circle = svg
        .create("circle", args![attrs! { "cx" => 0, "cy" => 0, "r" => 1 }])
        .unwrap();
    let root = svg
        .create("svg", args![attrs! { "viewBox" => "0 0 1 1" }, circle])
        .unwrap();
    assert_eq!(
        markup(root),
        "<svg viewBox=\"0 0 1 1\"><circle cx=\"0\" cy=\"0\" r=\"1\"></circle></svg>"
    );
}

#[test]
fn test_class_from_iterator() {
    let html = ElementFactory::html();
    let classes = vec![Value::from("a"), Value::from("b")];
    let div = html
        .create("div", args![attrs! { "class" => Value::iter(classes) }])
        .unwrap();
    assert_eq!(div.attribute("class"), Some("a b"));
}

#[test]
fn test_invalid_class_is_reported() {
    let sink = Rc::new(CollectingSink::new());
    let html = ElementFactory::html().with_builder(Builder::with_sink(sink.clone()));
    let div = html
        .create("div", args![attrs! { "class" => 0 }])
        .unwrap();
    assert!(!div.has_attribute("class"));
    assert_eq!(
        sink.diagnostics()[0].to_string(),
        "Invalid class value \"0\" on DIV element."
    );
}

#[test]
fn test_apply_to_rejects_non_nodes() {
    let sink = Rc::new(CollectingSink::new());
    let builder = Builder::with_sink(sink.clone());

    let result = builder.apply_to(Value::from("not a node"), args!["x"]);
    assert_eq!(result.display_string(), "not a node");
    assert_eq!(sink.take(), vec![Diagnostic::InvalidApplyTarget]);

    let result = builder.apply_to(Value::from(Element::html("p")), args!["x"]);
    match result {
        Value::Node(Node::Element(p)) => assert_eq!(p.children(), &[Node::text("x")]),
        other => panic!("expected element, got {other:?}"),
    }
    assert!(sink.is_empty());
}

#[test]
fn test_producers_run_once_in_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let first = {
        let log = log.clone();
        Value::function(move || {
            log.borrow_mut().push("first");
            Value::from("1")
        })
    };
    let nested = {
        let log = log.clone();
        Value::function(move || {
            log.borrow_mut().push("outer");
            let log = log.clone();
            Value::function(move || {
                log.borrow_mut().push("inner");
                Value::from("2")
            })
        })
    };
    let last = {
        let log = log.clone();
        Value::function(move || {
            log.borrow_mut().push("last");
            Value::from("3")
        })
    };

    let mut fragment = Fragment::new();
    Builder::new().apply(&mut fragment, vec![first, nested, last]);

    assert_eq!(*log.borrow(), vec!["first", "outer", "inner", "last"]);
    assert_eq!(Node::from(fragment).text_content(), "123");
}

#[test]
fn test_uncalled_accessor_as_argument() {
    let html = ElementFactory::html();
    let hr = html.producer("hr").unwrap();
    let div = html.create("div", vec![hr]).unwrap();
    assert_eq!(markup(div), "<div><hr></div>");
}

#[test]
fn test_parse_joins_sources_with_commas() {
    let html = ElementFactory::html();
    let fragment = html.parse(&["<p>Hello", "<b>World</b></p>"]).unwrap();
    assert_eq!(
        serialize_fragment(&fragment).unwrap(),
        "<p>Hello,<b>World</b></p>"
    );
}

#[test]
fn test_parse_keeps_leading_whitespace() {
    let html = ElementFactory::html();
    let fragment = html.parse(&[" <b>x</b>"]).unwrap();
    assert_eq!(fragment.children()[0], Node::text(" "));
    assert_eq!(fragment.children()[1].as_element().map(Element::tag), Some("b"));

    let div = html.create("div", args!["a", fragment]).unwrap();
    assert_eq!(markup(div), "<div>a <b>x</b></div>");
}

#[test]
fn test_parsed_fragments_splice_into_elements() {
    let svg = ElementFactory::svg();
    let shapes = svg
        .parse(&["<svg viewBox='0 0 1 1'><circle cx='0'/></svg><svg/>"])
        .unwrap();
    let html = ElementFactory::html();
    let div = html.create("div", args![shapes]).unwrap();
    assert_eq!(div.children().len(), 2);
}

#[test]
fn test_style_map_and_style_string_agree() {
    let html = ElementFactory::html();
    let from_map = html
        .create("div", args![attrs! { "style" => attrs! { "fontFamily" => "sans-serif" } }])
        .unwrap();
    let from_text = html
        .create("div", args![attrs! { "style" => "font-family: sans-serif;" }])
        .unwrap();
    assert_eq!(from_map.attribute("style"), from_text.attribute("style"));
    assert_eq!(markup(from_map), markup(from_text));
}

#[test]
fn test_later_bags_override_earlier_ones() {
    let html = ElementFactory::html();
    let a = html
        .create(
            "a",
            args![
                attrs! { "href" => "/old", "hidden" => true },
                "link",
                attrs! { "href" => "/new", "hidden" => false },
            ],
        )
        .unwrap();
    assert_eq!(markup(a), "<a href=\"/new\">link</a>");
}

#[test]
fn test_nested_sequence_of_elements() {
    let html = ElementFactory::html();
    let intro = html.create("p", args!["Intro"]).unwrap();
    let body = html.create("p", args!["Body"]).unwrap();
    let div = html
        .create("div", vec![Value::from(vec![intro, body])])
        .unwrap();
    assert_eq!(markup(div), "<div><p>Intro</p><p>Body</p></div>");
}

#[test]
fn test_built_tree_translates_back() {
    let html = ElementFactory::html();
    let pre = html
        .create("pre", args![attrs! { "class" => "code" }, "line one\n\tline two"])
        .unwrap();
    assert_eq!(
        imperative_markup::translate(&Node::from(pre), "\t"),
        "HTML.pre({class: \"code\"},\n\t`line one\n\tline two`,\n)"
    );
}
