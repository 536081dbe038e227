use imperative_markup::formats::{ImperativeFormat, ImperativeOptions};
use imperative_markup::{translate_markup, Format, FormatError, FormatRegistry};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Error text without the trailing reader position.
fn without_position(error: &FormatError) -> String {
    static POSITION: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r" at line \d+, column \d+$").expect("valid regex for reader positions")
    });
    POSITION.replace(&error.to_string(), "").into_owned()
}

#[test]
fn test_html_to_imperative_and_back() {
    let registry = FormatRegistry::with_defaults();
    let source = "<div class=\"card\"><h1>Title</h1><p>Body <em>text</em></p></div>";

    let tree = registry.parse(source, "html").unwrap();
    let code = registry.serialize(&tree, "imperative").unwrap();
    assert_eq!(
        code,
        "HTML.div({class: \"card\"},\n\tHTML.h1(\"Title\"),\n\tHTML.p(\n\t\t\"Body \",\n\t\tHTML.em(\"text\"),\n\t),\n)"
    );

    let reread = registry.parse(&code, "imperative").unwrap();
    assert_eq!(reread, tree);
    assert_eq!(registry.serialize(&reread, "html").unwrap(), source);
}

#[test]
fn test_svg_to_imperative() {
    let registry = FormatRegistry::with_defaults();
    let tree = registry
        .parse("<circle cx=\"5\" r=\"2.5\"/><text>label</text>", "svg")
        .unwrap();
    assert_eq!(
        registry.serialize(&tree, "imperative").unwrap(),
        "SVG.circle({cx: 5, r: 2.5}),\nSVG.text(\"label\")"
    );
}

#[test]
fn test_translate_markup_by_format_name() {
    assert_eq!(
        translate_markup("<b>hi</b>", "html", "\t").unwrap(),
        "HTML.b(\"hi\")"
    );
    assert_eq!(
        translate_markup("SVG.g(HTML.p())", "imperative", "  ").unwrap(),
        "SVG.g(\n  HTML.p(),\n)"
    );
}

#[test]
fn test_json_inspection() {
    let registry = FormatRegistry::with_defaults();
    let tree = registry.parse("<p id=\"x\">hi</p>", "html").unwrap();
    let json = registry.serialize(&tree, "json").unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let p = &value["children"][0]["element"];
    assert_eq!(p["tag"], "p");
    assert_eq!(p["attributes"][0]["value"], "x");
    assert_eq!(p["children"][0]["text"], "hi");
}

#[test]
fn test_unsupported_operations() {
    let registry = FormatRegistry::with_defaults();
    assert!(matches!(
        registry.parse("{}", "json"),
        Err(FormatError::NotSupported(_))
    ));
    assert!(matches!(
        registry.parse("x", "markdown"),
        Err(FormatError::FormatNotFound(_))
    ));

    let tree = registry.parse("<p></p>", "html").unwrap();
    let mut options = HashMap::new();
    options.insert("pretty".to_string(), "true".to_string());
    assert!(matches!(
        registry.serialize_with_options(&tree, "html", &options),
        Err(FormatError::NotSupported(_))
    ));
}

#[test]
fn test_read_errors_carry_position() {
    let registry = FormatRegistry::with_defaults();
    let error = registry.parse("HTML.div(\n\t42 +\n)", "imperative").unwrap_err();
    assert_eq!(
        error,
        FormatError::ParseError("unexpected character '+' at line 2, column 5".to_string())
    );
}

#[test]
fn test_configured_imperative_format() {
    let format = ImperativeFormat::new(ImperativeOptions {
        indent: "    ".to_string(),
        strict: true,
    });
    let tree = format.parse("HTML.ul(HTML.li(\"one\"))").unwrap();
    assert_eq!(
        format.serialize(&tree).unwrap(),
        "HTML.ul(\n    HTML.li(\"one\"),\n)"
    );
    assert!(format.parse("HTML.myWidget()").is_err());
}

#[test]
fn test_read_error_messages() {
    let registry = FormatRegistry::with_defaults();
    let cases = [
        ("HTML.div(", "Parse error: unexpected end of input"),
        ("HTML.div(\"a\" \"b\")", "Parse error: expected ',' or ')'"),
        ("HTML.div({class \"a\"})", "Parse error: expected ':'"),
        ("HTML.div(`${x}`)", "Parse error: template interpolation is not supported"),
        ("HTML.div(\"open", "Parse error: unterminated string literal"),
        ("HTML.div(foo)", "Parse error: unexpected identifier 'foo'"),
        ("MATH.div()", "Parse error: unexpected identifier 'MATH'"),
    ];
    for (source, expected) in cases {
        let error = registry.parse(source, "imperative").unwrap_err();
        assert_eq!(without_position(&error), expected, "source: {source}");
    }
}
