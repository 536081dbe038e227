use imperative_markup::{classify, ArgumentKind, Builder, Element, Fragment, Node, Object, Value};
use proptest::prelude::*;

/// A cloneable description of a builder argument.
#[derive(Debug, Clone)]
enum Seed {
    Undefined,
    Null,
    Bool(bool),
    Number(i32),
    Text(String),
    Element(String),
    Fragment(Vec<String>),
    Producer(Box<Seed>),
    Array(Vec<Seed>),
    Iter(Vec<Seed>),
    Bag,
    Regex(String),
}

impl Seed {
    fn value(&self) -> Value {
        match self {
            Seed::Undefined => Value::Undefined,
            Seed::Null => Value::Null,
            Seed::Bool(flag) => Value::Bool(*flag),
            Seed::Number(number) => Value::from(*number),
            Seed::Text(text) => Value::from(text.as_str()),
            Seed::Element(tag) => Value::from(Element::html(tag.as_str())),
            Seed::Fragment(texts) => Value::from(Fragment::with_children(
                texts.iter().map(Node::text).collect(),
            )),
            Seed::Producer(inner) => {
                let inner = (**inner).clone();
                Value::function(move || inner.value())
            }
            Seed::Array(items) => Value::Array(items.iter().map(Seed::value).collect()),
            Seed::Iter(items) => Value::iter(items.iter().map(Seed::value).collect::<Vec<_>>()),
            Seed::Bag => Value::Object(Object::new()),
            Seed::Regex(source) => Value::regex(source.as_str()),
        }
    }
}

fn leaf() -> impl Strategy<Value = Seed> {
    prop_oneof![
        Just(Seed::Undefined),
        Just(Seed::Null),
        any::<bool>().prop_map(Seed::Bool),
        any::<i32>().prop_map(Seed::Number),
        "[a-z ]{0,6}".prop_map(Seed::Text),
        prop::sample::select(vec!["div", "span", "select", "form", "p"])
            .prop_map(|tag| Seed::Element(tag.to_string())),
        prop::collection::vec("[a-z]{1,4}", 0..3).prop_map(Seed::Fragment),
        Just(Seed::Bag),
        "[a-z.*^$]{1,4}".prop_map(Seed::Regex),
    ]
}

fn seed() -> impl Strategy<Value = Seed> {
    leaf().prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(|seed| Seed::Producer(Box::new(seed))),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Seed::Array),
            prop::collection::vec(inner, 0..4).prop_map(Seed::Iter),
        ]
    })
}

proptest! {
    #[test]
    fn test_classification_is_deterministic(seed in seed(), accepts in any::<bool>()) {
        let value = seed.value();
        prop_assert_eq!(classify(&value, accepts), classify(&value, accepts));
    }

    #[test]
    fn test_nodes_are_always_structured(
        tag in prop::sample::select(vec!["div", "select", "form", "input"]),
        accepts in any::<bool>(),
    ) {
        let element = Value::from(Element::html(tag));
        prop_assert_eq!(classify(&element, accepts), ArgumentKind::StructuredNode);
        let fragment = Value::from(Fragment::new());
        prop_assert_eq!(classify(&fragment, accepts), ArgumentKind::StructuredNode);
    }

    #[test]
    fn test_bags_need_an_element_target(accepts in any::<bool>()) {
        let expected = if accepts {
            ArgumentKind::AttributeBag
        } else {
            ArgumentKind::Unrecognized
        };
        prop_assert_eq!(classify(&Value::Object(Object::new()), accepts), expected);
    }

    #[test]
    fn test_each_string_is_one_text_child(texts in prop::collection::vec(".{0,8}", 0..6)) {
        let mut div = Element::html("div");
        let args = texts.iter().map(|text| Value::from(text.as_str())).collect();
        Builder::new().apply(&mut div, args);

        prop_assert_eq!(div.children().len(), texts.len());
        for (child, text) in div.children().iter().zip(&texts) {
            prop_assert_eq!(child.as_text(), Some(text.as_str()));
        }
    }

    #[test]
    fn test_flattened_text_matches_display_order(seeds in prop::collection::vec(seed(), 0..5)) {
        // Every argument contributes its text to the fragment in argument order,
        // whether it is appended, expanded or stringified.
        let mut fragment = Fragment::new();
        Builder::new().apply(&mut fragment, seeds.iter().map(Seed::value).collect());
        let built = Node::from(fragment).text_content();
        let expected: String = seeds.iter().map(expected_text).collect();
        prop_assert_eq!(built, expected);
    }
}

fn expected_text(seed: &Seed) -> String {
    match seed {
        Seed::Element(_) => String::new(),
        Seed::Fragment(texts) => texts.concat(),
        Seed::Producer(inner) => expected_text(inner),
        Seed::Array(items) | Seed::Iter(items) => items.iter().map(expected_text).collect(),
        Seed::Bag => "[object Object]".to_string(),
        other => other.value().display_string(),
    }
}
