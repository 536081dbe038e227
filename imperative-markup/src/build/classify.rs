//! Argument classification.
//!
//! The order of the checks is the dispatch policy. A value may satisfy several
//! capability predicates at once (a `select` element is both a node and
//! iterable, a string is both text and iterable); the first match wins.

use crate::value::Value;

/// How the builder treats one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    StructuredNode,
    PlainString,
    LazyProducer,
    Sequence,
    GeneralIterable,
    AttributeBag,
    Unrecognized,
}

/// Classifies one argument. `accepts_attributes` is true for element
/// targets; fragments take no attributes, so bags offered to them fall
/// through to [`ArgumentKind::Unrecognized`].
pub fn classify(value: &Value, accepts_attributes: bool) -> ArgumentKind {
    if value.is_node() {
        ArgumentKind::StructuredNode
    } else if value.is_text() {
        ArgumentKind::PlainString
    } else if value.is_invocable() {
        ArgumentKind::LazyProducer
    } else if value.is_sequence() {
        ArgumentKind::Sequence
    } else if value.is_iterable() {
        ArgumentKind::GeneralIterable
    } else if accepts_attributes && value.is_plain_object() {
        ArgumentKind::AttributeBag
    } else {
        ArgumentKind::Unrecognized
    }
}

/// How one attribute-bag entry is written, apart from the `class` and
/// `style` keys which have their own rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeValueKind {
    StringValue,
    BooleanFlag,
    StyleMap,
    CallbackValue,
    GenericValue,
}

pub fn classify_attribute_value(value: &Value) -> AttributeValueKind {
    match value {
        Value::Str(_) => AttributeValueKind::StringValue,
        Value::Bool(_) => AttributeValueKind::BooleanFlag,
        Value::Object(_) => AttributeValueKind::StyleMap,
        Value::Function(_) => AttributeValueKind::CallbackValue,
        _ => AttributeValueKind::GenericValue,
    }
}
