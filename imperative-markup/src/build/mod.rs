//! Tree builder
//!
//!     Applies a flat argument list to an element or fragment. Each argument is classified
//!     (see `classify`) and then appended as a child, expanded, invoked, or merged into the
//!     attributes. Nothing here fails: a value the builder cannot use is reported to the
//!     diagnostic sink and skipped, or appended as its display text.
//!
//!     Producers are invoked exactly once, when they are reached, left to right and depth
//!     first. Iterators are drained at the same point.

mod classify;

pub use classify::{classify, classify_attribute_value, ArgumentKind, AttributeValueKind};

use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::dom::{Element, Fragment, Node, ParentNode};
use crate::value::{Object, Value};
use std::rc::Rc;

/// Applies argument lists to tree nodes, reporting to a diagnostic sink.
#[derive(Clone)]
pub struct Builder {
    sink: Rc<dyn DiagnosticSink>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder").finish_non_exhaustive()
    }
}

impl Builder {
    /// A builder reporting through [`LogSink`].
    pub fn new() -> Self {
        Self::with_sink(Rc::new(LogSink))
    }

    pub fn with_sink(sink: Rc<dyn DiagnosticSink>) -> Self {
        Builder { sink }
    }

    pub fn sink(&self) -> &Rc<dyn DiagnosticSink> {
        &self.sink
    }

    /// Applies `args` to `target` and returns the target.
    pub fn apply<'t, T>(&self, target: &'t mut T, args: Vec<Value>) -> &'t mut T
    where
        T: ParentNode + ?Sized,
    {
        for arg in args {
            self.apply_one(target, arg);
        }
        target
    }

    fn apply_one<T>(&self, target: &mut T, arg: Value)
    where
        T: ParentNode + ?Sized,
    {
        let accepts_attributes = target.as_element_mut().is_some();
        match (classify(&arg, accepts_attributes), arg) {
            (ArgumentKind::StructuredNode, Value::Node(node)) => target.append_child(node),
            (ArgumentKind::PlainString, Value::Str(text)) => target.append_child(Node::Text(text)),
            (ArgumentKind::LazyProducer, Value::Function(producer)) => {
                self.apply_one(target, producer.call())
            }
            (ArgumentKind::Sequence, Value::Array(items)) => {
                self.apply(target, items);
            }
            (ArgumentKind::GeneralIterable, Value::Iter(drain)) => {
                self.apply(target, drain.drain());
            }
            (ArgumentKind::AttributeBag, Value::Object(bag)) => {
                if let Some(element) = target.as_element_mut() {
                    self.merge_attributes(element, bag);
                }
            }
            (_, other) => target.append_child(Node::Text(other.display_string())),
        }
    }

    fn merge_attributes(&self, element: &mut Element, bag: Object) {
        for (key, value) in bag {
            match key.as_str() {
                "class" => self.merge_class(element, value),
                "style" => merge_style(element, value),
                _ => match (classify_attribute_value(&value), value) {
                    (AttributeValueKind::CallbackValue, Value::Function(callback)) => {
                        element.set_property(key, callback)
                    }
                    (AttributeValueKind::BooleanFlag, Value::Bool(true)) => {
                        element.set_attribute(key, "")
                    }
                    (AttributeValueKind::BooleanFlag, Value::Bool(false)) => {
                        element.remove_attribute(&key);
                    }
                    (_, other) => element.set_attribute(key, other.display_string()),
                },
            }
        }
    }

    fn merge_class(&self, element: &mut Element, value: Value) {
        let class = match value {
            Value::Str(text) => text,
            Value::Array(items) => join_display(items),
            Value::Iter(drain) => join_display(drain.drain()),
            other => {
                self.sink.report(Diagnostic::InvalidClassValue {
                    value: other.display_string(),
                    tag_name: element.tag_name(),
                });
                return;
            }
        };
        element.set_attribute("class", class);
    }

    /// Applies `args` to a value that should be an element or fragment. Any
    /// other value is reported and handed back unchanged.
    pub fn apply_to(&self, target: Value, args: Vec<Value>) -> Value {
        match target {
            Value::Node(Node::Element(mut element)) => {
                self.apply(&mut element, args);
                Value::Node(Node::Element(element))
            }
            Value::Node(Node::Fragment(mut fragment)) => {
                self.apply(&mut fragment, args);
                Value::Node(Node::Fragment(fragment))
            }
            other => {
                self.sink.report(Diagnostic::InvalidApplyTarget);
                other
            }
        }
    }

    /// Replaces the node at `context` (a child-index path from `root`) with
    /// the nodes built from `args`.
    ///
    /// Without a context, or when the path does not address an attached
    /// node, the call is reported and nothing changes.
    pub fn replace_with(&self, root: &mut Node, context: Option<&[usize]>, args: Vec<Value>) {
        let Some(path) = context else {
            self.sink.report(Diagnostic::MissingReplaceContext);
            return;
        };
        let Some((&index, parent_path)) = path.split_last() else {
            self.sink.report(Diagnostic::DetachedReplaceTarget);
            return;
        };
        let Some(siblings) = descend(root, parent_path).filter(|siblings| index < siblings.len())
        else {
            self.sink.report(Diagnostic::DetachedReplaceTarget);
            return;
        };

        let mut replacement = Fragment::new();
        self.apply(&mut replacement, args);
        siblings.splice(index..=index, replacement.into_children());
    }
}

fn descend<'n>(root: &'n mut Node, path: &[usize]) -> Option<&'n mut Vec<Node>> {
    let mut children = root.children_mut()?;
    for &index in path {
        children = children.get_mut(index)?.children_mut()?;
    }
    Some(children)
}

fn join_display(items: Vec<Value>) -> String {
    items
        .iter()
        .map(Value::display_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn merge_style(element: &mut Element, value: Value) {
    let Value::Object(declarations) = value else {
        element.set_attribute("style", value.display_string());
        return;
    };
    for (key, value) in declarations {
        let value = match value {
            Value::Null | Value::Undefined => String::new(),
            other => other.display_string(),
        };
        if !element.set_style(&key, &value) {
            element.set_style_property(&key, &value);
        }
    }
}
