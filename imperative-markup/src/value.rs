//! Builder arguments.
//!
//! A [`Value`] is one raw argument handed to the builder. Arguments are
//! heterogeneous on purpose: strings, nodes, nested lists, lazy producers,
//! one-shot iterators, attribute bags and anything else all travel through the
//! same argument list. The capability predicates on [`Value`] answer what a
//! value can do; `build::classify` turns those answers into a decision.

use crate::dom::{Element, Fragment, Node};
use std::fmt;
use std::rc::Rc;

/// A zero-argument function returning a [`Value`].
#[derive(Clone)]
pub struct Producer(Rc<dyn Fn() -> Value>);

impl Producer {
    pub fn new(f: impl Fn() -> Value + 'static) -> Self {
        Producer(Rc::new(f))
    }

    pub fn call(&self) -> Value {
        (self.0)()
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Producer(..)")
    }
}

impl PartialEq for Producer {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

/// A one-shot iterator. Draining it consumes it.
pub struct Drain(Box<dyn Iterator<Item = Value>>);

impl Drain {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
    {
        Drain(Box::new(items.into_iter()))
    }

    pub fn drain(self) -> Vec<Value> {
        self.0.collect()
    }
}

impl fmt::Debug for Drain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Drain(..)")
    }
}

/// A plain keyed mapping. Keys keep insertion order; re-inserting a key
/// replaces its value in place.
#[derive(Debug, Default)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

/// One builder argument.
#[derive(Debug)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Node(Node),
    Function(Producer),
    Array(Vec<Value>),
    Iter(Drain),
    Object(Object),
    /// A pattern-like object; displays as `/source/`.
    Regex(String),
}

impl Value {
    pub fn function(f: impl Fn() -> Value + 'static) -> Self {
        Value::Function(Producer::new(f))
    }

    pub fn iter<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
    {
        Value::Iter(Drain::new(items))
    }

    pub fn regex(source: impl Into<String>) -> Self {
        Value::Regex(source.into())
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Value::Node(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    pub fn is_invocable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Finite indexable collection.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Anything that can be iterated, including strings, sequences and
    /// iterable nodes.
    pub fn is_iterable(&self) -> bool {
        match self {
            Value::Str(_) | Value::Array(_) | Value::Iter(_) => true,
            Value::Node(node) => node.is_iterable(),
            _ => false,
        }
    }

    pub fn is_plain_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The display string of the value, following host string conversion.
    pub fn display_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(flag) => flag.to_string(),
            Value::Number(number) => number_to_string(*number),
            Value::Str(text) => text.clone(),
            Value::Node(node) => node.display_name().to_string(),
            Value::Function(_) => "function () { [native code] }".to_string(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Undefined | Value::Null => String::new(),
                    other => other.display_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Iter(_) => "[object Iterator]".to_string(),
            Value::Object(_) => "[object Object]".to_string(),
            Value::Regex(source) => format!("/{source}/"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

/// ECMAScript `Number::toString` for a double.
pub fn number_to_string(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_string();
    }
    if number == 0.0 {
        return "0".to_string();
    }
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if number < 0.0 {
        return format!("-{}", number_to_string(-number));
    }

    // Shortest round-trip digits, then ECMAScript placement rules.
    let scientific = format!("{number:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return scientific,
    };
    let k = digits.len() as i32;
    let n = exponent + 1;

    if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (integral, fractional) = digits.split_at(n as usize);
        format!("{integral}.{fractional}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let magnitude = (n - 1).abs();
        if k == 1 {
            format!("{digits}e{sign}{magnitude}")
        } else {
            let (first, rest) = digits.split_at(1);
            format!("{first}.{rest}e{sign}{magnitude}")
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Str(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Str(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Value::Str(text.clone())
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(number: $ty) -> Self {
                Value::Number(number as f64)
            }
        })*
    };
}

number_from!(f32, i32, i64, u32, u64, usize);

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        Value::Node(Node::Element(element))
    }
}

impl From<Fragment> for Value {
    fn from(fragment: Fragment) -> Self {
        Value::Node(Node::Fragment(fragment))
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl From<Producer> for Value {
    fn from(producer: Producer) -> Self {
        Value::Function(producer)
    }
}

impl From<Drain> for Value {
    fn from(drain: Drain) -> Self {
        Value::Iter(drain)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Builds an argument list, converting each item with `Value::from`.
///
/// ```ignore
/// let args = args!["Hello ", Element::html("b"), vec![1, 2]];
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),+]
    };
}

/// Builds an attribute bag as a [`Value::Object`].
///
/// ```ignore
/// let bag = attrs! { "class" => "container", "hidden" => true };
/// ```
#[macro_export]
macro_rules! attrs {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut bag = $crate::Object::new();
        $(bag.insert($key, $value);)*
        $crate::Value::Object(bag)
    }};
}
