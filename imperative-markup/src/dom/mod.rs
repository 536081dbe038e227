//! Element tree
//!
//!     The builder writes into and the translator reads from this tree. It is a plain owned
//!     tree: `Node` is a closed enum of elements, text and fragments, an element owns its
//!     children, and appending a fragment moves the fragment's children into the parent.
//!
//!     Parsing and markup serialization are not done here; see `formats::html` and
//!     `formats::svg`.

mod node;
mod style;

pub use node::{
    Attribute, Element, Fragment, Namespace, Node, ParentNode, HTML_NAMESPACE, SVG_NAMESPACE,
};
pub use style::{is_known_property, property_name, StyleDeclaration};
