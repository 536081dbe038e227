//! Format implementations
//!
//! Each format has its own module with a `Format` implementation:
//!
//!     html         html5ever parse + serialize
//!     svg          roxmltree parse, html5ever serialize
//!     imperative   reader parse, translator serialize
//!     json         serde_json dump (serialize only)

pub mod html;
pub mod imperative;
pub mod json;
pub mod svg;

pub use html::HtmlFormat;
pub use imperative::{ImperativeFormat, ImperativeOptions};
pub use json::JsonFormat;
pub use svg::SvgFormat;
