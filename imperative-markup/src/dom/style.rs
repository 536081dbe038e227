//! Inline style declarations backing the `style` attribute.
//!
//! A [`StyleDeclaration`] is parsed from and serialized back into the `style`
//! attribute text, so the attribute is always the single source of truth. Two
//! ways of writing into it exist, mirroring the DOM:
//!
//! - [`StyleDeclaration::set`] assigns a recognized CSS property by its
//!   camelCase or kebab-case name (`fontFamily`, `font-family`, `cssFloat`).
//! - [`StyleDeclaration::set_property`] registers a property by its CSS name,
//!   which is how custom properties (`--my-variable`) get in.
//!
//! Unknown names are ignored by both, the same way a browser ignores them.

use std::fmt;

/// CSS properties recognized as direct style keys, in kebab-case.
const KNOWN_PROPERTIES: &[&str] = &[
    "accent-color",
    "align-content",
    "align-items",
    "align-self",
    "all",
    "animation",
    "animation-delay",
    "animation-direction",
    "animation-duration",
    "animation-fill-mode",
    "animation-iteration-count",
    "animation-name",
    "animation-play-state",
    "animation-timing-function",
    "appearance",
    "aspect-ratio",
    "backdrop-filter",
    "backface-visibility",
    "background",
    "background-attachment",
    "background-blend-mode",
    "background-clip",
    "background-color",
    "background-image",
    "background-origin",
    "background-position",
    "background-repeat",
    "background-size",
    "block-size",
    "border",
    "border-bottom",
    "border-bottom-color",
    "border-bottom-left-radius",
    "border-bottom-right-radius",
    "border-bottom-style",
    "border-bottom-width",
    "border-collapse",
    "border-color",
    "border-image",
    "border-left",
    "border-left-color",
    "border-left-style",
    "border-left-width",
    "border-radius",
    "border-right",
    "border-right-color",
    "border-right-style",
    "border-right-width",
    "border-spacing",
    "border-style",
    "border-top",
    "border-top-color",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-top-style",
    "border-top-width",
    "border-width",
    "bottom",
    "box-shadow",
    "box-sizing",
    "caption-side",
    "caret-color",
    "clear",
    "clip",
    "clip-path",
    "clip-rule",
    "color",
    "column-count",
    "column-gap",
    "column-rule",
    "column-width",
    "columns",
    "contain",
    "content",
    "counter-increment",
    "counter-reset",
    "cursor",
    "direction",
    "display",
    "empty-cells",
    "fill",
    "fill-opacity",
    "fill-rule",
    "filter",
    "flex",
    "flex-basis",
    "flex-direction",
    "flex-flow",
    "flex-grow",
    "flex-shrink",
    "flex-wrap",
    "float",
    "font",
    "font-family",
    "font-feature-settings",
    "font-kerning",
    "font-size",
    "font-stretch",
    "font-style",
    "font-variant",
    "font-weight",
    "gap",
    "grid",
    "grid-area",
    "grid-auto-columns",
    "grid-auto-flow",
    "grid-auto-rows",
    "grid-column",
    "grid-column-end",
    "grid-column-start",
    "grid-row",
    "grid-row-end",
    "grid-row-start",
    "grid-template",
    "grid-template-areas",
    "grid-template-columns",
    "grid-template-rows",
    "height",
    "hyphens",
    "inline-size",
    "inset",
    "isolation",
    "justify-content",
    "justify-items",
    "justify-self",
    "left",
    "letter-spacing",
    "line-height",
    "list-style",
    "list-style-image",
    "list-style-position",
    "list-style-type",
    "margin",
    "margin-bottom",
    "margin-left",
    "margin-right",
    "margin-top",
    "marker",
    "mask",
    "max-height",
    "max-width",
    "min-height",
    "min-width",
    "mix-blend-mode",
    "object-fit",
    "object-position",
    "opacity",
    "order",
    "outline",
    "outline-color",
    "outline-offset",
    "outline-style",
    "outline-width",
    "overflow",
    "overflow-wrap",
    "overflow-x",
    "overflow-y",
    "padding",
    "padding-bottom",
    "padding-left",
    "padding-right",
    "padding-top",
    "perspective",
    "place-content",
    "place-items",
    "pointer-events",
    "position",
    "quotes",
    "resize",
    "right",
    "rotate",
    "row-gap",
    "scale",
    "scroll-behavior",
    "stop-color",
    "stop-opacity",
    "stroke",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-opacity",
    "stroke-width",
    "tab-size",
    "table-layout",
    "text-align",
    "text-anchor",
    "text-decoration",
    "text-indent",
    "text-overflow",
    "text-shadow",
    "text-transform",
    "top",
    "transform",
    "transform-origin",
    "transition",
    "transition-delay",
    "transition-duration",
    "transition-property",
    "transition-timing-function",
    "translate",
    "user-select",
    "vertical-align",
    "visibility",
    "white-space",
    "width",
    "will-change",
    "word-break",
    "word-spacing",
    "writing-mode",
    "z-index",
];

/// Whether `name` (kebab-case) is a recognized CSS property.
pub fn is_known_property(name: &str) -> bool {
    KNOWN_PROPERTIES.binary_search(&name).is_ok()
}

/// Resolves a style key written in camelCase or kebab-case to the CSS
/// property it names, if that property is recognized.
pub fn property_name(key: &str) -> Option<String> {
    if key == "cssFloat" {
        return Some("float".to_string());
    }
    let name = if key.contains('-') {
        key.to_string()
    } else {
        camel_to_kebab(key)
    };
    is_known_property(&name).then_some(name)
}

fn camel_to_kebab(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

/// Ordered list of `property: value` declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    declarations: Vec<(String, String)>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `style` attribute text. Malformed declarations are skipped.
    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        for declaration in css_text.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let (name, value) = (name.trim(), value.trim());
            if name.is_empty() || value.is_empty() {
                continue;
            }
            style.put(name, value);
        }
        style
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Looks a property up by its CSS name or by a recognized style key.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = property_name(name).unwrap_or_else(|| name.to_string());
        self.declarations
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Assigns a recognized property by style key. An empty value removes
    /// the declaration. Returns `false` when the key is not recognized.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        match property_name(key) {
            Some(name) => {
                self.assign(name, value);
                true
            }
            None => false,
        }
    }

    /// Registers a property by CSS name. Accepts custom properties (`--x`)
    /// and recognized kebab-case names.
    pub fn set_property(&mut self, name: &str, value: &str) -> bool {
        if is_custom_property(name) || is_known_property(name) {
            self.assign(name.to_string(), value);
            true
        } else {
            false
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let name = property_name(name).unwrap_or_else(|| name.to_string());
        let position = self
            .declarations
            .iter()
            .position(|(existing, _)| *existing == name)?;
        Some(self.declarations.remove(position).1)
    }

    /// Serialized form as stored in the `style` attribute.
    pub fn css_text(&self) -> String {
        self.to_string()
    }

    fn assign(&mut self, name: String, value: &str) {
        if value.is_empty() {
            self.remove(&name);
        } else {
            self.put(&name, value);
        }
    }

    fn put(&mut self, name: &str, value: &str) {
        match self
            .declarations
            .iter_mut()
            .find(|(existing, _)| existing == name)
        {
            Some(entry) => entry.1 = value.to_string(),
            None => self
                .declarations
                .push((name.to_string(), value.to_string())),
        }
    }
}

fn is_custom_property(name: &str) -> bool {
    name.len() > 2 && name.starts_with("--")
}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.declarations.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}: {value};")?;
        }
        Ok(())
    }
}
