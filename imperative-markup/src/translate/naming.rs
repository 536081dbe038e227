//! Tag names to accessor identifiers.

/// Reserved and future-reserved words, sorted.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract",
    "arguments",
    "await",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "double",
    "else",
    "enum",
    "eval",
    "export",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "function",
    "goto",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "int",
    "interface",
    "let",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "volatile",
    "while",
    "with",
    "yield",
];

/// Naming convention of the namespace a tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentCase {
    /// HTML: kebab-case tags become camelCase accessors.
    Markup,
    /// SVG: tags are already camelCase; hyphens become underscores.
    VectorGraphics,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub text: String,
    pub is_valid_bare_identifier: bool,
}

/// Converts a raw tag name into an accessor identifier and reports whether
/// it can be written in dotted form.
pub fn to_identifier(raw: &str, case: IdentCase) -> Identifier {
    let text = match case {
        IdentCase::Markup => camelize(raw),
        IdentCase::VectorGraphics => raw.replace('-', "_"),
    };
    let is_valid_bare_identifier = is_bare_identifier_syntax(&text) && !is_reserved(&text);
    Identifier {
        text,
        is_valid_bare_identifier,
    }
}

/// `-x` becomes `X` for lowercase ASCII `x`; any other `-` becomes `_`.
fn camelize(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '-' {
            text.push(c);
            continue;
        }
        match chars.peek() {
            Some(next) if next.is_ascii_lowercase() => {
                text.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => text.push('_'),
        }
    }
    text
}

/// Matches `^[a-z][a-zA-Z0-9_]*$`. Attribute keys use this without the
/// reserved-word check since reserved words are legal object keys.
pub fn is_bare_identifier_syntax(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.binary_search(&name).is_ok()
}
