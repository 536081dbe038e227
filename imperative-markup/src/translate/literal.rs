//! String and attribute-value literals.

use crate::value::number_to_string;

/// Double-quoted JSON string literal.
pub fn quote(raw: &str) -> String {
    serde_json::Value::String(raw.to_string()).to_string()
}

/// Backtick literal. Backslashes, backticks and `${` are escaped so the
/// literal reads back as exactly `raw`.
pub fn block_quote(raw: &str) -> String {
    let mut literal = String::with_capacity(raw.len() + 2);
    literal.push('`');
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '`' => literal.push_str("\\`"),
            '$' if chars.peek() == Some(&'{') => literal.push_str("\\$"),
            other => literal.push(other),
        }
    }
    literal.push('`');
    literal
}

/// The ECMAScript `\s` class. Unlike `char::is_whitespace`, NEL (U+0085) is
/// not included and the BOM (U+FEFF) is.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Formats a text node. Whitespace-only text yields `None`.
///
/// Leading indentation (any run of tabs, newlines and two-space units) is
/// dropped and trailing whitespace collapses to one space. Text that still
/// contains a tab or newline becomes a block literal.
pub fn format_text(raw: &str) -> Option<String> {
    if !raw.is_empty() && raw.chars().all(is_js_whitespace) {
        return None;
    }

    let mut text = raw;
    loop {
        if let Some(rest) = text.strip_prefix(['\t', '\n']) {
            text = rest;
        } else if let Some(rest) = text.strip_prefix("  ") {
            text = rest;
        } else {
            break;
        }
    }

    let trimmed = text.trim_end_matches(is_js_whitespace);
    let text = if trimmed.len() < text.len() {
        format!("{trimmed} ")
    } else {
        trimmed.to_string()
    };

    if text.contains(['\t', '\n']) {
        Some(block_quote(&text))
    } else {
        Some(quote(&text))
    }
}

/// Formats an attribute value: empty becomes `true`, values that read back
/// as the same number stay bare, everything else is quoted.
pub fn format_attribute_value(raw: &str) -> String {
    if raw.is_empty() {
        return "true".to_string();
    }
    if is_canonical_number(raw) {
        raw.to_string()
    } else {
        quote(raw)
    }
}

fn is_canonical_number(raw: &str) -> bool {
    match parse_float(raw) {
        Some(number) if !number.is_nan() => number_to_string(number) == raw,
        _ => false,
    }
}

fn parse_float(raw: &str) -> Option<f64> {
    match raw {
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ if raw.contains(|c: char| c.is_ascii_alphabetic() && c != 'e') => None,
        _ => raw.parse().ok(),
    }
}
