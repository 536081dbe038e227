//! Builder-code reader
//!
//! Reads the call syntax the translator writes and turns it back into builder arguments:
//!
//!     HTML.div({class: "a", hidden: true},
//!         "text",
//!         `multi
//!         line`,
//!         SVG["switch"](),
//!     )
//!
//! Accessors resolve through the element factories, so a strict reader rejects tags outside
//! the known tables. An accessor that is not called (`HTML.hr`) is read as a lazy producer.
//! Anything beyond this grammar is an error carrying the line and column where reading
//! stopped.

use crate::dom::Fragment;
use crate::error::ReadError;
use crate::factory::ElementFactory;
use crate::value::{Object, Value};

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    /// Double-quoted string, decoded
    StringLiteral,
    /// Backtick literal, decoded
    TemplateLiteral,
    NumericLiteral,
    Identifier,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Comma,
    Dot,
    Colon,
    Minus,
    Eof,
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    text: String,
    line: usize,
    col: usize,
}

struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    tokens: Vec<Token>,
}

impl Tokenizer {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            tokens: Vec::new(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn emit(&mut self, kind: TokenKind, text: String, line: usize, col: usize) {
        self.tokens.push(Token {
            kind,
            text,
            line,
            col,
        });
    }

    fn error(&self, message: impl Into<String>) -> ReadError {
        ReadError::new(message, self.line, self.col)
    }

    fn tokenize(mut self) -> Result<Vec<Token>, ReadError> {
        while let Some(ch) = self.peek() {
            let (line, col) = (self.line, self.col);
            match ch {
                c if c.is_whitespace() => {
                    self.advance();
                }
                '/' if self.peek_at(1) == Some('/') => self.skip_line_comment(),
                '/' if self.peek_at(1) == Some('*') => self.skip_block_comment()?,
                '"' => {
                    let text = self.read_string()?;
                    self.emit(TokenKind::StringLiteral, text, line, col);
                }
                '`' => {
                    let text = self.read_template()?;
                    self.emit(TokenKind::TemplateLiteral, text, line, col);
                }
                c if c.is_ascii_digit()
                    || (c == '.' && self.peek_at(1).is_some_and(|n| n.is_ascii_digit())) =>
                {
                    let text = self.read_number();
                    self.emit(TokenKind::NumericLiteral, text, line, col);
                }
                c if c.is_alphabetic() || c == '_' || c == '$' => {
                    let text = self.read_identifier();
                    self.emit(TokenKind::Identifier, text, line, col);
                }
                _ => {
                    let kind = match ch {
                        '(' => TokenKind::OpenParen,
                        ')' => TokenKind::CloseParen,
                        '{' => TokenKind::OpenBrace,
                        '}' => TokenKind::CloseBrace,
                        '[' => TokenKind::OpenBracket,
                        ']' => TokenKind::CloseBracket,
                        ',' => TokenKind::Comma,
                        '.' => TokenKind::Dot,
                        ':' => TokenKind::Colon,
                        '-' => TokenKind::Minus,
                        other => return Err(self.error(format!("unexpected character '{other}'"))),
                    };
                    self.advance();
                    self.emit(kind, ch.to_string(), line, col);
                }
            }
        }
        let (line, col) = (self.line, self.col);
        self.emit(TokenKind::Eof, String::new(), line, col);
        Ok(self.tokens)
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), ReadError> {
        self.advance();
        self.advance();
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return Ok(());
                }
                Some(_) => {}
                None => return Err(self.error("unterminated comment")),
            }
        }
    }

    /// Reads a double-quoted literal and decodes it as a JSON string.
    fn read_string(&mut self) -> Result<String, ReadError> {
        let (line, col) = (self.line, self.col);
        let mut raw = String::new();
        raw.extend(self.advance());
        loop {
            match self.advance() {
                Some('\\') => {
                    raw.push('\\');
                    match self.advance() {
                        Some(escaped) => raw.push(escaped),
                        None => break,
                    }
                }
                Some('"') => {
                    raw.push('"');
                    return serde_json::from_str(&raw).map_err(|e| {
                        ReadError::new(format!("invalid string literal: {e}"), line, col)
                    });
                }
                Some(ch) => raw.push(ch),
                None => break,
            }
        }
        Err(ReadError::new("unterminated string literal", line, col))
    }

    fn read_template(&mut self) -> Result<String, ReadError> {
        let (line, col) = (self.line, self.col);
        self.advance();
        let mut text = String::new();
        loop {
            match self.advance() {
                Some('\\') => match self.advance() {
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some('r') => text.push('\r'),
                    Some(escaped) => text.push(escaped),
                    None => break,
                },
                Some('$') if self.peek() == Some('{') => {
                    return Err(self.error("template interpolation is not supported"));
                }
                Some('`') => return Ok(text),
                Some(ch) => text.push(ch),
                None => break,
            }
        }
        Err(ReadError::new("unterminated template literal", line, col))
    }

    fn read_number(&mut self) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() || ch == '.' {
                text.extend(self.advance());
            } else if ch == 'e' || ch == 'E' {
                text.extend(self.advance());
                if matches!(self.peek(), Some('+') | Some('-')) {
                    text.extend(self.advance());
                }
            } else {
                break;
            }
        }
        text
    }

    fn read_identifier(&mut self) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' || ch == '$' {
                text.extend(self.advance());
            } else {
                break;
            }
        }
        text
    }
}

/// Reads builder code into a tree.
#[derive(Debug, Clone)]
pub struct Reader {
    html: ElementFactory,
    svg: ElementFactory,
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

impl Reader {
    /// A reader accepting any accessor name.
    pub fn new() -> Self {
        Self::with_factories(ElementFactory::html(), ElementFactory::svg())
    }

    /// A reader accepting only known tags.
    pub fn strict() -> Self {
        Self::with_factories(ElementFactory::strict_html(), ElementFactory::strict_svg())
    }

    pub fn with_factories(html: ElementFactory, svg: ElementFactory) -> Self {
        Reader { html, svg }
    }

    /// Reads `source` and applies the top-level items to a new fragment.
    pub fn read(&self, source: &str) -> Result<Fragment, ReadError> {
        let values = self.read_values(source)?;
        Ok(self.html.fragment(values))
    }

    /// Reads `source` into the top-level argument list without applying it.
    pub fn read_values(&self, source: &str) -> Result<Vec<Value>, ReadError> {
        let tokens = Tokenizer::new(source).tokenize()?;
        let mut parser = Parser {
            tokens,
            pos: 0,
            reader: self,
        };
        parser.items()
    }
}

struct Parser<'r> {
    tokens: Vec<Token>,
    pos: usize,
    reader: &'r Reader,
}

impl Parser<'_> {
    fn peek(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.pos.min(last)]
    }

    fn next(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn error_at(token: &Token, message: impl Into<String>) -> ReadError {
        ReadError::new(message, token.line, token.col)
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token, ReadError> {
        let token = self.next();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(Self::error_at(&token, format!("expected {what}")))
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.next();
            true
        } else {
            false
        }
    }

    fn items(&mut self) -> Result<Vec<Value>, ReadError> {
        let mut items = Vec::new();
        while self.peek().kind != TokenKind::Eof {
            items.push(self.expression()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::Eof, "end of input")?;
        Ok(items)
    }

    fn expression(&mut self) -> Result<Value, ReadError> {
        let token = self.peek().clone();
        match (&token.kind, token.text.as_str()) {
            (TokenKind::Identifier, "HTML") => {
                self.next();
                self.call(&token, false)
            }
            (TokenKind::Identifier, "SVG") => {
                self.next();
                self.call(&token, true)
            }
            _ => self.scalar(),
        }
    }

    fn call(&mut self, namespace: &Token, svg: bool) -> Result<Value, ReadError> {
        let accessor = match self.next() {
            dot if dot.kind == TokenKind::Dot => {
                self.expect(TokenKind::Identifier, "accessor name")?.text
            }
            bracket if bracket.kind == TokenKind::OpenBracket => {
                let name = self.next();
                if !matches!(
                    name.kind,
                    TokenKind::StringLiteral | TokenKind::TemplateLiteral
                ) {
                    return Err(Self::error_at(&name, "expected quoted accessor name"));
                }
                self.expect(TokenKind::CloseBracket, "']'")?;
                name.text
            }
            other => return Err(Self::error_at(&other, "expected '.' or '[' after namespace")),
        };

        let reader = self.reader;
        let factory = if svg { &reader.svg } else { &reader.html };
        let unknown = || {
            Self::error_at(
                namespace,
                format!("unknown {} accessor '{accessor}'", namespace.text),
            )
        };

        if !self.eat(TokenKind::OpenParen) {
            return factory.producer(&accessor).ok_or_else(unknown);
        }
        let args = self.arguments()?;
        factory
            .create(&accessor, args)
            .map(Value::from)
            .ok_or_else(unknown)
    }

    fn arguments(&mut self) -> Result<Vec<Value>, ReadError> {
        let mut args = Vec::new();
        loop {
            if self.eat(TokenKind::CloseParen) {
                return Ok(args);
            }
            args.push(self.expression()?);
            if !self.eat(TokenKind::Comma) {
                self.expect(TokenKind::CloseParen, "',' or ')'")?;
                return Ok(args);
            }
        }
    }

    fn object(&mut self) -> Result<Value, ReadError> {
        let mut object = Object::new();
        loop {
            if self.eat(TokenKind::CloseBrace) {
                return Ok(Value::Object(object));
            }
            let key = self.next();
            if !matches!(key.kind, TokenKind::Identifier | TokenKind::StringLiteral) {
                return Err(Self::error_at(&key, "expected attribute name"));
            }
            self.expect(TokenKind::Colon, "':'")?;
            let value = self.scalar()?;
            object.insert(key.text, value);
            if !self.eat(TokenKind::Comma) {
                self.expect(TokenKind::CloseBrace, "',' or '}'")?;
                return Ok(Value::Object(object));
            }
        }
    }

    fn scalar(&mut self) -> Result<Value, ReadError> {
        let token = self.next();
        match token.kind {
            TokenKind::StringLiteral | TokenKind::TemplateLiteral => Ok(Value::Str(token.text)),
            TokenKind::NumericLiteral => Self::number(&token).map(Value::Number),
            TokenKind::Minus => {
                let operand = self.next();
                match (&operand.kind, operand.text.as_str()) {
                    (TokenKind::NumericLiteral, _) => {
                        Self::number(&operand).map(|n| Value::Number(-n))
                    }
                    (TokenKind::Identifier, "Infinity") => Ok(Value::Number(f64::NEG_INFINITY)),
                    _ => Err(Self::error_at(&operand, "expected number after '-'")),
                }
            }
            TokenKind::OpenBrace => self.object(),
            TokenKind::Identifier => match token.text.as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                "null" => Ok(Value::Null),
                "undefined" => Ok(Value::Undefined),
                "Infinity" => Ok(Value::Number(f64::INFINITY)),
                "NaN" => Ok(Value::Number(f64::NAN)),
                other => Err(Self::error_at(&token, format!("unexpected identifier '{other}'"))),
            },
            TokenKind::Eof => Err(Self::error_at(&token, "unexpected end of input")),
            _ => Err(Self::error_at(
                &token,
                format!("unexpected '{}'", token.text),
            )),
        }
    }

    fn number(token: &Token) -> Result<f64, ReadError> {
        token
            .text
            .parse()
            .map_err(|_| Self::error_at(token, format!("invalid number '{}'", token.text)))
    }
}
