//! Logos-based lexer for WKT
//!
//! Splits raw text into delimiters, separators, quoted text, numbers and
//! bare words. Whitespace is skipped. Keyword meaning is not decided here.

use logos::Logos;
use std::borrow::Cow;
use text_size::{TextRange, TextSize};

/// Primitive token classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `[` or `(`
    LeftDelimiter,
    /// `]` or `)`
    RightDelimiter,
    /// `,`
    Separator,
    /// `"..."` with `""` as an escaped quote
    Quoted,
    /// Numeric literal such as `-87`, `6378137.0` or `1E-06`
    Number,
    /// Anything else up to whitespace or punctuation: keywords, enum values, dates
    Word,
    /// Text the lexer could not classify (an unterminated quote)
    Error,
}

/// A token with its kind, raw text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl<'a> Token<'a> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The token's value: quoted text with quotes stripped and `""` unescaped,
    /// every other kind as written.
    pub fn value(&self) -> Cow<'a, str> {
        if self.kind != TokenKind::Quoted {
            return Cow::Borrowed(self.text);
        }
        let inner = &self.text[1..self.text.len() - 1];
        if inner.contains("\"\"") {
            Cow::Owned(inner.replace("\"\"", "\""))
        } else {
            Cow::Borrowed(inner)
        }
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum LogosToken {
    #[token("[")]
    #[token("(")]
    LeftDelimiter,

    #[token("]")]
    #[token(")")]
    RightDelimiter,

    #[token(",")]
    Separator,

    #[regex(r#""([^"]|"")*""#)]
    Quoted,

    // Ties with Word on plain digits; numbers win
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", priority = 5)]
    Number,

    #[regex(r#"[^ \t\r\n\f\[\]\(\),"]+"#, priority = 1)]
    Word,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::LeftDelimiter => TokenKind::LeftDelimiter,
            LogosToken::RightDelimiter => TokenKind::RightDelimiter,
            LogosToken::Separator => TokenKind::Separator,
            LogosToken::Quoted => TokenKind::Quoted,
            LogosToken::Number => TokenKind::Number,
            LogosToken::Word => TokenKind::Word,
        }
    }
}
