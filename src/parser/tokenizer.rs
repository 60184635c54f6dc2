//! Token stream with lookahead and push-back
//!
//! The whole input is lexed up front into a vector; the cursor moves over it.
//! Peeking any distance is an index lookup and pushing a token back is a
//! cursor decrement, so the reader can look ahead for a keyword and let the
//! production that owns it re-read it.

use text_size::TextSize;

use super::errors::{ErrorKind, Result, SyntaxError};
use super::lexer::{Token, TokenKind, tokenize};

pub struct Tokenizer<'a> {
    text: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            tokens: tokenize(text),
            pos: 0,
        }
    }

    /// The original input
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Index of the next token to be read
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Offset just past the input, used for errors at end of text
    pub fn end_offset(&self) -> TextSize {
        TextSize::of(self.text)
    }

    /// Offset of the next token, or the end of input
    pub fn offset(&self) -> TextSize {
        self.tokens
            .get(self.pos)
            .map(|t| t.offset)
            .unwrap_or_else(|| self.end_offset())
    }

    /// Advance and return the next token
    pub fn read_token(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    /// Look `n` tokens ahead without consuming; `peek_token(0)` is the next token
    pub fn peek_token(&self, n: usize) -> Option<Token<'a>> {
        self.tokens.get(self.pos + n).copied()
    }

    /// Re-queue the most recently read token.
    ///
    /// Returns `false` when nothing has been read yet.
    pub fn push_token(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos -= 1;
        true
    }

    /// Rewind to the start of the input
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Like [`read_token`](Self::read_token) but running out of input is an error
    pub fn read_expected_token(&mut self) -> Result<Token<'a>> {
        match self.read_token() {
            Some(token) => Ok(token),
            None => Err(SyntaxError::at_offset(
                ErrorKind::UnbalancedDelimiter,
                "unexpected end of text",
                self.end_offset(),
            )),
        }
    }

    /// Read a token of the given kind
    pub fn read_kind(&mut self, kind: TokenKind, expected: &str) -> Result<Token<'a>> {
        let token = self.read_expected_token()?;
        if token.kind != kind {
            return Err(unexpected(&token, expected));
        }
        Ok(token)
    }

    pub fn read_number(&mut self) -> Result<f64> {
        let token = self.read_expected_token()?;
        parse_number(&token)
    }

    /// Read a number, rejecting a leading `-`
    pub fn read_unsigned_number(&mut self) -> Result<f64> {
        let token = self.read_expected_token()?;
        if token.kind == TokenKind::Number && token.text.starts_with('-') {
            return Err(unexpected(&token, "an unsigned number"));
        }
        parse_number(&token)
    }

    pub fn read_unsigned_integer(&mut self) -> Result<u64> {
        let token = self.read_expected_token()?;
        if token.kind != TokenKind::Number {
            return Err(unexpected(&token, "an unsigned integer"));
        }
        let digits = token.text.strip_prefix('+').unwrap_or(token.text);
        digits
            .parse::<u64>()
            .map_err(|_| unexpected(&token, "an unsigned integer"))
    }
}

fn parse_number(token: &Token<'_>) -> Result<f64> {
    if token.kind != TokenKind::Number {
        return Err(unexpected(token, "a number"));
    }
    token
        .text
        .parse::<f64>()
        .map_err(|_| unexpected(token, "a number"))
}

pub(crate) fn unexpected(token: &Token<'_>, expected: &str) -> SyntaxError {
    SyntaxError::new(
        ErrorKind::UnexpectedToken,
        format!("expected {expected} but found '{}'", token.text),
        token.range(),
    )
}
